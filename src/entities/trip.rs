use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Economy,
    Comfort,
    Luxury,
    Xl,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 4] = [
        VehicleClass::Economy,
        VehicleClass::Comfort,
        VehicleClass::Luxury,
        VehicleClass::Xl,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub distance_km: f64,
    pub vehicle_class: VehicleClass,
}

impl TripRequest {
    pub fn new(distance_km: f64, vehicle_class: VehicleClass) -> Self {
        Self {
            distance_km,
            vehicle_class,
        }
    }
}
