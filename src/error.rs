use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug};

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        config_parse_error(&err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 100,
        message: "invalid state".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn invalid_fare_error() -> Error {
    Error {
        code: 102,
        message: "invalid fare: please select a vehicle first".into(),
    }
}

pub fn invalid_discount_error() -> Error {
    Error {
        code: 103,
        message: "discount outside the negotiation range".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn invalid_setting_error(name: &str) -> Error {
    Error {
        code: 1,
        message: format!("invalid value for {}", name),
    }
}

pub fn config_file_error<T: Debug>(_: T) -> Error {
    Error {
        code: 2,
        message: "pricing config file error".into(),
    }
}

pub fn config_parse_error(detail: &str) -> Error {
    Error {
        code: 3,
        message: format!("invalid pricing config: {}", detail),
    }
}

pub fn server_error<T: Debug>(_: T) -> Error {
    Error {
        code: 4,
        message: "server error".into(),
    }
}
