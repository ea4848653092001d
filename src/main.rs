use nexride::config::Settings;
use nexride::engine::Engine;
use nexride::error::Error;
use nexride::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env()?;
    let engine = Engine::from_settings(&settings)?;

    serve(engine, settings.addr).await
}
