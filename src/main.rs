use std::error::Error;

mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine: deployments set the variables directly.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    telemetry::init()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting portfolio-rag");

    if let Err(e) = api::start().await {
        tracing::error!(error = %e, "server stopped with error");
        return Err(e.into());
    }

    tracing::info!("server stopped");
    Ok(())
}
