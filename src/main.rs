use log::info;
use recipe_lens::server::{router, AppState};
use recipe_lens::{AppConfig, RecipePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    // Fails here, before binding, if the model credential is missing
    let pipeline = RecipePipeline::from_config(&config)?;

    let app = router(AppState::new(pipeline));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("recipe-lens listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
