#[tokio::main]
async fn main() -> dicebot::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("dicebot=info,serenity=warn"),
    )
    .init();
    log::info!("Starting dicebot Discord bot");

    match dicebot::run().await {
        Ok(()) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {}", e);
            Err(e)
        }
    }
}
