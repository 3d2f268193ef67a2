use anyhow::Result;

use cerebro::App;
use cerebro_auth::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings.validate().map_err(anyhow::Error::msg)?;

    // Logging is initialized in App::run() once the terminal is ours
    App::new(settings).run().await?;

    Ok(())
}
