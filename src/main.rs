use pomotui::app::App;
use pomotui::config::TimerConfig;
use pomotui::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = TimerConfig::default();

    let mut app = App::new(config)?;
    app.init()?;
    let result = app.run().await;

    // Restore the terminal before surfacing any loop error
    app.restore()?;
    result
}
