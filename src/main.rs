mod actions;
mod app;
mod config;
mod document;
mod logging;
mod sidebar;
mod state;
mod types;
mod ui;
mod utils;

use app::App;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _log_guard = logging::init()?;

    let cli_source = std::env::args().nth(1);
    let app = App::new(cli_source)?;

    let terminal = ratatui::init();
    let app_result = app.run(terminal).await;
    ratatui::restore();

    if let Err(e) = &app_result {
        tracing::error!("exiting with error: {e:#}");
    }
    app_result
}
