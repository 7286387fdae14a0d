mod app;
mod archive;
mod card;
mod frame_clock;
mod gift;
mod logging;

use yuletide_config::{Config, log_path};

use crate::app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    logging::init(config.log_level, log_path().as_deref());
    log::info!(
        "starting yuletide: unlock {}/{}, {} fps, snow {}",
        config.unlock.month(),
        config.unlock.day(),
        config.display.fps,
        if config.display.snow { "on" } else { "off" }
    );

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();

    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}
