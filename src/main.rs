use anyhow::{Context, Result};

use profile_page::app::App;
use profile_page::config::AppConfig;
use profile_page::{data, logging};

fn main() -> Result<()> {
    logging::init();

    data::validate_registry().context("link registry is invalid")?;
    let config = AppConfig::load().context("failed to load configuration")?;

    App::run(config)
}
