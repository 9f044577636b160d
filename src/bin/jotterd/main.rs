mod cli;

use clap::{Parser, crate_name};
use figment::Figment;
use jotter::config::app_config::AppConfig;
use jotter::config::app_config::data::AppConfigData;
use jotter::config::figment::FigmentExt;
use jotter::error_exit;
use jotter::logging::init_logging;
use jotter::store::HttpNoteTable;
use jotter::web::build_rocket;
use log::info;

use crate::cli::CliConfig;

fn main() {
    init_logging();

    info!("{} starting up", crate_name!());

    let cli_config = CliConfig::parse();
    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }
    let figment = Figment::from(rocket::Config::default())
        .setup_app_config(&cli_config.config_file);
    let config: AppConfig = match figment.extract::<AppConfigData>() {
        Ok(data) => data.into(),
        Err(e) => error_exit!("failed to load config: {e}"),
    };
    if config.table_url.is_empty() {
        error_exit!("notes table url is not configured")
    }

    let table = HttpNoteTable::new(&config);
    let rocket = match build_rocket(figment, config, Box::new(table)) {
        Ok(rocket) => rocket,
        Err(e) => error_exit!("{e}"),
    };
    if let Err(e) = rocket::execute(rocket.launch()) {
        error_exit!("failed to launch rocket: {e}");
    }
}
