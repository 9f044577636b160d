use rocket::figment::Figment;
use rocket::{Build, Rocket};
use thiserror::Error;

use crate::auth::Authenticator;
use crate::config::app_config::AppConfig;
use crate::hasher::{ProductionHasher, ProductionHasherConfig};
use crate::listing::ListingCache;
use crate::store::{NoteStore, NoteTable};
use crate::web::routes::WebRocketBuildExt;

pub mod guards;
pub mod routes;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid password hasher parameters: {0}")]
    HasherParams(argon2::Error),
}

/// Assembles the application: managed state plus the mounted routes. The
/// table client is injected so tests can run against a fake table.
pub fn build_rocket(
    figment: Figment,
    config: AppConfig,
    table: Box<dyn NoteTable>,
) -> Result<Rocket<Build>, SetupError> {
    let hasher_config = ProductionHasherConfig::try_from(&config.hasher_config)
        .map_err(SetupError::HasherParams)?;
    let authenticator = Authenticator::new(
        &config.login_username,
        &config.login_password,
        Box::new(ProductionHasher::new(hasher_config)),
    );
    Ok(rocket::custom(figment)
        .manage(NoteStore::new(table))
        .manage(ListingCache::new())
        .manage(authenticator)
        .install_jotter_web())
}
