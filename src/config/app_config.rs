use crate::config::app_config::data::AppConfigData;
use crate::config::hasher_config::HasherConfigData;

pub mod data;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Endpoint of the remote notes table, e.g.
    /// `https://example.supabase.co/rest/v1/notes`.
    pub table_url: String,
    pub table_api_key: String,
    pub login_username: String,
    pub login_password: String,
    pub hasher_config: HasherConfigData,
}

impl From<AppConfigData> for AppConfig {
    fn from(value: AppConfigData) -> Self {
        AppConfig {
            table_url: value.table_url,
            table_api_key: value.table_api_key,
            login_username: value.login_username,
            login_password: value.login_password,
            hasher_config: value.hasher_config,
        }
    }
}
