use serde::{Deserialize, Serialize};

use crate::config::hasher_config::HasherConfigData;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AppConfigData {
    #[serde(default)]
    pub table_url: String,
    #[serde(default)]
    pub table_api_key: String,
    #[serde(default = "default_login_username")]
    pub login_username: String,
    #[serde(default = "default_login_password")]
    pub login_password: String,
    #[serde(default)]
    pub hasher_config: HasherConfigData,
}

impl Default for AppConfigData {
    fn default() -> Self {
        AppConfigData {
            table_url: String::new(),
            table_api_key: String::new(),
            login_username: default_login_username(),
            login_password: default_login_password(),
            hasher_config: HasherConfigData::default(),
        }
    }
}

// demo credentials, meant to be overridden per deployment
fn default_login_username() -> String {
    "admin".to_owned()
}

fn default_login_password() -> String {
    "admin123".to_owned()
}
