use std::path::PathBuf;

use clap::Parser;
use jotter::bin_constants::DEFAULT_CONFIG_FILE;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_is_compiled_in() {
        let config = CliConfig::parse_from(["jotterd"]);
        assert_eq!(config.config_file, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn config_file_flag_overrides_the_default() {
        let config = CliConfig::parse_from(["jotterd", "--config-file=/tmp/jotter.toml"]);
        assert_eq!(config.config_file, PathBuf::from("/tmp/jotter.toml"));
    }
}
