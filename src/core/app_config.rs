use crate::model::config::{Config, ConfigTable};
use crate::model::error::system::SystemError;
use crate::model::error::Error;
use std::io::ErrorKind;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    config: Config,
}

impl AppConfig {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let config = Self::load_config_file(path.as_ref()).await?;
        Ok(Self { config })
    }

    async fn load_config_file(path: &Path) -> Result<Config, Error> {
        let toml_string = fs::read_to_string(path)
            .await
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => SystemError::ConfigNotFound {
                    path: path.to_path_buf(),
                },
                _ => SystemError::InvalidConfig {
                    path: path.to_path_buf(),
                    cause: err.to_string(),
                },
            })?;
        let config_table =
            toml::from_str::<ConfigTable>(&toml_string).map_err(|err| SystemError::InvalidConfig {
                path: path.to_path_buf(),
                cause: err.message().to_string(),
            })?;
        Self::validate(config_table)
    }

    fn validate(config_table: ConfigTable) -> Result<Config, Error> {
        let required = |value: Option<String>| value.filter(|value| !value.is_empty());
        match (
            required(config_table.sd_card_path),
            required(config_table.backup_path),
        ) {
            (Some(sd_card_path), Some(backup_path)) => Ok(Config {
                sd_card_path: PathBuf::from(sd_card_path),
                backup_path: PathBuf::from(backup_path),
            }),
            _ => Err(SystemError::ConfigIncomplete.into()),
        }
    }
}

impl Deref for AppConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}
