use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

use crate::form::CloseBehavior;

#[derive(Deserialize, Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct FormSettings {
    #[serde(default)]
    pub close_on: CloseBehavior,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    #[serde(default)]
    pub form: FormSettings,
}

impl AppSettings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("appsettings").required(true))
            .add_source(File::with_name("appsettings.local").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"));

        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings = builder.build()?;
        settings.try_deserialize()
    }
}
