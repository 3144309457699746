use config::{Config, Environment, File, FileFormat};
use displays::scenario::DisplayNames;
use serde::Deserialize;
use strum::Display;
use validator::Validate;
use weather::Measurements;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MetricsSink {
    #[serde(rename = "none", alias = "disabled")]
    #[strum(serialize = "none")]
    Disabled,
    Log,
    Statsd,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub current_conditions_name: String,
    #[validate(length(min = 1))]
    pub statistics_name: String,
    #[validate(length(min = 1))]
    pub forecast_name: String,
    pub detach_after: usize,
    pub metrics_sink: MetricsSink,
    #[validate(range(exclusive_min = 0.0))]
    pub metrics_factor: f32,
    pub statsd_host: String,
    pub statsd_port: u16,
    #[validate(length(min = 1))]
    pub readings: Vec<Measurements>,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn display_names(&self) -> DisplayNames {
        DisplayNames {
            current_conditions: self.current_conditions_name.clone(),
            statistics: self.statistics_name.clone(),
            forecast: self.forecast_name.clone(),
        }
    }
}
