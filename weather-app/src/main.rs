use std::rc::Rc;

use anyhow::Result;
use common::subject_observer::Subject;
use displays::scenario::WeatherScenario;
use log::{debug, info};
use weather_ext::gateways::MetricsGateway;

use crate::config::app::{AppConfig, MetricsSink};

mod config;
mod error;

pub use error::AppError;

fn metrics_gateway(config: &AppConfig) -> Result<Option<Rc<MetricsGateway>>, AppError> {
    let gateway = match config.metrics_sink {
        MetricsSink::Disabled => None,
        MetricsSink::Log => Some(MetricsGateway::to_log(config.metrics_factor)),
        MetricsSink::Statsd => Some(MetricsGateway::to_statsd(
            (config.statsd_host.as_str(), config.statsd_port),
            config.metrics_factor,
        )?),
    };
    Ok(gateway.map(Rc::new))
}

fn run(config: &AppConfig) -> Result<WeatherScenario, AppError> {
    let mut scenario = WeatherScenario::new(&config.display_names());
    if let Some(gateway) = metrics_gateway(config)? {
        debug!("Publishing metrics to {}", config.metrics_sink);
        scenario.station.register_observer(gateway);
    }

    scenario.run(&config.readings, config.detach_after);
    Ok(scenario)
}

fn main() -> Result<()> {
    config::log::init()?;

    let config = AppConfig::new()?;
    debug!("Running weather station with configuration: {:?}", config);

    let scenario = run(&config)?;
    info!("Final state: {}", scenario.station.state());
    Ok(())
}
