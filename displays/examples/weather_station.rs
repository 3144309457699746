use std::env;

use anyhow::Result;
use displays::scenario::{WeatherScenario, DEFAULT_DETACH_AFTER, DEFAULT_READINGS};
use log::info;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let detach_after = env::args()
        .nth(1)
        .map(|arg| arg.parse::<usize>())
        .transpose()?
        .unwrap_or(DEFAULT_DETACH_AFTER);

    info!("Weather station example");
    let mut scenario = WeatherScenario::default();
    scenario.run(&DEFAULT_READINGS, detach_after);

    if let Some(stats) = scenario.statistics.statistics() {
        info!(
            "{} readings, final station state: {}",
            stats.count,
            scenario.station.state()
        );
    }
    Ok(())
}
