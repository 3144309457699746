use std::cell::RefCell;

use common::subject_observer::Observer;
use log::info;
use weather::{WeatherEvent, WeatherStation};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStatistics {
    pub average: f32,
    pub max: f32,
    pub min: f32,
    pub count: usize,
}

impl TemperatureStatistics {
    pub fn from_history(temperatures: &[f32]) -> Option<Self> {
        let &first = temperatures.first()?;
        let (min, max, sum) = temperatures.iter().fold(
            (first, first, 0.0),
            |(min, max, sum): (f32, f32, f32), &temperature| {
                (min.min(temperature), max.max(temperature), sum + temperature)
            },
        );
        Some(TemperatureStatistics {
            average: sum / temperatures.len() as f32,
            max,
            min,
            count: temperatures.len(),
        })
    }
}

pub struct StatisticsDisplay {
    name: String,
    temperatures: RefCell<Vec<f32>>,
}

impl StatisticsDisplay {
    pub fn new(name: impl Into<String>) -> Self {
        StatisticsDisplay {
            name: name.into(),
            temperatures: RefCell::new(vec![]),
        }
    }

    pub fn history(&self) -> Vec<f32> {
        self.temperatures.borrow().clone()
    }

    // Full scan over the whole history on every call.
    pub fn statistics(&self) -> Option<TemperatureStatistics> {
        TemperatureStatistics::from_history(&self.temperatures.borrow())
    }

    pub fn display(&self) -> Option<String> {
        self.statistics().map(|stats| {
            format!(
                "Avg/Max/Min temperature: {}/{}/{}°C",
                stats.average, stats.max, stats.min
            )
        })
    }
}

impl Observer<WeatherStation, WeatherEvent> for StatisticsDisplay {
    fn update(&self, source: &WeatherStation, event: WeatherEvent) {
        if event == WeatherEvent::MeasurementsChanged {
            self.temperatures.borrow_mut().push(source.temperature());
            if let Some(line) = self.display() {
                info!("[{}] {}", self.name, line);
            }
        }
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
