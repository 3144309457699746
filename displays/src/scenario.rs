use std::rc::Rc;

use common::subject_observer::{Observer, Subject};
use log::info;
use weather::{Measurements, WeatherStation};

use crate::{CurrentConditionsDisplay, ForecastDisplay, StatisticsDisplay};

pub const DEFAULT_READINGS: [Measurements; 4] = [
    Measurements::new(25.0, 65.0, 30.4),
    Measurements::new(27.0, 70.0, 29.2),
    Measurements::new(22.0, 90.0, 29.2),
    Measurements::new(28.0, 60.0, 30.8),
];

pub const DEFAULT_DETACH_AFTER: usize = 3;

#[derive(Debug, Clone)]
pub struct DisplayNames {
    pub current_conditions: String,
    pub statistics: String,
    pub forecast: String,
}

impl Default for DisplayNames {
    fn default() -> Self {
        DisplayNames {
            current_conditions: "Current Conditions Display".to_string(),
            statistics: "Statistics Display".to_string(),
            forecast: "Forecast Display".to_string(),
        }
    }
}

/// A station with the three displays attached.
pub struct WeatherScenario {
    pub station: WeatherStation,
    pub current_conditions: Rc<CurrentConditionsDisplay>,
    pub statistics: Rc<StatisticsDisplay>,
    pub forecast: Rc<ForecastDisplay>,
}

impl WeatherScenario {
    pub fn new(names: &DisplayNames) -> Self {
        let mut station = WeatherStation::new();
        let current_conditions = Rc::new(CurrentConditionsDisplay::new(&names.current_conditions));
        let statistics = Rc::new(StatisticsDisplay::new(&names.statistics));
        let forecast = Rc::new(ForecastDisplay::new(&names.forecast));

        station.register_observer(current_conditions.clone());
        station.register_observer(statistics.clone());
        station.register_observer(forecast.clone());

        WeatherScenario {
            station,
            current_conditions,
            statistics,
            forecast,
        }
    }

    /// Publishes every reading, detaching the current conditions display once
    /// `detach_after` readings went through.
    pub fn run(&mut self, readings: &[Measurements], detach_after: usize) {
        for (index, reading) in readings.iter().enumerate() {
            if index == detach_after {
                info!("Detaching {}", self.current_conditions.name());
                self.station
                    .unregister_observer(self.current_conditions.clone());
            }
            info!("Measurements #{}: {}", index + 1, reading);
            self.station
                .set_measurements(reading.temperature, reading.humidity, reading.pressure);
        }
    }
}

impl Default for WeatherScenario {
    fn default() -> Self {
        Self::new(&DisplayNames::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{WeatherScenario, DEFAULT_DETACH_AFTER, DEFAULT_READINGS};
    use crate::Forecast;

    #[test]
    fn test_scenario_should_attach_all_displays() {
        // When
        let scenario = WeatherScenario::default();

        // Then
        assert_eq!(
            vec![
                "Current Conditions Display",
                "Statistics Display",
                "Forecast Display"
            ],
            scenario.station.observer_names()
        );
    }

    #[test]
    fn test_default_scenario_run() {
        // Given
        let mut scenario = WeatherScenario::default();

        // When
        scenario.run(&DEFAULT_READINGS, DEFAULT_DETACH_AFTER);

        // Then
        assert_eq!(
            Some((22.0, 90.0)),
            scenario.current_conditions.conditions(),
            "Should stop updating once detached"
        );
        assert_eq!(2, scenario.station.observer_count());
        assert_eq!(
            vec![25.0, 27.0, 22.0, 28.0],
            scenario.statistics.history(),
            "Should keep receiving after the detach"
        );
        let stats = scenario.statistics.statistics().unwrap();
        assert_eq!((25.5, 28.0, 22.0), (stats.average, stats.max, stats.min));
        assert_eq!(Forecast::Improving, scenario.forecast.forecast());
    }

    #[test]
    fn test_scenario_run_without_detach() {
        // Given
        let mut scenario = WeatherScenario::default();

        // When
        scenario.run(&DEFAULT_READINGS, DEFAULT_READINGS.len());

        // Then
        assert_eq!(3, scenario.station.observer_count());
        assert_eq!(Some((28.0, 60.0)), scenario.current_conditions.conditions());
    }
}
