use std::cell::Cell;

use common::subject_observer::Observer;
use log::info;
use weather::{WeatherEvent, WeatherStation};

pub struct CurrentConditionsDisplay {
    name: String,
    conditions: Cell<Option<(f32, f32)>>,
}

impl CurrentConditionsDisplay {
    pub fn new(name: impl Into<String>) -> Self {
        CurrentConditionsDisplay {
            name: name.into(),
            conditions: Cell::new(None),
        }
    }

    /// Latest `(temperature, humidity)`, if any measurement was received.
    pub fn conditions(&self) -> Option<(f32, f32)> {
        self.conditions.get()
    }

    pub fn display(&self) -> Option<String> {
        self.conditions().map(|(temperature, humidity)| {
            format!("Current conditions: {temperature}°C and {humidity}% humidity")
        })
    }
}

impl Observer<WeatherStation, WeatherEvent> for CurrentConditionsDisplay {
    fn update(&self, source: &WeatherStation, event: WeatherEvent) {
        if event == WeatherEvent::MeasurementsChanged {
            self.conditions
                .set(Some((source.temperature(), source.humidity())));
            if let Some(line) = self.display() {
                info!("[{}] {}", self.name, line);
            }
        }
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
