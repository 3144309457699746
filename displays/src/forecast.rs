use std::cell::Cell;

use common::subject_observer::Observer;
use log::info;
use strum::Display;
use weather::{WeatherEvent, WeatherStation};

pub const INITIAL_PRESSURE: f32 = 29.92;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Forecast {
    #[strum(to_string = "Improving weather on the way!")]
    Improving,
    #[strum(to_string = "More of the same")]
    Same,
    #[strum(to_string = "Watch out for cooler, rainy weather")]
    Cooler,
}

impl Forecast {
    pub fn from_trend(last_pressure: f32, current_pressure: f32) -> Self {
        if current_pressure > last_pressure {
            Forecast::Improving
        } else if current_pressure == last_pressure {
            Forecast::Same
        } else {
            Forecast::Cooler
        }
    }
}

pub struct ForecastDisplay {
    name: String,
    current_pressure: Cell<f32>,
    last_pressure: Cell<f32>,
}

impl ForecastDisplay {
    pub fn new(name: impl Into<String>) -> Self {
        ForecastDisplay {
            name: name.into(),
            current_pressure: Cell::new(INITIAL_PRESSURE),
            last_pressure: Cell::new(INITIAL_PRESSURE),
        }
    }

    pub fn forecast(&self) -> Forecast {
        Forecast::from_trend(self.last_pressure.get(), self.current_pressure.get())
    }

    pub fn display(&self) -> String {
        format!("Forecast: {}", self.forecast())
    }
}

impl Observer<WeatherStation, WeatherEvent> for ForecastDisplay {
    fn update(&self, source: &WeatherStation, event: WeatherEvent) {
        if event == WeatherEvent::MeasurementsChanged {
            self.last_pressure.set(self.current_pressure.get());
            self.current_pressure.set(source.pressure());
            info!("[{}] {}", self.name, self.display());
        }
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
