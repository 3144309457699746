use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

pub mod station;

pub use station::WeatherStation;

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherEvent {
    MeasurementsChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 3]")]
pub struct Measurements {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

impl Measurements {
    pub const fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Measurements {
            temperature,
            humidity,
            pressure,
        }
    }
}

impl From<[f32; 3]> for Measurements {
    fn from([temperature, humidity, pressure]: [f32; 3]) -> Self {
        Measurements::new(temperature, humidity, pressure)
    }
}

impl From<(f32, f32, f32)> for Measurements {
    fn from((temperature, humidity, pressure): (f32, f32, f32)) -> Self {
        Measurements::new(temperature, humidity, pressure)
    }
}

impl Display for Measurements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temperature: {}°C, Humidity: {}%, Pressure: {} hPa",
            self.temperature, self.humidity, self.pressure
        )
    }
}
