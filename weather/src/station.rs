use std::rc::Rc;

use common::subject_observer::{Observer, Observers, Subject};
use log::debug;

use crate::{Measurements, WeatherEvent};

#[derive(Default)]
pub struct WeatherStation {
    observers: Observers<Self, WeatherEvent>,
    measurements: Measurements,
}

impl Subject<WeatherEvent> for WeatherStation {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, WeatherEvent>>) {
        self.observers.register(observer);
    }

    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, WeatherEvent>>) {
        self.observers.unregister(&observer);
    }

    fn notify_observers(&self, event: WeatherEvent) {
        self.observers.notify(self, event);
    }
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites every measurement then notifies observers, without any validation.
    pub fn set_measurements(&mut self, temperature: f32, humidity: f32, pressure: f32) {
        self.measurements = Measurements::new(temperature, humidity, pressure);
        debug!("New measurements received: {}", self.measurements);
        self.measurements_changed();
    }

    pub fn measurements_changed(&self) {
        self.notify_observers(WeatherEvent::MeasurementsChanged);
    }

    pub fn temperature(&self) -> f32 {
        self.measurements.temperature
    }

    pub fn humidity(&self) -> f32 {
        self.measurements.humidity
    }

    pub fn pressure(&self) -> f32 {
        self.measurements.pressure
    }

    pub fn measurements(&self) -> Measurements {
        self.measurements
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn observer_names(&self) -> Vec<String> {
        self.observers.names()
    }

    pub fn state(&self) -> String {
        self.measurements.to_string()
    }
}
