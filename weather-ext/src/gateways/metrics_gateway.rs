use std::{fmt::Debug, io::Error, net::ToSocketAddrs};

use common::subject_observer::Observer;
use dipstick::{Gauge, Input, InputScope, Log, Statsd};
use log::{trace, warn};
use weather::{Measurements, WeatherEvent, WeatherStation};

use super::{HUMIDITY, PRESSURE, TEMPERATURE, WEATHER_PROXY};

const NAME: &str = "Metrics Gateway";

/// Publishes every measurement as a gauge, multiplied by `factor`.
pub struct MetricsGateway {
    factor: f32,
}

impl MetricsGateway {
    pub fn to_statsd<A>(address: A, factor: f32) -> Result<Self, Error>
    where
        A: ToSocketAddrs + Debug + Clone,
    {
        let statsd_scope = Statsd::send_to(address)?.metrics();
        Ok(Self::with_target(statsd_scope, factor))
    }

    pub fn to_log(factor: f32) -> Self {
        let log_scope = Log::to_log().level(log::Level::Info).metrics();
        Self::with_target(log_scope, factor)
    }

    /// Routes the gauges to any dipstick scope, replacing the previous target.
    pub fn with_target<S>(scope: S, factor: f32) -> Self
    where
        S: InputScope + Send + Sync + 'static,
    {
        WEATHER_PROXY.target(scope);
        MetricsGateway { factor }
    }

    fn scaled(&self, measurements: Measurements) -> (f32, f32, f32) {
        (
            measurements.temperature * self.factor,
            measurements.humidity * self.factor,
            measurements.pressure * self.factor,
        )
    }
}

impl Observer<WeatherStation, WeatherEvent> for MetricsGateway {
    fn update(&self, source: &WeatherStation, event: WeatherEvent) {
        if event == WeatherEvent::MeasurementsChanged {
            let (temperature, humidity, pressure) = self.scaled(source.measurements());

            trace!("Sending metrics: temperature={temperature}, humidity={humidity}, pressure={pressure}");
            // Gauges only take integral values.
            let gauges: [(&Gauge, f32); 3] = [
                (&TEMPERATURE, temperature),
                (&HUMIDITY, humidity),
                (&PRESSURE, pressure),
            ];
            for (gauge, value) in gauges {
                if value.is_finite() {
                    gauge.value(value);
                } else {
                    warn!("Skipping non finite metric value {value}");
                }
            }
        }
    }

    fn name(&self) -> String {
        NAME.to_string()
    }
}
