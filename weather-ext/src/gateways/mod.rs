mod metrics_gateway;

pub use metrics_gateway::MetricsGateway;

use dipstick::*;

metrics! {
    WEATHER_PROXY: Proxy = "Weather_Proxy" => {
        TEMPERATURE: Gauge = "temperature";
        HUMIDITY: Gauge = "humidity";
        PRESSURE: Gauge = "pressure";
    }
}
