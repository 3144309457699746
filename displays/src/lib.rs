pub mod current_conditions;
pub mod forecast;
pub mod scenario;
pub mod statistics;

pub use current_conditions::CurrentConditionsDisplay;
pub use forecast::{Forecast, ForecastDisplay};
pub use statistics::{StatisticsDisplay, TemperatureStatistics};
