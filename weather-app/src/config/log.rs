use env_logger::{Builder, Env};
use log::SetLoggerError;

const DEFAULT_FILTER: &str = "info";

pub fn init() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).try_init()
}
