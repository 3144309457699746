use std::sync::{
    atomic::{AtomicU64, Ordering},
    OnceLock,
};

use log::debug;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

/// Process-wide instance, created on first access.
pub struct Singleton {
    calls: AtomicU64,
}

impl Singleton {
    fn new() -> Self {
        debug!("Creating singleton instance");
        Singleton {
            calls: AtomicU64::new(0),
        }
    }

    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(Singleton::new)
    }

    /// Returns how many times it has been called, this call included.
    pub fn do_something(&self) -> u64 {
        self.calls.fetch_add(1, Ordering::SeqCst) + 1
    }
}
