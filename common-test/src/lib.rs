use std::{
    collections::HashMap,
    env,
    error::Error,
    ops::Range,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, Rng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

pub const TEMPERATURE_RANGE: Range<f32> = -30.0..45.0;
pub const HUMIDITY_RANGE: Range<f32> = 0.0..100.0;
pub const PRESSURE_RANGE: Range<f32> = 28.0..31.5;

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn seed_for(scope: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = seeds().write()?;
    let seed = *seeds.entry(scope).or_insert_with(|| {
        let seed = env::var(scope)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {seed} for {scope}");
        seed
    });
    Ok(seed)
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(scope: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(seed_for(scope)?))
}

/// Random `(temperature, humidity, pressure)` readings within plausible bounds.
pub fn random_readings(rng: &mut impl Rng, count: usize) -> Vec<(f32, f32, f32)> {
    (0..count)
        .map(|_| {
            (
                rng.gen_range(TEMPERATURE_RANGE),
                rng.gen_range(HUMIDITY_RANGE),
                rng.gen_range(PRESSURE_RANGE),
            )
        })
        .collect()
}
