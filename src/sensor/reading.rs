use super::status::SensorStatus;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const SENSOR_IDS: [&str; 5] = ["S-001", "S-002", "S-003", "S-004", "S-005"];
pub const LOCATIONS: [&str; 4] = ["Warehouse-A", "Warehouse-B", "Factory-Main", "Cold-Storage"];

pub const TEMPERATURE_RANGE: (f64, f64) = (15.0, 45.0);
pub const HUMIDITY_RANGE: (f64, f64) = (30.0, 90.0);

/// A single synthetic sensor sample, as published on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub sensor_id: String,
    pub location: String,
    pub temperature: f64,
    pub humidity: f64,
    pub status: SensorStatus,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// Draws [`SensorReading`]s from an owned random source.
pub struct SensorGenerator<R = StdRng> {
    rng: R,
}

impl SensorGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeds from `seed` when given, from OS entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> SensorGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self) -> SensorReading {
        SensorReading {
            sensor_id: pick(&mut self.rng, &SENSOR_IDS),
            location: pick(&mut self.rng, &LOCATIONS),
            temperature: round2(self.rng.gen_range(TEMPERATURE_RANGE.0..=TEMPERATURE_RANGE.1)),
            humidity: round2(self.rng.gen_range(HUMIDITY_RANGE.0..=HUMIDITY_RANGE.1)),
            status: SensorStatus::from_draw(self.rng.gen::<f64>()),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

fn pick<R: Rng>(rng: &mut R, pool: &[&str]) -> String {
    // pools are non-empty constants
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
