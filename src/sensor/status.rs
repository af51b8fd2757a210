use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational state reported with every reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensorStatus {
    Ok,
    Warning,
    Critical,
    Maintenance,
}

/// Cumulative upper bounds, in lookup order. Weights are the gaps between
/// consecutive bounds: OK 0.80, WARNING 0.10, CRITICAL 0.05, MAINTENANCE 0.05.
pub const STATUS_BOUNDS: [(SensorStatus, f64); 4] = [
    (SensorStatus::Ok, 0.80),
    (SensorStatus::Warning, 0.90),
    (SensorStatus::Critical, 0.95),
    (SensorStatus::Maintenance, 1.0),
];

impl SensorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Ok => "OK",
            SensorStatus::Warning => "WARNING",
            SensorStatus::Critical => "CRITICAL",
            SensorStatus::Maintenance => "MAINTENANCE",
        }
    }

    /// Maps a uniform draw in `[0, 1)` onto the cumulative table.
    ///
    /// Draws at or beyond 1.0 land on the last entry.
    pub fn from_draw(draw: f64) -> Self {
        STATUS_BOUNDS
            .iter()
            .find(|(_, upper)| draw < *upper)
            .map_or(STATUS_BOUNDS[STATUS_BOUNDS.len() - 1].0, |(status, _)| *status)
    }
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
