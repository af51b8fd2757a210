use crate::{sensor::SensorReading, Result};

pub struct JsonSerializer;

impl JsonSerializer {
    /// UTF-8 JSON bytes with the reading's six keys.
    pub fn serialize(reading: &SensorReading) -> Result<Vec<u8>> {
        serde_json::to_vec(reading).map_err(Into::into)
    }

    pub fn deserialize(payload: &[u8]) -> Result<SensorReading> {
        serde_json::from_slice(payload).map_err(Into::into)
    }
}
