pub mod reading;
pub mod status;

pub use reading::{SensorGenerator, SensorReading, LOCATIONS, SENSOR_IDS};
pub use status::{SensorStatus, STATUS_BOUNDS};
