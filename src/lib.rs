pub mod config;
pub mod customers;
pub mod error;
pub mod event_loop;

pub mod kafka;
pub mod sensor;

pub use crate::config::Config;
pub use error::{Error, Result};
pub use event_loop::{EventProducer, ProducerState};
