pub mod producer;
pub mod serializer;

#[cfg(test)]
mod tests;

pub use producer::{KafkaProducer, Publisher};
pub use serializer::JsonSerializer;
