use crate::{config::KafkaConfig, Error, Result};
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::ClientConfig;
use std::time::Duration;
use tracing::{debug, info};

/// Sink for serialized readings.
///
/// `publish` hands the payload off without waiting for the broker.
/// `close` consumes the publisher, draining whatever the transport still
/// buffers; it may block, so async callers run it on the blocking pool.
pub trait Publisher {
    fn publish(&self, topic: &str, payload: &[u8]) -> Result<()>;

    fn close(self, timeout: Duration) -> Result<()>
    where
        Self: Sized;
}

pub struct KafkaProducer {
    producer: FutureProducer,
    brokers: String,
}

impl KafkaProducer {
    /// Builds the client without touching the network.
    pub fn new(config: &KafkaConfig) -> Result<Self> {
        let brokers = config.bootstrap_servers();
        let producer: FutureProducer = client_config(config)
            .create()
            .map_err(Error::ClientConstruction)?;

        Ok(Self { producer, brokers })
    }

    /// Builds the client and waits for the bootstrap brokers to answer a
    /// metadata request. Single attempt, no retry. Blocks for up to
    /// `connect_timeout_secs`.
    pub fn connect(config: &KafkaConfig) -> Result<Self> {
        let producer = Self::new(config)?;
        producer.probe(config.connect_timeout())?;
        Ok(producer)
    }

    fn probe(&self, timeout: Duration) -> Result<()> {
        let metadata = self
            .producer
            .client()
            .fetch_metadata(None, timeout)
            .map_err(|source| Error::Connection {
                brokers: self.brokers.clone(),
                source,
            })?;

        info!(
            brokers = %self.brokers,
            broker_count = metadata.brokers().len(),
            "Connected to Kafka"
        );
        Ok(())
    }

    pub fn brokers(&self) -> &str {
        &self.brokers
    }
}

impl Publisher for KafkaProducer {
    fn publish(&self, topic: &str, payload: &[u8]) -> Result<()> {
        let record: FutureRecord<'_, (), [u8]> = FutureRecord::to(topic).payload(payload);

        // The delivery future is dropped: at-most-once, no acknowledgment wait.
        self.producer
            .send_result(record)
            .map(drop)
            .map_err(|(e, _)| Error::Kafka(e))
    }

    fn close(self, timeout: Duration) -> Result<()> {
        debug!(in_flight = self.producer.in_flight_count(), "Flushing producer");
        self.producer.flush(timeout).map_err(Error::Kafka)
    }
}

pub(crate) fn client_config(config: &KafkaConfig) -> ClientConfig {
    let mut client = ClientConfig::new();
    client
        .set("bootstrap.servers", config.bootstrap_servers())
        .set("compression.type", &config.compression)
        .set("acks", &config.acks)
        .set("linger.ms", config.linger_ms.to_string())
        .set("message.timeout.ms", config.message_timeout_ms.to_string());
    client
}
