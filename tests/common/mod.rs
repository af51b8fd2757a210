#![allow(dead_code)]

use sensor_producer::config::{Config, KafkaConfig, ProducerConfig};
use std::env;

/// Get test configuration from environment variables
pub fn get_test_config() -> Config {
    // Use TEST_ prefix for test environment variables
    let kafka = KafkaConfig {
        brokers: env::var("TEST_KAFKA_BROKERS")
            .unwrap_or_else(|_| "localhost:9092".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect(),
        topic: format!("test_sensor_data_{}", std::process::id()),
        compression: "none".to_string(),
        acks: "1".to_string(),
        linger_ms: 0, // Immediate sending for tests
        message_timeout_ms: 5_000,
        connect_timeout_secs: 5,
    };

    let producer = ProducerConfig {
        interval_ms: 100,
        flush_timeout_secs: 5,
        seed: Some(1234),
    };

    Config { kafka, producer }
}

/// Config pointing at a port nothing listens on.
pub fn unreachable_config() -> Config {
    let mut config = get_test_config();
    config.kafka.brokers = vec!["127.0.0.1:1".to_string()];
    config.kafka.connect_timeout_secs = 2;
    config
}
