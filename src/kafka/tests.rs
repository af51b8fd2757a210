#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::config::KafkaConfig;
    use crate::sensor::{SensorGenerator, SensorReading, SensorStatus};
    use serde_json::Value;
    use std::time::Duration;

    fn create_test_kafka_config() -> KafkaConfig {
        KafkaConfig {
            brokers: vec!["localhost:9092".to_string()],
            topic: "test-sensor-data".to_string(),
            compression: "none".to_string(),
            acks: "1".to_string(),
            linger_ms: 0,
            message_timeout_ms: 5_000,
            connect_timeout_secs: 1,
        }
    }

    fn create_test_reading() -> SensorReading {
        SensorReading {
            sensor_id: "S-003".to_string(),
            location: "Cold-Storage".to_string(),
            temperature: 21.5,
            humidity: 64.25,
            status: SensorStatus::Warning,
            timestamp: 1_700_000_000_123,
        }
    }

    #[test]
    fn test_payload_has_exactly_six_keys() {
        let payload = JsonSerializer::serialize(&create_test_reading()).unwrap();
        let json: Value = serde_json::from_slice(&payload).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["humidity", "location", "sensor_id", "status", "temperature", "timestamp"]
        );

        assert_eq!(json["sensor_id"], "S-003");
        assert_eq!(json["location"], "Cold-Storage");
        assert_eq!(json["temperature"], 21.5);
        assert_eq!(json["humidity"], 64.25);
        assert_eq!(json["status"], "WARNING");
        assert!(json["timestamp"].is_i64());
    }

    #[test]
    fn test_decoding_payload_restores_reading() {
        let mut generator = SensorGenerator::seeded(11);

        for _ in 0..50 {
            let reading = generator.generate();
            let payload = JsonSerializer::serialize(&reading).unwrap();
            assert!(std::str::from_utf8(&payload).is_ok());
            assert_eq!(JsonSerializer::deserialize(&payload).unwrap(), reading);
        }
    }

    #[test]
    fn test_malformed_payload_is_serialization_error() {
        let err = JsonSerializer::deserialize(br#"{"sensor_id":"S-001"}"#).unwrap_err();
        assert!(matches!(err, crate::Error::Serialization(_)));
    }

    #[test]
    fn test_client_config_carries_settings() {
        let config = create_test_kafka_config();
        let client = producer::client_config(&config);
        assert_eq!(client.get("bootstrap.servers"), Some("localhost:9092"));
        assert_eq!(client.get("acks"), Some("1"));
        assert_eq!(client.get("linger.ms"), Some("0"));
        assert_eq!(client.get("message.timeout.ms"), Some("5000"));
    }

    #[test]
    fn test_invalid_client_property_is_construction_error() {
        let mut config = create_test_kafka_config();
        config.compression = "not-a-codec".to_string();

        match KafkaProducer::new(&config) {
            Err(crate::Error::ClientConstruction(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("client construction should fail"),
        }
    }

    #[test]
    fn test_new_does_not_contact_broker() {
        let mut config = create_test_kafka_config();
        config.brokers = vec!["127.0.0.1:1".to_string()];

        let producer = KafkaProducer::new(&config).unwrap();
        assert_eq!(producer.brokers(), "127.0.0.1:1");
        producer.close(Duration::from_millis(100)).unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires running Kafka
    async fn test_publish_to_local_broker() {
        let config = create_test_kafka_config();
        let producer = KafkaProducer::connect(&config).unwrap();

        let payload = JsonSerializer::serialize(&create_test_reading()).unwrap();
        producer.publish(&config.topic, &payload).unwrap();
        producer.close(Duration::from_secs(5)).unwrap();
    }
}
