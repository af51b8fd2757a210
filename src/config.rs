use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BROKER: &str = "localhost:9092";
pub const DEFAULT_TOPIC: &str = "sensor-data";

const ENV_PREFIX: &str = "SENSOR_PRODUCER";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub kafka: KafkaConfig,
    #[serde(default)]
    pub producer: ProducerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KafkaConfig {
    #[serde(default = "default_brokers")]
    pub brokers: Vec<String>,
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_acks")]
    pub acks: String,
    #[serde(default = "default_linger_ms")]
    pub linger_ms: u32,
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProducerConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_flush_timeout")]
    pub flush_timeout_secs: u64,
    /// Fixed RNG seed. Entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    /// Loads settings from an optional TOML file, then `SENSOR_PRODUCER_*`
    /// environment variables. A missing file falls back to the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ::config::ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("kafka.brokers")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

impl KafkaConfig {
    pub fn bootstrap_servers(&self) -> String {
        self.brokers.join(",")
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl ProducerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn flush_timeout(&self) -> Duration {
        Duration::from_secs(self.flush_timeout_secs)
    }
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: default_brokers(),
            topic: default_topic(),
            compression: default_compression(),
            acks: default_acks(),
            linger_ms: default_linger_ms(),
            message_timeout_ms: default_message_timeout_ms(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            flush_timeout_secs: default_flush_timeout(),
            seed: None,
        }
    }
}

fn default_brokers() -> Vec<String> {
    vec![DEFAULT_BROKER.to_string()]
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

fn default_compression() -> String {
    "none".to_string()
}

fn default_acks() -> String {
    "1".to_string()
}

fn default_linger_ms() -> u32 {
    0
}

fn default_message_timeout_ms() -> u32 {
    30_000
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_interval_ms() -> u64 {
    500
}

fn default_flush_timeout() -> u64 {
    10
}
