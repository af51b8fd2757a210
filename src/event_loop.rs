//! The generate → publish → sleep loop.
//!
//! [`EventProducer`] owns the generator and, once connected, the publisher.
//! It moves through a small lifecycle:
//!
//! ```text
//! NotConnected ──connect──▶ Running ──interrupt──▶ Stopped
//!       │                      │
//!       └──connect error──▶ Failed ◀──publish error
//! ```
//!
//! Only the delay between iterations observes the shutdown signal, so a
//! reading that has been generated is always handed to the publisher.

use crate::config::Config;
use crate::kafka::{JsonSerializer, Publisher};
use crate::sensor::{SensorGenerator, SensorReading};
use crate::{Error, Result};
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub const SHUTDOWN_LINE: &str = "Deteniendo productor...";

pub fn startup_line(brokers: &str, topic: &str) -> String {
    format!("Iniciando productor Kafka hacia {brokers} en el topic '{topic}'...")
}

/// `[<count>] Enviado: <sensor_id> | Temp: <temperature>`. The temperature
/// always keeps a decimal point (`30.0`, not `30`).
pub fn progress_line(count: u64, reading: &SensorReading) -> String {
    format!(
        "[{}] Enviado: {} | Temp: {:?}",
        count, reading.sensor_id, reading.temperature
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerState {
    NotConnected,
    Running,
    Stopped,
    Failed,
}

pub struct EventProducer<P, R = rand::rngs::StdRng> {
    topic: String,
    interval: Duration,
    flush_timeout: Duration,
    generator: SensorGenerator<R>,
    publisher: Option<P>,
    state: ProducerState,
    sent: u64,
}

impl<P, R> EventProducer<P, R>
where
    P: Publisher + Send + 'static,
    R: Rng,
{
    pub fn new(config: &Config, generator: SensorGenerator<R>) -> Self {
        Self {
            topic: config.kafka.topic.clone(),
            interval: config.producer.interval(),
            flush_timeout: config.producer.flush_timeout(),
            generator,
            publisher: None,
            state: ProducerState::NotConnected,
            sent: 0,
        }
    }

    /// Runs `connector` once. A failure moves the producer to
    /// [`ProducerState::Failed`] and is returned unchanged.
    pub fn connect<F>(&mut self, connector: F) -> Result<()>
    where
        F: FnOnce() -> Result<P>,
    {
        match connector() {
            Ok(publisher) => {
                self.publisher = Some(publisher);
                self.state = ProducerState::Running;
                Ok(())
            }
            Err(e) => {
                self.state = ProducerState::Failed;
                Err(e)
            }
        }
    }

    /// Publishes one reading per interval until `shutdown` resolves.
    ///
    /// Returns the number of readings sent. Publish errors end the loop and
    /// are returned to the caller; once `shutdown` fires the result is always
    /// `Ok`, even if the final flush fails.
    pub async fn run<S>(&mut self, shutdown: S) -> Result<u64>
    where
        S: Future<Output = ()>,
    {
        if self.state != ProducerState::Running {
            return Err(Error::NotConnected);
        }
        let publisher = self.publisher.as_ref().ok_or(Error::NotConnected)?;

        tokio::pin!(shutdown);

        loop {
            let reading = self.generator.generate();
            let sent = JsonSerializer::serialize(&reading)
                .and_then(|payload| publisher.publish(&self.topic, &payload));
            if let Err(e) = sent {
                error!(error = %e, count = self.sent, "Publish failed, stopping producer");
                self.state = ProducerState::Failed;
                return Err(e);
            }

            self.sent += 1;
            info!(
                count = self.sent,
                sensor_id = %reading.sensor_id,
                status = %reading.status,
                "{}",
                progress_line(self.sent, &reading)
            );

            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!("{}", SHUTDOWN_LINE);
        self.shutdown().await;
        Ok(self.sent)
    }

    /// Flushes and releases the publisher on the blocking pool. The task runs
    /// to completion even if another interrupt arrives meanwhile.
    async fn shutdown(&mut self) {
        self.state = ProducerState::Stopped;
        let Some(publisher) = self.publisher.take() else {
            return;
        };

        let timeout = self.flush_timeout;
        match tokio::task::spawn_blocking(move || publisher.close(timeout)).await {
            Ok(Ok(())) => debug!(sent = self.sent, "Producer closed"),
            Ok(Err(e)) => warn!(error = %e, "Flush on shutdown failed, buffered readings may be lost"),
            Err(e) => warn!(error = %e, "Producer close task did not complete"),
        }
    }

    pub fn state(&self) -> ProducerState {
        self.state
    }

    pub fn sent(&self) -> u64 {
        self.sent
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}
