use clap::Parser;
use sensor_producer::event_loop::startup_line;
use sensor_producer::kafka::KafkaProducer;
use sensor_producer::sensor::SensorGenerator;
use sensor_producer::{Config, Error, EventProducer, Result};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "sensor-producer")]
#[command(about = "Publishes synthetic IoT sensor readings to Kafka", long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    #[arg(short, long, value_delimiter = ',', help = "Bootstrap brokers, comma separated")]
    brokers: Option<Vec<String>>,

    #[arg(short, long, help = "Destination topic")]
    topic: Option<String>,

    #[arg(long, help = "Delay between readings in milliseconds")]
    interval_ms: Option<u64>,

    #[arg(long, help = "Fixed RNG seed for reproducible readings")]
    seed: Option<u64>,

    #[arg(short, long, help = "Enable JSON output for logs")]
    json_logs: bool,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.json_logs, args.verbose);

    let config = match Config::from_file(&args.config) {
        Ok(cfg) => apply_overrides(cfg, &args),
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(Error::Config(e));
        }
    };

    let brokers = config.kafka.bootstrap_servers();
    info!(
        brokers = %brokers,
        topic = %config.kafka.topic,
        interval_ms = config.producer.interval_ms,
        "{}",
        startup_line(&brokers, &config.kafka.topic)
    );

    let generator = SensorGenerator::from_seed_option(config.producer.seed);
    let mut producer = EventProducer::new(&config, generator);

    let kafka = config.kafka.clone();
    let connected = tokio::task::spawn_blocking(move || KafkaProducer::connect(&kafka)).await;

    match producer.connect(move || connected?) {
        Ok(()) => {}
        Err(Error::Connection { brokers, source }) => {
            error!(
                brokers = %brokers,
                "No se pudo conectar a Kafka en {}. Asegúrate de que el broker esté corriendo y el puerto sea accesible.",
                brokers
            );
            error!("Error: {}", source);
            return Ok(());
        }
        Err(e) => {
            error!(
                "Could not construct the Kafka client: {}. Check the [kafka] settings in {:?}.",
                e, args.config
            );
            return Err(e);
        }
    }

    let sent = producer.run(interrupted()).await?;
    info!(sent, "Producer stopped");

    Ok(())
}

async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Unable to listen for interrupt signal: {}", e);
        std::future::pending::<()>().await;
    }
}

fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(brokers) = &args.brokers {
        config.kafka.brokers = brokers.clone();
    }
    if let Some(topic) = &args.topic {
        config.kafka.topic = topic.clone();
    }
    if let Some(interval_ms) = args.interval_ms {
        config.producer.interval_ms = interval_ms;
    }
    if args.seed.is_some() {
        config.producer.seed = args.seed;
    }
    config
}

fn init_logging(json: bool, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("sensor_producer=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sensor_producer=info,warn"))
    };

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
