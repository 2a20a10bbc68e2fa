use std::thread;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use apm_timing::{SpanReporter, TimingConfig};
use span_timer::Timer;

fn load_config() -> anyhow::Result<TimingConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            TimingConfig::load_from_file(&path)
        }
        None => Ok(TimingConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting apm-timing v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    let reporter = SpanReporter::new(config);

    let mut local = Timer::new();
    local.start()?;
    thread::sleep(Duration::from_millis(25));
    info!("Local span running for {:.3}ms", local.elapsed_in_milliseconds()?);
    local.stop()?;
    println!("{}", reporter.to_json("demo.sleep", &local)?);

    // Replay of a span received from a remote agent
    let mut remote = Timer::new();
    remote.started_at(local.started_on().unwrap_or_default() - 2.0)?;
    remote.stopped_at(0.75)?;
    println!("{}", reporter.to_json("demo.remote", &remote)?);

    info!("apm-timing demo complete");
    Ok(())
}
