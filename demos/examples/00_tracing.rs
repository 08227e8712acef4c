use bundlequote_demos::common::{desk, sample_demand};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,bundlequote=trace,bundlequote_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let desk = desk()?;
    let demand = sample_demand()?;

    let quotes = desk.quote(&demand);
    tracing::info!(count = quotes.len(), "quoted sample demand");

    Ok(())
}
