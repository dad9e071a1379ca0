//! Receptro agent: runs a transcript or captured document text through the
//! rule engine and writes the JSON report.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use rx_agent::cli::{self, Mode};
use rx_agent::config::{AgentConfig, active_rules};
use rx_agent::pipeline::{self, Pipeline};
use rx_agent::FileTextSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let args = cli::parse_args(std::env::args().skip(1))?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), mode = ?args.mode, "rx-agent starting");

    // ── Load config ─────────────────────────────────────────────
    let config = match &args.config_path {
        Some(path) => AgentConfig::from_file(path)?,
        None => AgentConfig::default(),
    };

    // ── Rule table (fatal if malformed) ─────────────────────────
    let custom = config.load_rules()?;
    let table = active_rules(custom.as_ref());
    tracing::info!(
        intents = table.intents().len(),
        fields = table.fields().len(),
        custom = custom.is_some(),
        "rule table ready"
    );

    let source = FileTextSource;
    let pipeline = Pipeline::new(table, &source);

    match args.mode {
        Mode::Interpret => {
            let report = pipeline.interpret(&args.input).await?;
            let out = args
                .output
                .map(PathBuf::from)
                .unwrap_or_else(|| config.intent_report_path());
            pipeline::write_report(&out, &report, config.pretty).await?;

            println!(
                "{} (confidence: {})",
                report.classification.intent, report.classification.confidence
            );
            println!("{}", report.response_text);
        }
        Mode::Extract => {
            let report = pipeline.extract(&args.input).await?;
            let out = args
                .output
                .map(PathBuf::from)
                .unwrap_or_else(|| config.fields_report_path());
            pipeline::write_report(&out, &report, config.pretty).await?;

            println!("{} fields", report.extraction.field_count);
            for (name, value) in &report.extraction.fields {
                println!("  {name}: {value}");
            }
        }
    }

    tracing::info!("rx-agent finished");
    Ok(())
}
