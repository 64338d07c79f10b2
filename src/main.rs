use std::path::PathBuf;

use anyhow::{Context, bail};
use log::{info, warn};
use stroke_ready::reader::read_text_file;
use stroke_ready::{PipelineConfig, process_data_with_config, tabulate, to_json};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let mut path: Option<PathBuf> = None;
    let mut as_table = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--table" => as_table = true,
            other if other.starts_with("--") => warn!("Ignoring unknown option {other}"),
            other => path = Some(PathBuf::from(other)),
        }
    }

    let Some(path) = path else {
        bail!("usage: stroke-ready <cases.csv> [--table]");
    };

    let config = PipelineConfig::from_env();
    info!("Summarizing {} with {:?}", path.display(), config);

    let text = read_text_file(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let summaries = process_data_with_config(&text, &config)
        .with_context(|| format!("Failed to summarize {}", path.display()))?;

    if as_table {
        print!("{}", tabulate(&summaries));
    } else {
        println!("{}", to_json(&summaries)?);
    }

    Ok(())
}
