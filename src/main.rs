use anyhow::{Context, Result};
use qtyuom::{ExtractorConfig, LeftMostUomExtractor, QtyUom};
use serde::Serialize;
use std::env;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// One output line per description
#[derive(Serialize)]
struct Report<'a> {
    description: &'a str,
    quantity: Option<String>,
    uom: Option<String>,
    value: Option<f64>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let json = env::var("QTYUOM_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn report<'a>(extractor: &LeftMostUomExtractor, description: &'a str) -> Result<Report<'a>> {
    let Some(found) = extractor.find_match(description) else {
        return Ok(Report {
            description,
            quantity: None,
            uom: None,
            value: None,
        });
    };

    let (textual, numeric) = match found {
        Some(found) => (
            found.to_textual(),
            found
                .to_numeric()
                .with_context(|| format!("Failed to parse quantity in '{description}'"))?,
        ),
        None => (QtyUom::empty(), QtyUom::empty()),
    };

    Ok(Report {
        description,
        quantity: Some(textual.quantity),
        uom: Some(textual.uom),
        value: Some(numeric.quantity),
    })
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging();

    let config = ExtractorConfig::from_env().context("Invalid extractor configuration")?;
    let extractor = LeftMostUomExtractor::with_config(config)?;

    let args: Vec<String> = env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.is_empty() {
        info!("Reading descriptions from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read description from stdin")?;
            writeln!(out, "{}", serde_json::to_string(&report(&extractor, &line)?)?)?;
        }
    } else {
        for description in &args {
            writeln!(out, "{}", serde_json::to_string(&report(&extractor, description)?)?)?;
        }
    }

    Ok(())
}
