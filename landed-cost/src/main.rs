//! Landed cost batch entry point.
//!
//! Usage: `landed-cost <request.json>`. Writes the JSON report to stdout.

use std::path::Path;

use anyhow::anyhow;
use cost_core::error::AppError;
use cost_core::observability::init_tracing;
use landed_cost::config::LandedCostConfig;
use landed_cost::models::{CostAllocationReport, CostAllocationRequest};
use landed_cost::services::{build_report, init_metrics};

fn load_request(path: &Path) -> Result<CostAllocationRequest, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn run(config: &LandedCostConfig, path: &Path) -> Result<CostAllocationReport, AppError> {
    let request = load_request(path)?;
    tracing::info!(
        path = %path.display(),
        items = request.items.len(),
        "Allocation request loaded"
    );
    Ok(build_report(
        &request,
        config.default_policy(),
        config.output_scale(),
    ))
}

fn main() -> std::io::Result<()> {
    // Load configuration
    let config = LandedCostConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(&config.service_name, config.log_level());

    tracing::info!(
        version = %config.service_version,
        default_policy = %config.default_policy(),
        output_scale = config.output_scale(),
        "Starting landed-cost"
    );

    init_metrics();

    let path = std::env::args_os()
        .nth(1)
        .ok_or_else(|| AppError::BadRequest(anyhow!("usage: landed-cost <request.json>")))
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let report = run(&config, Path::new(&path)).map_err(|e| {
        tracing::error!(error = %e, kind = e.kind(), "Cost allocation failed");
        std::io::Error::other(e.to_string())
    })?;

    let body = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
    println!("{}", body);

    tracing::debug!(metrics = %landed_cost::services::get_metrics(), "Run metrics");
    Ok(())
}
