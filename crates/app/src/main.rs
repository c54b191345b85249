use anyhow::Context;

use acme_app::config::{AppConfig, LOG_FORMAT_VAR};
use acme_app::{demo, summary};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    acme_observability::init(config.log_format);

    if let Some(err) = &config.rejected_log_format {
        tracing::warn!(%err, "{LOG_FORMAT_VAR} not understood; using default log format");
    }

    let supplier = demo::sample_supplier();
    let order = demo::sample_order(&supplier).context("failed to assemble purchase order")?;

    for line in summary::render(&order, &supplier) {
        println!("{line}");
    }
    Ok(())
}
