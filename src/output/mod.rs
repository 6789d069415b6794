pub mod config;
pub mod presenter;
pub mod types;

use anyhow::Result;

use crate::telemetry;
use config::OutputConfig;
use presenter::Emitter;
use types::Envelope;

/// Print an envelope on stdout using the configured presenter.
pub fn emit(env: &Envelope) -> Result<()> {
    let cfg = OutputConfig::from_env().with_json_mode(telemetry::config::json_mode());
    Emitter::new(cfg).emit(env)?;
    Ok(())
}
