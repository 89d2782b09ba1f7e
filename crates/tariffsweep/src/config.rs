//! Loading sweep configuration from YAML.
//!
//! Every axis is optional; omitted axes keep the published defaults.
//!
//! ```yaml
//! t:
//!   type: linspace
//!   start: 1.0
//!   end: 2.0
//!   count: 11
//! r:
//!   type: values
//!   values: [0.0, 0.1, 0.2]
//! ```

use std::path::Path;

use color_eyre::eyre::WrapErr;
use tariffsweep_core::ModelConfig;

/// Parse a model config from a YAML string
pub fn parse_config(yaml: &str) -> Result<ModelConfig, serde_saphyr::Error> {
    serde_saphyr::from_str(yaml)
}

/// Load the model config from `path`, or the defaults when no path is given.
///
/// Axis values are validated here so a bad file is reported before the
/// terminal is taken over.
pub fn load_config(path: Option<&Path>) -> color_eyre::Result<ModelConfig> {
    let Some(path) = path else {
        tracing::debug!("using default model configuration");
        return Ok(ModelConfig::default());
    };

    let yaml = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
    let config = parse_config(&yaml)
        .wrap_err_with(|| format!("failed to parse config file {}", path.display()))?;
    let shape = config
        .grid_shape()
        .wrap_err_with(|| format!("invalid axis in config file {}", path.display()))?;

    tracing::info!(path = %path.display(), ?shape, "loaded model configuration");
    Ok(config)
}
