use std::path::Path;

use tracing::{debug, info};

use super::{CheckerConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_missing_default(path: &Path) {
    debug!(
        target: "poster_fill::config",
        path = %path.display(),
        env = CONFIG_ENV_KEY,
        default = DEFAULT_CONFIG_PATH,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &CheckerConfig) {
    info!(
        target: "poster_fill::config",
        path = %config
            .source_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<defaults>".to_string()),
        program = %config.rasterizer.program.display(),
        min_fill_pct = config.check.min_fill_pct,
        "Configuration loaded"
    );
}
