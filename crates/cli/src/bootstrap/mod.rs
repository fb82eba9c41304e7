use dnsx_domain::{ClientConfig, DnsError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Load the optional configuration file. A missing file yields defaults;
/// a present but malformed one is an error.
pub fn load_config(path: Option<&str>) -> Result<ClientConfig, DnsError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_string(), true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => return Ok(ClientConfig::default()),
        },
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let config = toml::from_str(&content)
                .map_err(|e| DnsError::ConfigError(format!("{}: {}", path, e)))?;
            debug!(path = path.as_str(), "Configuration loaded");
            Ok(config)
        }
        Err(e) if !explicit => {
            debug!(path = path.as_str(), error = %e, "No configuration file, using defaults");
            Ok(ClientConfig::default())
        }
        Err(e) => Err(DnsError::ConfigError(format!("{}: {}", path, e))),
    }
}

fn default_config_path() -> Option<String> {
    let home = std::env::var("HOME").ok()?;
    Some(format!("{}/.config/dnsx/dnsx.toml", home))
}

/// Install the tracing subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
