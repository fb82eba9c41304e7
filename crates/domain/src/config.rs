use serde::{Deserialize, Serialize};

/// Optional on-disk defaults, merged under explicit CLI flags.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub nameserver: Option<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout: u64,

    #[serde(default = "default_retries")]
    pub retries: u32,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub short: bool,

    #[serde(default)]
    pub json: bool,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub seconds: bool,

    #[serde(default)]
    pub time: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            nameserver: None,
            timeout: default_timeout_ms(),
            retries: default_retries(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            short: false,
            json: false,
            color: default_color(),
            seconds: false,
            time: false,
        }
    }
}

fn default_timeout_ms() -> u64 {
    crate::options::DEFAULT_TIMEOUT_MS
}

fn default_retries() -> u32 {
    crate::options::DEFAULT_RETRIES
}

fn default_color() -> String {
    "auto".to_string()
}
