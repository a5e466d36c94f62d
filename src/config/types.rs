#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    /// Absence is detected per request, not at startup.
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub logs: LogsConfig,
}

#[derive(Debug, Clone)]
pub struct LogsConfig {
    pub level: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub(crate) fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub(crate) fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    3000
}

pub(crate) fn default_static_dir() -> String {
    "public".to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}
