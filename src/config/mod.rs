mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Reads configuration from the process environment.
///
/// A missing `OPENAI_API_KEY` is not an error here: the credential check
/// happens per request so the server can start (and serve static files)
/// without one.
pub fn load() -> Result<Config> {
    let port = match env::var("PORT") {
        Ok(raw) => raw
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", raw)))?,
        Err(_) => types::default_port(),
    };

    let config = Config {
        llm: load_llm(),
        server: ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| types::default_host()),
            port,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| types::default_static_dir()),
            logs: LogsConfig::default(),
        },
    };

    debug!(
        "Configuration loaded: base_url={}, model={}, credential_present={}",
        config.llm.base_url,
        config.llm.model,
        config.llm.api_key.is_some()
    );

    Ok(config)
}

/// Reads only the completion-service settings. The serverless adapter uses
/// this directly: it has no listening socket, so server-side variables like
/// `PORT` must not affect it.
pub fn load_llm() -> LlmConfig {
    LlmConfig {
        base_url: env::var("OPENAI_BASE_URL").unwrap_or_else(|_| types::default_base_url()),
        api_key: env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty()),
        model: env::var("OPENAI_MODEL").unwrap_or_else(|_| types::default_model()),
    }
}
