//! Tracing subscriber lifecycle management.

use tracing::info;

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Runtime observability state.
#[derive(Debug)]
pub(crate) struct Observability {
    _private: (),
}

impl Observability {
    /// Initialize structured logging and request-level settings.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);
        logging::init_subscriber(config)?;

        Ok(Self { _private: () })
    }

    /// Called once the server has stopped accepting requests.
    pub(crate) fn shutdown(self) {
        info!("observability shut down");
    }
}
