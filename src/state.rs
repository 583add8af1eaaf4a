use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::completion::{CompletionError, CompletionProvider, OpenAiClient};
use crate::config::TrainerConfig;
use crate::evaluation::Evaluator;

pub type SharedState = Arc<TrainerState>;

/// Everything a request handler may read. Immutable after startup.
pub struct TrainerState {
    pub config: TrainerConfig,
    pub evaluator: Evaluator,
    pub started_at: DateTime<Utc>,
}

impl TrainerState {
    pub fn new(config: TrainerConfig) -> Result<Self, CompletionError> {
        let completion = match OpenAiClient::from_config(&config)? {
            Some(client) => {
                info!(
                    "Completion service configured: {} ({})",
                    client.endpoint(),
                    config.model
                );
                Some(Arc::new(client) as Arc<dyn CompletionProvider>)
            }
            None => {
                info!("No API key configured, evaluations default to mock mode");
                None
            }
        };

        Ok(Self::with_evaluator(config, Evaluator::new(completion)))
    }

    pub fn with_evaluator(config: TrainerConfig, evaluator: Evaluator) -> Self {
        Self {
            config,
            evaluator,
            started_at: Utc::now(),
        }
    }
}
