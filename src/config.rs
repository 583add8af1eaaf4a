use clap::Parser;
use secrecy::SecretString;
use std::time::Duration;

/// Prompt Trainer: scores prompt responses locally or through an OpenAI-compatible API.
#[derive(Parser, Clone)]
#[command(name = "prompt-trainer")]
pub struct CliArgs {
    /// HTTP listen port
    #[arg(long = "port", env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// HTTP listen address
    #[arg(long = "bind", env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// API key for the completion service; mock mode is used when absent
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Model id sent to the completion service
    #[arg(long = "model", env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long = "api-base-url", env = "OPENAI_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Per-call timeout for the completion service (at least 1)
    #[arg(
        long = "upstream-timeout-secs",
        env = "UPSTREAM_TIMEOUT_SECS",
        default_value_t = DEFAULT_UPSTREAM_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub upstream_timeout_secs: u64,

    /// Simulated latency before answering a mock evaluation (0 disables)
    #[arg(long = "mock-delay-ms", env = "MOCK_DELAY_MS", default_value_t = DEFAULT_MOCK_DELAY_MS)]
    pub mock_delay_ms: u64,
}

// Hand-written so the API key never reaches log output.
impl std::fmt::Debug for CliArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliArgs")
            .field("port", &self.port)
            .field("bind", &self.bind)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .field("mock_delay_ms", &self.mock_delay_ms)
            .finish()
    }
}

pub struct TrainerConfig {
    pub bind: String,
    pub port: u16,
    pub api_key: Option<SecretString>,
    pub model: String,
    pub api_base_url: String,
    pub upstream_timeout: Duration,
    pub mock_delay: Duration,
}

// Server constants
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

// Upstream constants
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const COMPLETION_MAX_TOKENS: u32 = 500;
pub const COMPLETION_TEMPERATURE: f32 = 0.7;

// Mock constants
pub const DEFAULT_MOCK_DELAY_MS: u64 = 800;

// Response shaping
pub const PROMPT_PREVIEW_CHARS: usize = 50;
pub const ERROR_BODY_PREVIEW_CHARS: usize = 500;

impl TrainerConfig {
    pub fn from_args(args: CliArgs) -> Self {
        let api_key = args
            .openai_api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .map(SecretString::from);

        TrainerConfig {
            bind: args.bind,
            port: args.port,
            api_key,
            model: args.model,
            api_base_url: args.api_base_url,
            upstream_timeout: Duration::from_secs(args.upstream_timeout_secs),
            mock_delay: Duration::from_millis(args.mock_delay_ms),
        }
    }

    /// Whether a credential for the completion service is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            bind: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            mock_delay: Duration::from_millis(DEFAULT_MOCK_DELAY_MS),
        }
    }
}
