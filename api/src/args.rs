use calorie_tracker_core::domain::common::{
    CalorieTrackerConfig, DEFAULT_DECLARED_MEDIA_TYPE, DEFAULT_GEMINI_BASE_URL,
    DEFAULT_GEMINI_MODEL, ImageConfig, LLMConfig, SessionConfig,
};
use clap::Parser;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "calorie-tracker", version, about = "Calorie Tracker: AI-Powered Food Insights")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub image: ImageArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/calories`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3333"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "metrics-enabled", env = "METRICS_ENABLED", default_value_t = true, action = clap::ArgAction::Set)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "google-api-key", env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: Url,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ImageArgs {
    #[arg(long = "max-image-bytes", env = "MAX_IMAGE_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_image_bytes: usize,

    /// Media type declared to the model for every image.
    #[arg(long = "declared-media-type", env = "DECLARED_MEDIA_TYPE", default_value = DEFAULT_DECLARED_MEDIA_TYPE)]
    pub declared_media_type: String,
}

/// One year.
pub const MAX_SESSION_TTL_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, clap::Args)]
pub struct SessionArgs {
    #[arg(
        long = "session-ttl-secs",
        env = "SESSION_TTL_SECS",
        default_value_t = 3600,
        value_parser = clap::value_parser!(i64).range(1..=MAX_SESSION_TTL_SECS)
    )]
    pub ttl_secs: i64,

    #[arg(long = "secure-cookies", env = "SECURE_COOKIES", default_value_t = false, action = clap::ArgAction::Set)]
    pub secure_cookies: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = clap::ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for CalorieTrackerConfig {
    fn from(args: Args) -> Self {
        CalorieTrackerConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.google_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url.to_string(),
            },
            image: ImageConfig {
                declared_media_type: args.image.declared_media_type,
            },
            session: SessionConfig {
                idle_ttl_secs: args.session.ttl_secs,
            },
        }
    }
}
