use anyhow::{Context, Result};

pub const DEFAULT_ROLE: &str = "software engineer";

/// Application configuration loaded from environment variables.
/// Every setting has a default, so an empty environment starts the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub default_role: String,
    /// Follow-ups allowed per question before the interview advances anyway.
    /// `None` means no limit.
    pub max_follow_ups_per_question: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            default_role: var("DEFAULT_ROLE").unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            max_follow_ups_per_question: var("MAX_FOLLOW_UPS_PER_QUESTION")
                .map(|v| {
                    v.parse::<u32>().with_context(|| {
                        format!("MAX_FOLLOW_UPS_PER_QUESTION must be a non-negative integer, got '{v}'")
                    })
                })
                .transpose()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            default_role: DEFAULT_ROLE.to_string(),
            max_follow_ups_per_question: None,
        }
    }
}
