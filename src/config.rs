use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::catalog::Catalog;
use crate::filter::{FEATURED_LIMIT, RECENT_LIMIT};
use crate::i18n::Language;

pub const CHAT_URL: &str = "https://wa.me/8562052361770";
pub const APPLY_URL: &str = "https://script.google.com/macros/s/AKfycbxx3W-ZWRz3mcWAAqg07-O9oiJkpDvV6RTVl0ZRTjEnKsw_Jup6WuSWq_1lANoCduuNKg/exec";

/// Runtime settings, from CLI flags with environment fallbacks.
#[derive(Debug, Clone)]
pub struct Config {
    pub language: Language,
    /// Alternative fixture; `None` uses the one compiled into the binary.
    pub data_path: Option<PathBuf>,
    pub log_dir: PathBuf,
    pub featured_limit: usize,
    pub recent_limit: usize,
}

impl Config {
    pub fn new(language: Language, data_path: Option<PathBuf>) -> Self {
        Self {
            language,
            data_path,
            log_dir: Self::default_log_dir(),
            featured_limit: FEATURED_LIMIT,
            recent_limit: RECENT_LIMIT,
        }
    }

    fn default_log_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("JOBBOARD_LOG_DIR") {
            return PathBuf::from(dir);
        }
        // XDG data directory or fallback
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "jobboard") {
            proj_dirs.data_dir().join("logs")
        } else {
            PathBuf::from("logs")
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.data_path {
            Some(path) => Catalog::open(path),
            None => Catalog::embedded(),
        }
    }

    /// File logging only: stdout and stderr belong to the terminal UI.
    pub fn init_logging(&self) -> Result<()> {
        std::fs::create_dir_all(&self.log_dir)
            .with_context(|| format!("Failed to create log directory: {}", self.log_dir.display()))?;

        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into());
        let file = tracing_appender::rolling::daily(&self.log_dir, "jobboard.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(file)
            .with_ansi(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .try_init()
            .context("Failed to initialize logging")?;
        Ok(())
    }
}
