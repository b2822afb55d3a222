use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Site the relative file links on a catalog page are resolved against.
pub const DEFAULT_BASE_URL: &str = "https://link.springer.com";

/// How the scheduler advances its "done" counter after each window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressCounting {
    /// Count the entries actually flushed; progress never exceeds the catalog length.
    #[default]
    Exact,
    /// Count the full window size on every flush, even a short trailing window.
    /// Matches the progress lines of the legacy script, which can overshoot 100%.
    Window,
}

/// CSS selectors used to pull the book record out of a catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Element whose text is the book title.
    pub title: String,
    /// Anchors whose `href` is a downloadable file reference.
    pub file_links: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: ".page-title h1".to_string(),
            file_links: r#".cta-button-container.cta-button-container--stacked.u-pt-36 a[class*="test-book"]"#
                .to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/bookgrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrabConfig {
    /// Base URL that relative file references are joined onto.
    pub base_url: String,
    /// Directory the downloaded files are written into (relative to the working dir).
    pub output_dir: PathBuf,
    /// Number of catalog entries processed concurrently per window.
    pub window_size: usize,
    /// Pause after every window, in milliseconds.
    pub pause_ms: u64,
    #[serde(default)]
    pub progress_counting: ProgressCounting,
    /// Optional User-Agent header for every request.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Optional per-request timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub selectors: SelectorConfig,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("dist"),
            window_size: 3,
            pause_ms: 2000,
            progress_counting: ProgressCounting::Exact,
            user_agent: None,
            request_timeout_secs: None,
            selectors: SelectorConfig::default(),
        }
    }
}

impl GrabConfig {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Checks values that would make a run meaningless before any network work starts.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            anyhow::bail!("window_size must be at least 1");
        }
        url::Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url: {}", self.base_url))?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bookgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GrabConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<GrabConfig> {
    if !path.exists() {
        let default_cfg = GrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: GrabConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
