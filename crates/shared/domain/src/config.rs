use crate::constants::{DEFAULT_BRAND, DEFAULT_TITLE};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level shell configuration shared by the desktop and web apps.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfigInner {
    pub brand: BrandConfig,
    pub window: WindowConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into component contexts.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct ShellConfig {
    #[serde(flatten, default)]
    inner: Arc<ShellConfigInner>,
}

impl Deref for ShellConfig {
    type Target = ShellConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ShellConfig {
    fn deref_mut(&mut self) -> &mut ShellConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Header branding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub label: String,
}

/// Desktop window geometry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging knobs, mirrored by `vcb_logger::Logger::from_config`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub env_filter: Option<String>,
    /// Directory for rolling log files. Console only when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for BrandConfig {
    fn default() -> Self {
        Self { label: DEFAULT_BRAND.to_owned() }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: DEFAULT_TITLE.to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), env_filter: None, path: None, json: false, max_files: 10 }
    }
}
