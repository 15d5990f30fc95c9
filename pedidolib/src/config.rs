//! Настройки: пороги сравнения имён, глубина истории, пауза конца фразы.

use crate::{error::Result, similarity::SimilarityConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub similarity: SimilarityConfig,
    pub history: HistoryConfig,
    pub capture: CaptureConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryConfig {
    /// Сколько последних заказов подгружать из хранилища.
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { limit: 50 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CaptureConfig {
    /// Тишина, после которой источник речи объявляет конец фразы.
    pub silence_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { silence_ms: 2000 }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), ?cfg, "config loaded");
        Ok(cfg)
    }
}
