//! Единый тип ошибок публичного API.
//!
//! Разбор фразы, сравнение имён и группировка ошибок не возвращают:
//! `Result` появляется только на вводе-выводе, форматах и конфигурации.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PedidoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, PedidoError>;
