//! Startup Configuration
//!
//! Read once from the optional `window.__KANBAN_CONFIG__` object.

use kanban_core::{seed_board, Board};
use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global the host page may define before the app boots
const CONFIG_GLOBAL: &str = "__KANBAN_CONFIG__";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub log_level: LogLevel,
    /// Heading above the board
    pub title: String,
    /// Starting board; the built-in seed when absent
    pub board: Option<Board>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            title: "Kanban Board".to_string(),
            board: None,
        }
    }
}

impl AppConfig {
    /// Load from the page global. Absent config is the default; a config
    /// that fails to decode is an error.
    pub fn load() -> Result<Self, String> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| format!("{:?}", e))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(raw).map_err(|e| e.to_string())
    }

    /// The configured board if it is consistent, otherwise the seed board
    pub fn initial_board(&self) -> Board {
        match &self.board {
            Some(board) => match board.validate() {
                Ok(()) => board.clone(),
                Err(e) => {
                    log::error!("[CONFIG] configured board rejected: {}", e);
                    seed_board()
                }
            },
            None => seed_board(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(LevelFilter::from(config.log_level), LevelFilter::Info);
        assert_eq!(config.initial_board(), seed_board());
    }

    #[test]
    fn test_configured_board() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "logLevel": "debug",
                "title": "Sprint 12",
                "board": [
                    {"id": "a", "name": "Backlog", "items": [{"id": "a-1", "content": "Draft"}]},
                    {"id": "b", "name": "Done"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.title, "Sprint 12");
        let board = config.initial_board();
        assert_eq!(board.lists().len(), 2);
        assert_eq!(board.item_count(), 1);
    }

    #[test]
    fn test_duplicate_ids_fall_back_to_seed() {
        let config: AppConfig = serde_json::from_str(
            r#"{"board": [{"id": "a", "name": "One"}, {"id": "a", "name": "Two"}]}"#,
        )
        .unwrap();
        assert_eq!(config.initial_board(), seed_board());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        assert!(serde_json::from_str::<AppConfig>(r#"{"logLevel": "loud"}"#).is_err());
    }
}
