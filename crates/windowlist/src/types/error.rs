/*! Error types for window list operations. */

use super::{AppId, ButtonId, SettingKey, WindowId};

/// Errors that can occur during window list operations.
#[derive(Debug, thiserror::Error)]
pub enum WindowListError {
  #[error("Button not found: {0}")]
  ButtonNotFound(ButtonId),

  #[error("Window not found: {0}")]
  WindowNotFound(WindowId),

  #[error("Application not found: {0}")]
  AppNotFound(AppId),

  #[error("Window {0} no longer exists")]
  StaleHandle(WindowId),

  #[error("Invalid value for setting '{key}': {reason}")]
  InvalidSetting { key: SettingKey, reason: String },

  #[error("Command '{command}' failed: {reason}")]
  CommandFailed {
    command: &'static str,
    reason: String,
  },

  #[error("Settings store error: {0}")]
  Settings(String),
}

/// Result type for window list operations.
pub type WindowListResult<T> = Result<T, WindowListError>;
