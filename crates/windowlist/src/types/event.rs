/*! Event types published to the view layer. */

use super::{AppId, ButtonId, WindowId};
use serde::Serialize;

/// Everything a renderer needs to draw one button.
///
/// Rebuilt from live window state on every recomputation; a
/// `ButtonChanged` event is only published when this differs from the
/// previously published view.
#[allow(clippy::struct_excessive_bools)] // Flat view model, one flag per style
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonView {
  /// Button this view belongs to.
  pub id: ButtonId,
  /// Application of the button.
  pub app_id: AppId,
  /// Application name, `?` when unknown.
  pub app_name: String,
  /// Themed icon name of the application.
  pub icon_name: Option<String>,
  /// Caption text (window title or app name, bracketed when minimized).
  pub label: String,
  /// Whether the caption is drawn at all.
  pub caption_visible: bool,
  /// Natural caption width in pixels.
  pub label_width: u32,
  /// Window count badge. Empty when the count is hidden.
  pub number: String,
  /// Shown on the active workspace.
  pub visible: bool,
  /// Has a current window. False renders the "neutral" style.
  pub running: bool,
  /// One of its windows (or their transients) has focus.
  pub focused: bool,
  /// One of its windows wants attention.
  pub urgent: bool,
  /// The current window is minimized.
  pub minimized: bool,
  /// Kept as the application's pinned launcher.
  pub pinned: bool,
  /// Windows on the active workspace.
  pub window_count: usize,
  /// Most recently used window on the active workspace.
  pub current_window: Option<WindowId>,
  /// Tooltip text. Only set while the button has no window on the active workspace.
  pub tooltip: Option<String>,
}

/// One entry of the hover preview menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewItem {
  /// Window this entry activates or closes.
  pub window_id: WindowId,
  /// Window title, or the app name for untitled windows.
  pub title: String,
}

/// Events emitted when the window list changes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum Event {
  // Button lifecycle
  /// A button was created and appended to the end of the order.
  #[serde(rename = "button:created")]
  ButtonCreated { button: ButtonView },
  #[serde(rename = "button:changed")]
  ButtonChanged { button: ButtonView },
  #[serde(rename = "button:destroyed")]
  ButtonDestroyed { button_id: ButtonId },

  // Layout
  #[serde(rename = "order:changed")]
  OrderChanged { order: Vec<ButtonId> },

  // Hover preview menu
  #[serde(rename = "preview:opened")]
  PreviewOpened {
    button_id: ButtonId,
    items: Vec<PreviewItem>,
    /// Render live window thumbnails (`hover-preview` setting).
    thumbnails: bool,
  },
  #[serde(rename = "preview:changed")]
  PreviewChanged {
    button_id: ButtonId,
    items: Vec<PreviewItem>,
  },
  #[serde(rename = "preview:closed")]
  PreviewClosed { button_id: ButtonId },

  /// A new application instance was requested from this button.
  /// Renderers play the launch animation for `animation_ms`.
  #[serde(rename = "app:launched")]
  AppLaunched { button_id: ButtonId, animation_ms: u32 },
}

impl Event {
  /// The button this event concerns, if it concerns exactly one.
  pub const fn button_id(&self) -> Option<ButtonId> {
    match self {
      Self::ButtonCreated { button } | Self::ButtonChanged { button } => Some(button.id),
      Self::ButtonDestroyed { button_id }
      | Self::PreviewOpened { button_id, .. }
      | Self::PreviewChanged { button_id, .. }
      | Self::PreviewClosed { button_id }
      | Self::AppLaunched { button_id, .. } => Some(*button_id),
      Self::OrderChanged { .. } => None,
    }
  }
}
