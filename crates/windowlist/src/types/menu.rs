/*! Pointer input and context menu types. */

use serde::{Deserialize, Serialize};

/// Mouse button of a click on an app button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
  Left,
  Middle,
  Right,
}

/// An action offered by a button's context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "workspace", rename_all = "kebab-case")]
pub enum MenuAction {
  OpenNewWindow,
  Pin,
  Unpin,
  /// Show the current window on all workspaces.
  Stick,
  /// Show the current window only on its own workspace.
  Unstick,
  MoveToWorkspace(u32),
  Restore,
  Minimize,
  Maximize,
  Unmaximize,
  /// Close every window on the active workspace except the current one.
  CloseOthers,
  CloseAll,
  Close,
}

/// One context menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
  /// Action passed back to `activate_menu_item`.
  pub action: MenuAction,
  /// Entry text.
  pub label: String,
  /// Themed icon name.
  pub icon_name: Option<&'static str>,
  /// Draw a separator above this item.
  pub separated: bool,
}

impl MenuItem {
  pub(crate) fn new(action: MenuAction, label: impl Into<String>) -> Self {
    Self {
      action,
      label: label.into(),
      icon_name: None,
      separated: false,
    }
  }

  pub(crate) fn icon(mut self, name: &'static str) -> Self {
    self.icon_name = Some(name);
    self
  }

  pub(crate) fn separated(mut self) -> Self {
    self.separated = true;
    self
  }
}
