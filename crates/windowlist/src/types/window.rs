/*! Snapshot of the window attributes the window list consumes. */

use serde::{Deserialize, Serialize};

/// Point-in-time attributes of a window, fetched through
/// [`WindowHandle::info`](crate::WindowHandle::info).
#[allow(clippy::struct_excessive_bools)] // Mirrors the shell's window flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
  /// Window title, if any.
  pub title: Option<String>,
  /// Iconified.
  pub minimized: bool,
  /// Urgency hint set.
  pub urgent: bool,
  /// The window manager flagged it as demanding attention.
  pub demands_attention: bool,
  /// Index of the owning workspace. None while the window is in transit.
  pub workspace: Option<u32>,
  /// Sticky: shown on every workspace.
  pub on_all_workspaces: bool,
  /// The window itself appears focused. Transients are checked separately.
  pub focused: bool,
  /// Maximized in both directions.
  pub maximized: bool,
  /// Owning process, used to find the app when the tracker can't.
  pub pid: Option<u32>,
  /// Timestamp of the last user interaction with this window.
  pub user_time: u64,
}

impl WindowInfo {
  /// Whether the window shows up on the given workspace.
  pub const fn is_on_workspace(&self, index: u32) -> bool {
    if self.on_all_workspaces {
      return true;
    }
    match self.workspace {
      Some(ws) => ws == index,
      None => false,
    }
  }

  /// Whether the window is asking for the user's attention.
  pub const fn wants_attention(&self) -> bool {
    self.urgent || self.demands_attention
  }
}

/// Window properties whose change notifications a button subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowProperty {
  Title,
  Minimized,
  Urgent,
  DemandsAttention,
}

impl WindowProperty {
  /// Every property a button watches, in subscription order.
  pub const WATCHED: [Self; 4] = [
    Self::Title,
    Self::Minimized,
    Self::Urgent,
    Self::DemandsAttention,
  ];
}
