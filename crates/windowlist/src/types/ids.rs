/*! Branded ID types for type-safe entity references. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Button identifier. Allocated monotonically per registry, so a lower id
/// always belongs to an earlier-created button.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct ButtonId(pub u32);

/// Window identifier, supplied by the shell for each window handle.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct WindowId(pub u64);

/// Identifier of a pending scheduler delay.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct TimerId(pub u64);

/// Stable application identifier (desktop file id, e.g. `"org.gnome.gedit.desktop"`).
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct AppId(pub String);

impl AppId {
  /// Borrow the raw id string.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for AppId {
  fn from(value: &str) -> Self {
    Self(value.to_owned())
  }
}
