/*!
Setting keys, setting enums and the pinned application list.

Enum settings are stored either as their lowercase name (`"title"`) or as
the numeric index older settings files used (`1`). Both parse.
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AppId;

/// Keys recognized by the window list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingKey {
  GroupWindows,
  DisplayPinned,
  PinnedApps,
  CaptionType,
  DisplayCaptionFor,
  DisplayNumber,
  LabelWidth,
  AnimationTime,
  PreviewTimeoutShow,
  PreviewTimeoutHide,
  HoverPreview,
}

impl SettingKey {
  /// Every key, in the order a fresh settings file lists them.
  pub const ALL: [Self; 11] = [
    Self::GroupWindows,
    Self::DisplayPinned,
    Self::PinnedApps,
    Self::CaptionType,
    Self::DisplayCaptionFor,
    Self::DisplayNumber,
    Self::LabelWidth,
    Self::AnimationTime,
    Self::PreviewTimeoutShow,
    Self::PreviewTimeoutHide,
    Self::HoverPreview,
  ];

  /// The key as it appears in the settings file.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::GroupWindows => "group-windows",
      Self::DisplayPinned => "display-pinned",
      Self::PinnedApps => "pinned-apps",
      Self::CaptionType => "caption-type",
      Self::DisplayCaptionFor => "display-caption-for",
      Self::DisplayNumber => "display-number",
      Self::LabelWidth => "label-width",
      Self::AnimationTime => "animation-time",
      Self::PreviewTimeoutShow => "preview-timeout-show",
      Self::PreviewTimeoutHide => "preview-timeout-hide",
      Self::HoverPreview => "hover-preview",
    }
  }

  /// Look a key up by its settings-file name.
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|key| key.as_str() == name)
  }
}

impl std::fmt::Display for SettingKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Parse an enum setting stored as a name or as a numeric index.
fn parse_variant<T: Copy>(value: &Value, variants: &[(&str, T)]) -> Option<T> {
  match value {
    Value::String(name) => variants
      .iter()
      .find(|(n, _)| n.eq_ignore_ascii_case(name))
      .map(|&(_, v)| v),
    Value::Number(n) => {
      let index = usize::try_from(n.as_u64()?).ok()?;
      variants.get(index).map(|&(_, v)| v)
    }
    _ => None,
  }
}

/// What a button's caption shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionType {
  /// The application name.
  Name,
  /// The title of the button's current window.
  #[default]
  Title,
}

impl CaptionType {
  /// Parse a stored name or legacy index.
  pub fn from_value(value: &Value) -> Option<Self> {
    parse_variant(value, &[("name", Self::Name), ("title", Self::Title)])
  }
}

/// Which buttons show their caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCaption {
  /// Never.
  No,
  /// Always.
  All,
  /// Only buttons with a window on the active workspace.
  #[default]
  Running,
  /// Only the focused button.
  Focused,
}

impl DisplayCaption {
  /// Parse a stored name or legacy index.
  pub fn from_value(value: &Value) -> Option<Self> {
    parse_variant(
      value,
      &[
        ("no", Self::No),
        ("all", Self::All),
        ("running", Self::Running),
        ("focused", Self::Focused),
      ],
    )
  }
}

/// When a grouped button shows its window count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayNumber {
  /// Never.
  No,
  /// Whenever the button has at least one window.
  All,
  /// Only when the button has two or more windows.
  #[default]
  Smart,
}

impl DisplayNumber {
  /// Parse a stored name or legacy index.
  pub fn from_value(value: &Value) -> Option<Self> {
    parse_variant(
      value,
      &[("no", Self::No), ("all", Self::All), ("smart", Self::Smart)],
    )
  }

  /// Whether a count of `count` windows should be displayed.
  pub const fn shows(self, count: usize) -> bool {
    match self {
      Self::No => false,
      Self::All => count >= 1,
      Self::Smart => count >= 2,
    }
  }
}

/// Ordered, duplicate-free list of pinned application ids.
///
/// This is the single source of truth for the relative order of pinned
/// buttons. It is persisted under [`SettingKey::PinnedApps`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinList(Vec<AppId>);

impl PinList {
  /// Build a pin list, dropping repeated ids (first occurrence wins).
  pub fn new(ids: impl IntoIterator<Item = AppId>) -> Self {
    let mut list = Self::default();
    for id in ids {
      if !list.contains(&id) {
        list.0.push(id);
      }
    }
    list
  }

  /// Parse the settings value (a JSON array of strings). Non-string entries are skipped.
  pub fn from_value(value: &Value) -> Option<Self> {
    let entries = value.as_array()?;
    Some(Self::new(
      entries
        .iter()
        .filter_map(Value::as_str)
        .map(AppId::from),
    ))
  }

  /// Serialize for the settings store.
  pub fn to_value(&self) -> Value {
    Value::Array(
      self
        .0
        .iter()
        .map(|id| Value::String(id.0.clone()))
        .collect(),
    )
  }

  /// Whether `id` is pinned.
  pub fn contains(&self, id: &AppId) -> bool {
    self.0.contains(id)
  }

  /// Index of `id` in the list.
  pub fn position(&self, id: &AppId) -> Option<usize> {
    self.0.iter().position(|p| p == id)
  }

  /// Insert `id` at `index` (clamped to the list length). Any previous
  /// occurrence is removed first, so the list stays duplicate-free.
  pub fn insert(&mut self, index: usize, id: AppId) {
    self.remove(&id);
    let index = index.min(self.0.len());
    self.0.insert(index, id);
  }

  /// Remove `id`. Returns whether it was present.
  pub fn remove(&mut self, id: &AppId) -> bool {
    let Some(index) = self.position(id) else {
      return false;
    };
    self.0.remove(index);
    true
  }

  /// Pinned ids in order.
  pub fn ids(&self) -> &[AppId] {
    &self.0
  }

  /// Number of pinned apps.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// No app is pinned.
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}
