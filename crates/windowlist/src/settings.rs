/*!
Typed settings snapshot and an in-memory settings store.

[`Config`] is the window list's view of the settings: one typed field per
[`SettingKey`], refreshed from the [`SettingsStore`] whenever a key's
change notification arrives. [`MemorySettings`] is a complete store
without persistence, for hosts that keep settings elsewhere and for tests.

## Settings file format

[`Config::from_json`] accepts a JSON object mapping key names to values.
Each value may be given directly or wrapped the way applet settings files
wrap it:

```json
{
  "group-windows": true,
  "pinned-apps": { "type": "generic", "value": ["firefox.desktop"] },
  "caption-type": "title"
}
```
*/

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use serde_json::{Map, Value};

use crate::platform::{Callback, SettingsStore, Subscription};
use crate::types::{
  CaptionType, DisplayCaption, DisplayNumber, PinList, SettingKey, WindowListError,
  WindowListResult,
};

const DEFAULT_LABEL_WIDTH: u32 = 150;
const DEFAULT_ANIMATION_TIME_MS: u32 = 500;
const DEFAULT_PREVIEW_TIMEOUT_SHOW_MS: u32 = 400;
const DEFAULT_PREVIEW_TIMEOUT_HIDE_MS: u32 = 200;

/// Typed snapshot of every setting the window list reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Collapse windows of one application into one button. Default: true.
  pub group_windows: bool,
  /// Keep buttons of pinned applications. Default: true.
  pub display_pinned: bool,
  /// Pinned application ids in display order.
  pub pinned_apps: PinList,
  /// Caption source. Default: title.
  pub caption_type: CaptionType,
  /// Which buttons show a caption. Default: running.
  pub display_caption_for: DisplayCaption,
  /// When the window count badge shows. Default: smart.
  pub display_number: DisplayNumber,
  /// Caption width in pixels. Default: 150.
  pub label_width: u32,
  /// Launch animation length. Default: 500ms.
  pub animation_time_ms: u32,
  /// Hover time before the preview menu opens. Default: 400ms.
  pub preview_timeout_show_ms: u32,
  /// Time after the pointer leaves before the preview menu closes. Default: 200ms.
  pub preview_timeout_hide_ms: u32,
  /// Show window thumbnails in the preview menu. Default: true.
  pub hover_preview: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      group_windows: true,
      display_pinned: true,
      pinned_apps: PinList::default(),
      caption_type: CaptionType::default(),
      display_caption_for: DisplayCaption::default(),
      display_number: DisplayNumber::default(),
      label_width: DEFAULT_LABEL_WIDTH,
      animation_time_ms: DEFAULT_ANIMATION_TIME_MS,
      preview_timeout_show_ms: DEFAULT_PREVIEW_TIMEOUT_SHOW_MS,
      preview_timeout_hide_ms: DEFAULT_PREVIEW_TIMEOUT_HIDE_MS,
      hover_preview: true,
    }
  }
}

fn invalid(key: SettingKey, value: &Value) -> WindowListError {
  WindowListError::InvalidSetting {
    key,
    reason: format!("unexpected value {value}"),
  }
}

fn as_bool(key: SettingKey, value: &Value) -> WindowListResult<bool> {
  value.as_bool().ok_or_else(|| invalid(key, value))
}

fn as_u32(key: SettingKey, value: &Value) -> WindowListResult<u32> {
  value
    .as_u64()
    .and_then(|n| u32::try_from(n).ok())
    .ok_or_else(|| invalid(key, value))
}

impl Config {
  /// Read every key from a store. Missing or malformed values keep their defaults.
  pub fn load(store: &dyn SettingsStore) -> Self {
    let mut config = Self::default();
    for key in SettingKey::ALL {
      if let Err(e) = config.apply(key, store.get(key).as_ref()) {
        log::warn!("Ignoring setting: {e}");
      }
    }
    config
  }

  /// Parse a settings file. Unknown keys are ignored.
  pub fn from_json(text: &str) -> WindowListResult<Self> {
    let map: Map<String, Value> =
      serde_json::from_str(text).map_err(|e| WindowListError::Settings(e.to_string()))?;

    let mut config = Self::default();
    for (name, entry) in &map {
      let Some(key) = SettingKey::from_name(name) else {
        log::debug!("Unknown setting '{name}' in settings file");
        continue;
      };
      let value = entry.get("value").unwrap_or(entry);
      config.apply(key, Some(value))?;
    }
    Ok(config)
  }

  /// Update one field. `None` resets it to the default.
  ///
  /// On error the field is left unchanged.
  pub fn apply(&mut self, key: SettingKey, value: Option<&Value>) -> WindowListResult<()> {
    let Some(value) = value else {
      self.reset(key);
      return Ok(());
    };

    match key {
      SettingKey::GroupWindows => self.group_windows = as_bool(key, value)?,
      SettingKey::DisplayPinned => self.display_pinned = as_bool(key, value)?,
      SettingKey::PinnedApps => {
        self.pinned_apps = PinList::from_value(value).ok_or_else(|| invalid(key, value))?;
      }
      SettingKey::CaptionType => {
        self.caption_type = CaptionType::from_value(value).ok_or_else(|| invalid(key, value))?;
      }
      SettingKey::DisplayCaptionFor => {
        self.display_caption_for =
          DisplayCaption::from_value(value).ok_or_else(|| invalid(key, value))?;
      }
      SettingKey::DisplayNumber => {
        self.display_number = DisplayNumber::from_value(value).ok_or_else(|| invalid(key, value))?;
      }
      SettingKey::LabelWidth => self.label_width = as_u32(key, value)?,
      SettingKey::AnimationTime => self.animation_time_ms = as_u32(key, value)?,
      SettingKey::PreviewTimeoutShow => self.preview_timeout_show_ms = as_u32(key, value)?,
      SettingKey::PreviewTimeoutHide => self.preview_timeout_hide_ms = as_u32(key, value)?,
      SettingKey::HoverPreview => self.hover_preview = as_bool(key, value)?,
    }
    Ok(())
  }

  fn reset(&mut self, key: SettingKey) {
    let defaults = Self::default();
    match key {
      SettingKey::GroupWindows => self.group_windows = defaults.group_windows,
      SettingKey::DisplayPinned => self.display_pinned = defaults.display_pinned,
      SettingKey::PinnedApps => self.pinned_apps = defaults.pinned_apps,
      SettingKey::CaptionType => self.caption_type = defaults.caption_type,
      SettingKey::DisplayCaptionFor => self.display_caption_for = defaults.display_caption_for,
      SettingKey::DisplayNumber => self.display_number = defaults.display_number,
      SettingKey::LabelWidth => self.label_width = defaults.label_width,
      SettingKey::AnimationTime => self.animation_time_ms = defaults.animation_time_ms,
      SettingKey::PreviewTimeoutShow => {
        self.preview_timeout_show_ms = defaults.preview_timeout_show_ms;
      }
      SettingKey::PreviewTimeoutHide => {
        self.preview_timeout_hide_ms = defaults.preview_timeout_hide_ms;
      }
      SettingKey::HoverPreview => self.hover_preview = defaults.hover_preview,
    }
  }

  /// The stored representation of one field.
  pub fn value(&self, key: SettingKey) -> Value {
    match key {
      SettingKey::GroupWindows => Value::Bool(self.group_windows),
      SettingKey::DisplayPinned => Value::Bool(self.display_pinned),
      SettingKey::PinnedApps => self.pinned_apps.to_value(),
      SettingKey::CaptionType => serde_json::to_value(self.caption_type).unwrap_or(Value::Null),
      SettingKey::DisplayCaptionFor => {
        serde_json::to_value(self.display_caption_for).unwrap_or(Value::Null)
      }
      SettingKey::DisplayNumber => serde_json::to_value(self.display_number).unwrap_or(Value::Null),
      SettingKey::LabelWidth => Value::from(self.label_width),
      SettingKey::AnimationTime => Value::from(self.animation_time_ms),
      SettingKey::PreviewTimeoutShow => Value::from(self.preview_timeout_show_ms),
      SettingKey::PreviewTimeoutHide => Value::from(self.preview_timeout_hide_ms),
      SettingKey::HoverPreview => Value::Bool(self.hover_preview),
    }
  }
}

struct Listener {
  id: u64,
  key: SettingKey,
  callback: Rc<dyn Fn()>,
}

#[derive(Default)]
struct MemorySettingsInner {
  values: RefCell<HashMap<SettingKey, Value>>,
  listeners: RefCell<Vec<Listener>>,
  next_listener: Cell<u64>,
}

/// In-memory [`SettingsStore`]. Clone is cheap and shares the same values.
/// Single-threaded, like the window list that reads it.
///
/// Listeners are notified synchronously from [`SettingsStore::set`], and
/// only when the stored value actually changed.
#[derive(Clone, Default)]
pub struct MemorySettings {
  inner: Rc<MemorySettingsInner>,
}

impl std::fmt::Debug for MemorySettings {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MemorySettings")
      .field("values", &*self.inner.values.borrow())
      .finish_non_exhaustive()
  }
}

impl MemorySettings {
  /// Empty store. Every key reads as missing, so [`Config::load`] yields defaults.
  pub fn new() -> Self {
    Self::default()
  }

  /// Store pre-filled with every value of `config`.
  pub fn from_config(config: &Config) -> Self {
    let store = Self::new();
    {
      let mut values = store.inner.values.borrow_mut();
      for key in SettingKey::ALL {
        values.insert(key, config.value(key));
      }
    }
    store
  }

  fn listeners_for(&self, key: SettingKey) -> Vec<Rc<dyn Fn()>> {
    self
      .inner
      .listeners
      .borrow()
      .iter()
      .filter(|l| l.key == key)
      .map(|l| Rc::clone(&l.callback))
      .collect()
  }

  fn remove_listener(inner: &Weak<MemorySettingsInner>, id: u64) {
    if let Some(inner) = inner.upgrade() {
      inner.listeners.borrow_mut().retain(|l| l.id != id);
    }
  }
}

impl SettingsStore for MemorySettings {
  fn get(&self, key: SettingKey) -> Option<Value> {
    self.inner.values.borrow().get(&key).cloned()
  }

  fn set(&self, key: SettingKey, value: Value) -> WindowListResult<()> {
    {
      let mut values = self.inner.values.borrow_mut();
      if values.get(&key) == Some(&value) {
        return Ok(());
      }
      values.insert(key, value);
    }

    // Notify without holding a borrow: listeners may read the store.
    for callback in self.listeners_for(key) {
      callback();
    }
    Ok(())
  }

  fn on_changed(&self, key: SettingKey, callback: Callback) -> Subscription {
    let id = self.inner.next_listener.get() + 1;
    self.inner.next_listener.set(id);
    self.inner.listeners.borrow_mut().push(Listener {
      id,
      key,
      callback: Rc::from(callback),
    });

    let inner = Rc::downgrade(&self.inner);
    Subscription::new(move || Self::remove_listener(&inner, id))
  }
}
