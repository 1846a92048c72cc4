/*!
Shell abstraction traits.

These traits define the contract between the window list core and the
desktop shell hosting it. The shell implements them for its own window,
application and workspace objects; core code only ever uses these traits.

Every accessor may be called on a handle whose underlying object is
already gone. Implementations report that as `None` from
[`WindowHandle::info`] or as [`WindowListError::StaleHandle`](crate::WindowListError::StaleHandle) from
commands, never by panicking.
*/

use std::hash::Hash;
use std::time::Duration;

use serde_json::Value;

use crate::types::{
  AppId, SettingKey, TimerId, WindowId, WindowInfo, WindowListResult, WindowProperty,
};

/// Notification callback without payload.
pub type Callback = Box<dyn Fn()>;

/// Notification callback receiving the window it concerns.
pub type WindowCallback<W> = Box<dyn Fn(&W)>;

/// Handle to a live notification subscription. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
  release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
  /// Wrap the function that tears the subscription down.
  pub fn new(release: impl FnOnce() + 'static) -> Self {
    Self {
      release: Some(Box::new(release)),
    }
  }

  /// A subscription with nothing to release.
  pub const fn noop() -> Self {
    Self { release: None }
  }

  /// Unsubscribe now. Equivalent to dropping.
  pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(release) = self.release.take() {
      release();
    }
  }
}

impl std::fmt::Debug for Subscription {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Subscription")
      .field("active", &self.release.is_some())
      .finish()
  }
}

/// A window managed by the shell. Clone is cheap (reference-counted).
pub trait WindowHandle: Clone + Eq + Hash + 'static {
  /// Stable identity of this window.
  fn id(&self) -> WindowId;

  /// Fetch current attributes. None if the window no longer exists.
  fn info(&self) -> Option<WindowInfo>;

  /// Visit transient (dialog/child) windows until `visit` returns false.
  fn for_each_transient(&self, visit: &mut dyn FnMut(&Self) -> bool);

  /// Subscribe to change notifications for one property.
  fn on_property_changed(&self, property: WindowProperty, callback: Callback) -> Subscription;

  /// Minimize the window.
  fn minimize(&self) -> WindowListResult<()>;
  /// Restore a minimized window without focusing it.
  fn unminimize(&self) -> WindowListResult<()>;
  /// Maximize in both directions.
  fn maximize(&self) -> WindowListResult<()>;
  /// Leave the maximized state.
  fn unmaximize(&self) -> WindowListResult<()>;
  /// Raise, unminimize and focus the window.
  fn activate(&self) -> WindowListResult<()>;
  /// Ask the window to close. Removal is announced by its workspace.
  fn close(&self) -> WindowListResult<()>;
  /// Move to the workspace at `index`.
  fn move_to_workspace(&self, index: u32) -> WindowListResult<()>;
  /// Show on all workspaces.
  fn stick(&self) -> WindowListResult<()>;
  /// Show only on the window's own workspace.
  fn unstick(&self) -> WindowListResult<()>;
}

/// An installed application.
pub trait AppHandle: Clone + 'static {
  /// Stable identity, the key stored in the pin list.
  fn id(&self) -> AppId;
  /// Human-readable name.
  fn name(&self) -> Option<String>;
  /// Themed icon name. Rendering the icon is the view layer's job.
  fn icon_name(&self) -> Option<String>;
  /// Launch a new instance.
  fn open_new_window(&self) -> WindowListResult<()>;
}

/// A workspace of the shell.
pub trait WorkspaceHandle: Clone + 'static {
  /// Window type listed on this workspace.
  type Window: WindowHandle;

  /// Zero-based position of the workspace.
  fn index(&self) -> u32;
  /// Windows currently on this workspace.
  fn list_windows(&self) -> Vec<Self::Window>;
  /// A window appeared on this workspace.
  fn on_window_added(&self, callback: WindowCallback<Self::Window>) -> Subscription;
  /// A window left this workspace or was destroyed.
  fn on_window_removed(&self, callback: WindowCallback<Self::Window>) -> Subscription;
}

/// Shell-global operations: workspace enumeration and the app tracker.
pub trait Shell: 'static {
  /// Window handle type.
  type Window: WindowHandle;
  /// Application handle type.
  type App: AppHandle;
  /// Workspace handle type.
  type Workspace: WorkspaceHandle<Window = Self::Window>;

  /// Current workspaces, ordered by index.
  fn workspaces(&self) -> Vec<Self::Workspace>;

  /// Index of the workspace shown now.
  fn active_workspace_index(&self) -> u32;

  /// Display name of a workspace.
  fn workspace_name(&self, index: u32) -> String {
    format!("Workspace {}", index + 1)
  }

  /// Application owning a window, by the shell's window tracker.
  fn window_app(&self, window: &Self::Window) -> Option<Self::App>;

  /// Application owning a process. Fallback when `window_app` fails.
  fn app_from_pid(&self, pid: u32) -> Option<Self::App>;

  /// Application by id (for pinned apps and drops from launchers).
  fn lookup_app(&self, id: &AppId) -> Option<Self::App>;

  /// Whether a window belongs in a window list at all (filters docks,
  /// override-redirect windows, skip-taskbar windows and the like).
  fn is_interesting(&self, _window: &Self::Window) -> bool {
    true
  }

  /// The active workspace changed.
  fn on_workspace_switched(&self, callback: Callback) -> Subscription;
  /// Workspaces were added or removed.
  fn on_workspaces_changed(&self, callback: Callback) -> Subscription;
  /// Keyboard focus moved to another application.
  fn on_focus_app_changed(&self, callback: Callback) -> Subscription;
}

/// Reactive key/value settings. Persistence is the implementation's business.
pub trait SettingsStore {
  /// Stored value, None when the key was never set.
  fn get(&self, key: SettingKey) -> Option<Value>;

  /// Store a value. Listeners of `key` are notified when the value changed,
  /// possibly before this call returns.
  fn set(&self, key: SettingKey, value: Value) -> WindowListResult<()>;

  /// Subscribe to changes of one key.
  fn on_changed(&self, key: SettingKey, callback: Callback) -> Subscription;
}

/// Single-shot, cancellable delays on the host's main loop.
pub trait Scheduler {
  /// Run `callback` once after `delay`, unless cancelled first.
  fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId;

  /// Cancel a pending delay. Unknown or already fired ids are ignored.
  fn cancel(&self, id: TimerId);
}
