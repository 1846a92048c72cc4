/*!
Core `WindowList` instance - owns all button state and event broadcasting.

# Module Structure

- `mod.rs` - `WindowList` struct, builder, start/stop, inbox draining, queries
- `registry/` - Registry with private fields + operations + event emission
- `grouping.rs` - which button a window joins, group/ungroup passes
- `pinning.rs` - pin/unpin, reconcile, drag-and-drop, reentrancy guard
- `visibility.rs` - visible/current window/focus/urgency, pure functions
- `actions.rs` - clicks, context menu, hover preview menu
- `handlers.rs` - signal inbox and notification handlers
- `subscriptions.rs` - owned subscription lists
- `adapters.rs` - convert registry data to public API types

# Example

```ignore
let mut list = WindowList::builder().build(shell, settings, scheduler);
let mut events = list.subscribe();
list.start();

// From the host's main loop, after any shell callback fired:
list.process_pending();
while let Ok(event) = events.try_recv() {
    // render
}
```
*/

mod actions;
mod adapters;
mod grouping;
pub(crate) mod handlers;
mod pinning;
mod registry;
pub(crate) mod subscriptions;
mod visibility;

use async_broadcast::InactiveReceiver;
use serde_json::Value;
use std::rc::Rc;

use crate::platform::{Scheduler, SettingsStore, Shell, WindowHandle};
use crate::settings::Config;
use crate::types::{AppId, ButtonId, ButtonView, Event, PinList, SettingKey, WindowId};
use crate::workspaces::WorkspaceWatcher;
use handlers::{Inbox, Signal};
use pinning::PinGuard;
use registry::Registry;
use subscriptions::SubscriptionList;

const EVENT_CHANNEL_CAPACITY: usize = 5000;

/// Engine options fixed at construction.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Options {
  pub(crate) one_button_per_workspace_per_app: bool,
}

/// The window list engine.
///
/// Single-threaded: shell callbacks only queue signals, and the host drives
/// the engine by calling [`WindowList::process_pending`] on its main loop.
/// Stops (releasing every subscription) when dropped.
pub struct WindowList<S: Shell> {
  shell: S,
  settings: Rc<dyn SettingsStore>,
  pub(crate) registry: Registry<S>,
  inbox: Inbox<S::Window>,
  watcher: WorkspaceWatcher<S>,
  /// Shell and settings subscriptions.
  subscriptions: SubscriptionList,
  pin_guard: PinGuard,
  options: Options,
  events_keepalive: InactiveReceiver<Event>,
  running: bool,
}

impl<S: Shell> std::fmt::Debug for WindowList<S> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WindowList")
      .field("running", &self.running)
      .field("buttons", &self.registry.button_count())
      .finish_non_exhaustive()
  }
}

/// Builder for configuring a `WindowList`.
///
/// # Example
///
/// ```ignore
/// let list = WindowList::builder()
///     .one_button_per_workspace_per_app(true)
///     .build(shell, MemorySettings::new(), scheduler);
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct WindowListBuilder {
  options: Options,
}

impl WindowListBuilder {
  /// With grouping on, never put two windows of one workspace on the same
  /// button: a window joins the first button of its app without a window on
  /// its workspace, else gets a new button. Default: false.
  pub const fn one_button_per_workspace_per_app(mut self, enabled: bool) -> Self {
    self.options.one_button_per_workspace_per_app = enabled;
    self
  }

  /// Build the engine. Nothing is tracked until [`WindowList::start`].
  pub fn build<S: Shell>(
    self,
    shell: S,
    settings: impl SettingsStore + 'static,
    scheduler: impl Scheduler + 'static,
  ) -> WindowList<S> {
    WindowList::create(shell, Rc::new(settings), Rc::new(scheduler), self.options)
  }
}

impl<S: Shell> WindowList<S> {
  /// Create a builder for configuring a new window list.
  pub fn builder() -> WindowListBuilder {
    WindowListBuilder::default()
  }

  fn create(
    shell: S,
    settings: Rc<dyn SettingsStore>,
    scheduler: Rc<dyn Scheduler>,
    options: Options,
  ) -> Self {
    let (mut tx, rx) = async_broadcast::broadcast(EVENT_CHANNEL_CAPACITY);
    tx.set_overflow(true); // Drop oldest messages when full

    let inbox = Inbox::new();
    let config = Config::load(settings.as_ref());
    let registry = Registry::new(tx, inbox.clone(), scheduler, config);

    Self {
      shell,
      settings,
      registry,
      inbox,
      watcher: WorkspaceWatcher::new(),
      subscriptions: SubscriptionList::new(),
      pin_guard: PinGuard::default(),
      options,
      events_keepalive: rx.deactivate(),
      running: false,
    }
  }

  /// Subscribe to events from this instance.
  pub fn subscribe(&self) -> async_broadcast::Receiver<Event> {
    self.events_keepalive.activate_cloned()
  }

  /// Start tracking: load settings, subscribe to the shell, create pinned
  /// buttons and attach every existing window. No-op if already running.
  pub fn start(&mut self) {
    if self.running {
      return;
    }
    self.running = true;
    self.registry.config = Config::load(self.settings.as_ref());
    self.subscribe_settings();
    self.subscribe_shell();
    self
      .registry
      .set_active_workspace(self.shell.active_workspace_index());

    self.reconcile();
    self.rescan_workspaces();
    self.refresh_views();
    log::debug!(
      "Window list started with {} button(s) holding {} window(s)",
      self.registry.button_count(),
      self.registry.window_count()
    );
  }

  /// Stop tracking and destroy every button. Pending signals are dropped.
  pub fn stop(&mut self) {
    if !self.running {
      return;
    }
    self.running = false;
    self.subscriptions.dispose();
    self.watcher.clear();
    self.inbox.clear();

    for id in self.registry.order().to_vec() {
      let windows: Vec<WindowId> = self
        .registry
        .button(id)
        .map(|b| b.windows.iter().map(WindowHandle::id).collect())
        .unwrap_or_default();
      for window in windows {
        self.registry.detach_window(id, window);
      }
      self.registry.remove_button(id);
    }
    log::debug!("Window list stopped");
  }

  /// Whether `start` ran and `stop` did not.
  pub const fn is_running(&self) -> bool {
    self.running
  }

  /// Handle every queued signal, oldest first. Returns how many were handled.
  pub fn process_pending(&mut self) -> usize {
    log::trace!("{} signal(s) pending", self.inbox.len());
    let mut handled = 0;
    while let Some(signal) = self.inbox.pop() {
      if !self.running {
        continue;
      }
      self.handle_signal(signal);
      handled += 1;
    }
    handled
  }

  fn subscribe_settings(&mut self) {
    for key in SettingKey::ALL {
      let inbox = self.inbox.clone();
      let guard = self.pin_guard.clone();
      let subscription = self.settings.on_changed(
        key,
        Box::new(move || {
          if key == SettingKey::PinnedApps && guard.is_pinning() {
            log::trace!("Discarding pinned-apps notification for our own write");
            return;
          }
          inbox.push(Signal::SettingChanged(key));
        }),
      );
      self.subscriptions.push(subscription);
    }
  }

  fn subscribe_shell(&mut self) {
    let inbox = self.inbox.clone();
    self.subscriptions.push(
      self
        .shell
        .on_workspace_switched(Box::new(move || inbox.push(Signal::WorkspaceSwitched))),
    );
    let inbox = self.inbox.clone();
    self.subscriptions.push(
      self
        .shell
        .on_workspaces_changed(Box::new(move || inbox.push(Signal::WorkspacesChanged))),
    );
    let inbox = self.inbox.clone();
    self.subscriptions.push(
      self
        .shell
        .on_focus_app_changed(Box::new(move || inbox.push(Signal::FocusAppChanged))),
    );
  }

  /// Resubscribe to every workspace and attach windows that have no button yet.
  pub(crate) fn rescan_workspaces(&mut self) {
    let windows = self.watcher.rebuild(&self.shell, &self.inbox);
    self
      .registry
      .set_active_workspace(self.shell.active_workspace_index());
    for (workspace, window) in windows {
      if self.registry.find_button_for_window(window.id()).is_none() {
        self.handle_window_added(workspace, window);
      }
    }
  }

  /// Write a setting. Failures are logged; the local snapshot stays updated.
  fn persist(&self, key: SettingKey, value: Value) {
    if let Err(e) = self.settings.set(key, value) {
      log::warn!("Failed to store setting '{key}': {e}");
    }
  }

  // === Queries ===

  /// Buttons in visual order.
  pub fn order(&self) -> &[ButtonId] {
    self.registry.order()
  }

  /// The last published view of a button.
  pub fn button_view(&self, id: ButtonId) -> Option<ButtonView> {
    self.registry.button(id).and_then(|b| b.last_view.clone())
  }

  /// Every button view, in visual order.
  pub fn views(&self) -> Vec<ButtonView> {
    self
      .registry
      .order()
      .iter()
      .filter_map(|&id| self.button_view(id))
      .collect()
  }

  /// Windows attached to a button, in attach order.
  pub fn button_windows(&self, id: ButtonId) -> Option<Vec<WindowId>> {
    self
      .registry
      .button(id)
      .map(|b| b.windows.iter().map(WindowHandle::id).collect())
  }

  /// The button holding a window, if any.
  pub fn find_button_for_window(&self, window: WindowId) -> Option<ButtonId> {
    self.registry.find_button_for_window(window)
  }

  /// Buttons of an app, earliest-created first.
  pub fn buttons_for_app(&self, app: &AppId) -> Vec<ButtonId> {
    self.registry.find_buttons_for_app(app).to_vec()
  }

  /// Whether a button is its app's pinned button.
  pub fn is_pinned(&self, id: ButtonId) -> bool {
    self.registry.is_pinned(id)
  }

  /// Pinned apps in display order.
  pub fn pin_list(&self) -> &PinList {
    &self.registry.config.pinned_apps
  }

  /// The settings snapshot in effect.
  pub fn config(&self) -> &Config {
    &self.registry.config
  }

  /// Index of the workspace the views are computed for.
  pub const fn active_workspace(&self) -> u32 {
    self.registry.active_workspace()
  }
}

impl<S: Shell> Drop for WindowList<S> {
  fn drop(&mut self) {
    self.stop();
  }
}
