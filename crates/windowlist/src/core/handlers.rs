/*!
Signal inbox and notification handlers.

Shell, workspace, window, settings and scheduler callbacks never touch
engine state. They push a [`Signal`] into the [`Inbox`]; the host drains it
with `WindowList::process_pending`, which hands every signal to
`handle_signal` in delivery order.
*/

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::WindowList;
use crate::hover::HoverAction;
use crate::platform::{Shell, WindowHandle};
use crate::types::{ButtonId, SettingKey, WindowId};

/// A notification waiting to be handled.
pub(crate) enum Signal<W> {
  WindowAdded { workspace: u32, window: W },
  WindowRemoved { workspace: u32, window: W },
  /// Title, minimized, urgent or demands-attention changed.
  WindowChanged(WindowId),
  WorkspaceSwitched,
  WorkspacesChanged,
  FocusAppChanged,
  SettingChanged(SettingKey),
  HoverTimer { button: ButtonId, generation: u64 },
}

impl<W> std::fmt::Debug for Signal<W> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::WindowAdded { workspace, .. } => write!(f, "WindowAdded(workspace {workspace})"),
      Self::WindowRemoved { workspace, .. } => write!(f, "WindowRemoved(workspace {workspace})"),
      Self::WindowChanged(id) => write!(f, "WindowChanged({id})"),
      Self::WorkspaceSwitched => f.write_str("WorkspaceSwitched"),
      Self::WorkspacesChanged => f.write_str("WorkspacesChanged"),
      Self::FocusAppChanged => f.write_str("FocusAppChanged"),
      Self::SettingChanged(key) => write!(f, "SettingChanged({key})"),
      Self::HoverTimer { button, generation } => {
        write!(f, "HoverTimer(button {button}, generation {generation})")
      }
    }
  }
}

/// FIFO of pending signals. Clone is cheap and shares the queue.
pub(crate) struct Inbox<W> {
  queue: Rc<RefCell<VecDeque<Signal<W>>>>,
}

impl<W> Clone for Inbox<W> {
  fn clone(&self) -> Self {
    Self {
      queue: Rc::clone(&self.queue),
    }
  }
}

impl<W> Default for Inbox<W> {
  fn default() -> Self {
    Self {
      queue: Rc::new(RefCell::new(VecDeque::new())),
    }
  }
}

impl<W> Inbox<W> {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn push(&self, signal: Signal<W>) {
    self.queue.borrow_mut().push_back(signal);
  }

  pub(crate) fn pop(&self) -> Option<Signal<W>> {
    self.queue.borrow_mut().pop_front()
  }

  pub(crate) fn len(&self) -> usize {
    self.queue.borrow().len()
  }

  pub(crate) fn clear(&self) {
    self.queue.borrow_mut().clear();
  }
}

impl<S: Shell> WindowList<S> {
  /// Run one signal to completion, then refresh every view.
  pub(crate) fn handle_signal(&mut self, signal: Signal<S::Window>) {
    log::trace!("Handling {signal:?}");
    match signal {
      Signal::WindowAdded { workspace, window } => {
        self.handle_window_added(workspace, window);
      }
      Signal::WindowRemoved { window, .. } => self.handle_window_removed(&window),
      Signal::WindowChanged(window_id) => self.handle_window_changed(window_id),
      Signal::WorkspaceSwitched => self.handle_workspace_switched(),
      Signal::WorkspacesChanged => self.rescan_workspaces(),
      Signal::FocusAppChanged => {}
      Signal::SettingChanged(key) => self.handle_setting_changed(key),
      Signal::HoverTimer { button, generation } => self.handle_hover_timer(button, generation),
    }
    self.refresh_views();
  }

  /// Detach a window from its button. The button goes away when it is
  /// left empty and is not pinned.
  pub(crate) fn handle_window_removed(&mut self, window: &S::Window) {
    let window_id = window.id();
    let Some(owner) = self.registry.find_button_for_window(window_id) else {
      log::debug!("WindowRemoved: window {window_id} has no button, skipping");
      return;
    };

    let empty = self.registry.detach_window(owner, window_id).unwrap_or(false);
    if empty && !self.registry.is_pinned(owner) {
      self.registry.remove_button(owner);
    }
  }

  fn handle_window_changed(&mut self, window_id: WindowId) {
    // Only the owning button can change; refresh_views covers it.
    if self.registry.find_button_for_window(window_id).is_none() {
      log::debug!("WindowChanged: window {window_id} has no button, skipping");
    }
  }

  fn handle_workspace_switched(&mut self) {
    let index = self.shell.active_workspace_index();
    self.registry.set_active_workspace(index);
  }

  fn handle_setting_changed(&mut self, key: SettingKey) {
    let value = self.settings.get(key);
    let was_grouping = self.registry.config.group_windows;

    if let Err(e) = self.registry.config.apply(key, value.as_ref()) {
      log::warn!("Ignoring setting change: {e}");
      return;
    }

    match key {
      SettingKey::GroupWindows => match (was_grouping, self.registry.config.group_windows) {
        (false, true) => self.group_pass(),
        (true, false) => self.ungroup_pass(),
        _ => {}
      },
      SettingKey::PinnedApps | SettingKey::DisplayPinned => self.reconcile(),
      // View-only settings: refresh_views picks them up.
      SettingKey::CaptionType
      | SettingKey::DisplayCaptionFor
      | SettingKey::DisplayNumber
      | SettingKey::LabelWidth
      | SettingKey::AnimationTime
      | SettingKey::PreviewTimeoutShow
      | SettingKey::PreviewTimeoutHide
      | SettingKey::HoverPreview => {}
    }
  }

  fn handle_hover_timer(&mut self, button: ButtonId, generation: u64) {
    let Some(cached) = self.registry.button_mut(button) else {
      log::trace!("HoverTimer: button {button} is gone");
      return;
    };
    match cached.hover.fire(generation) {
      Some(HoverAction::Open) => self.open_preview(button),
      Some(HoverAction::Close) => self.close_preview(button),
      None => {}
    }
  }

  /// Recompute every button view and every open preview menu.
  pub(crate) fn refresh_views(&mut self) {
    self.registry.refresh_all();
    self.sync_previews();
  }
}
