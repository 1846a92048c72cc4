/*!
Grouping policy: which button a window lands on.

- `handle_window_added` - attach a new window (also used for catch-up and replays)
- `enable_grouping` / `disable_grouping` - switch modes and regroup existing windows
*/

use std::collections::VecDeque;

use super::visibility;
use super::WindowList;
use crate::platform::{AppHandle, Shell, WindowHandle};
use crate::types::{AppId, ButtonId, SettingKey};
use serde_json::Value;

impl<S: Shell> WindowList<S> {
  /// Attach a window reported by a workspace. Returns the button holding it.
  ///
  /// Uninteresting windows and windows without an application are dropped.
  /// A window that already has a button stays where it is.
  pub(crate) fn handle_window_added(&mut self, workspace: u32, window: S::Window) -> Option<ButtonId> {
    let window_id = window.id();
    if !self.shell.is_interesting(&window) {
      log::debug!("WindowAdded: window {window_id} is not interesting, skipping");
      return None;
    }
    if let Some(owner) = self.registry.find_button_for_window(window_id) {
      return Some(owner);
    }

    let Some(app) = self.resolve_app(&window) else {
      log::debug!("WindowAdded: no application for window {window_id}, skipping");
      return None;
    };

    let app_id = app.id();
    let id = match self.resolve_target(&app_id, Some(workspace)) {
      Some(id) => id,
      None => self.registry.add_button(app),
    };
    self.registry.attach_window(id, window);
    Some(id)
  }

  /// The window tracker's answer, else the owner of the window's process.
  fn resolve_app(&self, window: &S::Window) -> Option<S::App> {
    self.shell.window_app(window).or_else(|| {
      let pid = window.info()?.pid?;
      self.shell.app_from_pid(pid)
    })
  }

  /// Existing button a new window of `app_id` should join, if any.
  fn resolve_target(&self, app_id: &AppId, workspace: Option<u32>) -> Option<ButtonId> {
    let buttons = self.registry.find_buttons_for_app(app_id);

    if !self.registry.config.group_windows {
      // Ungrouped: only an empty (pinned placeholder) button is reused.
      return buttons
        .iter()
        .copied()
        .find(|&b| self.registry.button(b).is_some_and(|btn| btn.windows.is_empty()));
    }

    match workspace {
      Some(index) if self.options.one_button_per_workspace_per_app => buttons
        .iter()
        .copied()
        .find(|&b| {
          self
            .registry
            .button(b)
            .is_some_and(|btn| !visibility::has_windows_on_workspace(&btn.windows, index))
        }),
      _ => buttons.first().copied(),
    }
  }

  /// Turn grouping on, store the setting and merge buttons per app.
  pub fn enable_grouping(&mut self) {
    self.registry.config.group_windows = true;
    self.persist(SettingKey::GroupWindows, Value::Bool(true));
    self.group_pass();
    self.refresh_views();
  }

  /// Turn grouping off, store the setting and split buttons per window.
  pub fn disable_grouping(&mut self) {
    self.registry.config.group_windows = false;
    self.persist(SettingKey::GroupWindows, Value::Bool(false));
    self.ungroup_pass();
    self.refresh_views();
  }

  /// Merge the windows of every app onto its earliest-created button.
  ///
  /// Windows of later buttons are detached and replayed through the
  /// grouping rules, then the emptied buttons are destroyed.
  pub(crate) fn group_pass(&mut self) {
    let mut apps: Vec<AppId> = Vec::new();
    for &id in self.registry.order() {
      if let Some(button) = self.registry.button(id) {
        if !apps.contains(&button.app_id) {
          apps.push(button.app_id.clone());
        }
      }
    }

    for app_id in apps {
      let buttons = self.registry.find_buttons_for_app(&app_id).to_vec();
      let Some((_, later)) = buttons.split_first() else {
        continue;
      };

      for &from in later {
        let Some(button) = self.registry.button(from) else {
          continue;
        };
        let app = button.app.clone();
        let windows = button.windows.clone();

        for window in windows {
          self.registry.detach_window(from, window.id());
          let workspace = window.info().and_then(|info| info.workspace);
          let to = match self.resolve_target(&app_id, workspace) {
            Some(to) => to,
            None => self.registry.add_button(app.clone()),
          };
          self.registry.attach_window(to, window);
        }
      }

      for &from in later {
        let emptied = self.registry.button(from).is_some_and(|b| b.windows.is_empty());
        if emptied && !self.registry.is_pinned(from) {
          self.registry.remove_button(from);
        }
      }
    }

    self.reconcile();
  }

  /// Split every multi-window button: the current window (or the first
  /// window) stays, every other window gets a fresh button.
  pub(crate) fn ungroup_pass(&mut self) {
    let active = self.registry.active_workspace();
    let mut pending: VecDeque<ButtonId> = self.registry.order().iter().copied().collect();

    while let Some(id) = pending.pop_front() {
      let Some(button) = self.registry.button(id) else {
        continue;
      };
      if button.windows.len() <= 1 {
        continue;
      }

      let keep = visibility::compute_current_window(&button.windows, active)
        .or_else(|| button.windows.first().map(WindowHandle::id));
      let app = button.app.clone();
      let others: Vec<S::Window> = button
        .windows
        .iter()
        .filter(|w| Some(w.id()) != keep)
        .cloned()
        .collect();

      for window in others {
        self.registry.detach_window(id, window.id());
        let fresh = self.registry.add_button(app.clone());
        self.registry.attach_window(fresh, window);
        pending.push_back(fresh);
      }
    }

    self.reconcile();
  }
}
