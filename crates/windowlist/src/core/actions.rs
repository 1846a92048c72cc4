/*!
User interaction: clicks, the context menu and the hover preview menu.

Commands act on the shell's windows and applications. Failures are logged
at warn and returned to the caller.
*/

use std::time::Duration;

use super::adapters::build_preview_items;
use super::handlers::Signal;
use super::visibility;
use super::WindowList;
use crate::hover::HoverAction;
use crate::platform::{AppHandle, Shell, WindowHandle};
use crate::types::{
  ButtonId, Event, MenuAction, MenuItem, MouseButton, WindowId, WindowInfo, WindowListError,
  WindowListResult,
};

/// Log and pass through a failed command.
fn logged(command: &'static str, result: WindowListResult<()>) -> WindowListResult<()> {
  if let Err(e) = &result {
    log::warn!("{command} failed: {e}");
  }
  result
}

impl<S: Shell> WindowList<S> {
  /// Handle a click on a button.
  ///
  /// Closes the button's preview menu and cancels its hover delay first.
  /// A right click returns the context menu; other clicks return None.
  pub fn click(&mut self, id: ButtonId, mouse: MouseButton) -> WindowListResult<Option<Vec<MenuItem>>> {
    self.cancel_hover(id)?;
    self.close_preview(id);

    match mouse {
      MouseButton::Left => {
        self.left_click(id)?;
        Ok(None)
      }
      MouseButton::Middle => {
        self.launch(id)?;
        Ok(None)
      }
      MouseButton::Right => self.context_menu(id).map(Some),
    }
  }

  fn left_click(&mut self, id: ButtonId) -> WindowListResult<()> {
    let button = self.registry.button(id).ok_or(WindowListError::ButtonNotFound(id))?;
    let running = button.current_window.is_some();
    let on_workspace: Vec<S::Window> = button
      .windows_on_workspace(self.registry.active_workspace())
      .into_iter()
      .cloned()
      .collect();

    match on_workspace.as_slice() {
      [window] if running => {
        if visibility::has_focus(window) {
          logged("minimize", window.minimize())
        } else {
          logged("activate", window.activate())
        }
      }
      [_, _, ..] if running => {
        self.open_preview(id);
        Ok(())
      }
      _ => self.launch(id),
    }
  }

  /// Start a new instance of the button's app. Emits `AppLaunched`.
  pub fn launch(&mut self, id: ButtonId) -> WindowListResult<()> {
    let button = self.registry.button(id).ok_or(WindowListError::ButtonNotFound(id))?;
    logged("open_new_window", button.app.open_new_window())?;
    self.registry.emit(Event::AppLaunched {
      button_id: id,
      animation_ms: self.registry.config.animation_time_ms,
    });
    Ok(())
  }

  /// Context menu entries for a button, top to bottom.
  pub fn context_menu(&self, id: ButtonId) -> WindowListResult<Vec<MenuItem>> {
    let button = self.registry.button(id).ok_or(WindowListError::ButtonNotFound(id))?;
    let config = &self.registry.config;
    let mut items = vec![MenuItem::new(MenuAction::OpenNewWindow, "Open new window")
      .icon("video-display-symbolic")];

    if config.display_pinned {
      items.push(if config.pinned_apps.contains(&button.app_id) {
        MenuItem::new(MenuAction::Unpin, "Unpin app from window list").icon("starred")
      } else {
        MenuItem::new(MenuAction::Pin, "Pin app to window list").icon("non-starred")
      });
    }

    let current = button
      .current_window
      .and_then(|w| button.window(w))
      .and_then(|w| Some((w, w.info()?)));
    let Some((window, info)) = current else {
      return Ok(items);
    };

    self.push_workspace_items(&mut items, &info);

    let restore_or_minimize = if visibility::has_focus(window) {
      MenuItem::new(MenuAction::Minimize, "Minimize").icon("view-sort-ascending")
    } else {
      MenuItem::new(MenuAction::Restore, "Restore").icon("view-sort-descending")
    };
    items.push(restore_or_minimize.separated());
    items.push(if info.maximized {
      MenuItem::new(MenuAction::Unmaximize, "Unmaximize").icon("view-restore")
    } else {
      MenuItem::new(MenuAction::Maximize, "Maximize").icon("view-fullscreen")
    });

    let on_workspace = button.windows_on_workspace(self.registry.active_workspace()).len();
    if on_workspace > 1 {
      items.push(
        MenuItem::new(MenuAction::CloseOthers, "Close others")
          .icon("application-exit")
          .separated(),
      );
      items.push(MenuItem::new(MenuAction::CloseAll, "Close all").icon("window-close"));
      items.push(MenuItem::new(MenuAction::Close, "Close").icon("edit-delete"));
    } else {
      items.push(MenuItem::new(MenuAction::Close, "Close").icon("edit-delete").separated());
    }

    Ok(items)
  }

  fn push_workspace_items(&self, items: &mut Vec<MenuItem>, info: &WindowInfo) {
    if info.on_all_workspaces {
      items.push(MenuItem::new(MenuAction::Unstick, "Only on this workspace").separated());
      return;
    }
    items.push(MenuItem::new(MenuAction::Stick, "Visible on all workspaces").separated());

    let count = self.shell.workspaces().len();
    if count < 2 {
      return;
    }
    for index in (0..count).filter_map(|i| u32::try_from(i).ok()) {
      if Some(index) != info.workspace {
        let name = self.shell.workspace_name(index);
        items.push(MenuItem::new(MenuAction::MoveToWorkspace(index), name));
      }
    }
  }

  /// Execute a context menu entry.
  pub fn activate_menu_item(&mut self, id: ButtonId, action: MenuAction) -> WindowListResult<()> {
    let button = self.registry.button(id).ok_or(WindowListError::ButtonNotFound(id))?;
    let current = button.current_window.and_then(|w| button.window(w)).cloned();
    let on_workspace: Vec<S::Window> = button
      .windows_on_workspace(self.registry.active_workspace())
      .into_iter()
      .cloned()
      .collect();

    let window = || {
      current.as_ref().ok_or_else(|| WindowListError::CommandFailed {
        command: "menu",
        reason: format!("button {id} has no current window"),
      })
    };

    match action {
      MenuAction::OpenNewWindow => self.launch(id),
      MenuAction::Pin => self.pin(id),
      MenuAction::Unpin => self.unpin(id),
      MenuAction::Stick => logged("stick", window()?.stick()),
      MenuAction::Unstick => logged("unstick", window()?.unstick()),
      MenuAction::MoveToWorkspace(index) => {
        logged("move_to_workspace", window()?.move_to_workspace(index))
      }
      MenuAction::Restore => logged("activate", window()?.activate()),
      MenuAction::Minimize => logged("minimize", window()?.minimize()),
      MenuAction::Maximize => logged("maximize", window()?.maximize()),
      MenuAction::Unmaximize => logged("unmaximize", window()?.unmaximize()),
      MenuAction::CloseOthers => {
        let keep = current
          .as_ref()
          .or_else(|| on_workspace.first())
          .map(WindowHandle::id);
        on_workspace
          .iter()
          .rev()
          .filter(|w| Some(w.id()) != keep)
          .try_for_each(|w| logged("close", w.close()))
      }
      MenuAction::CloseAll => on_workspace
        .iter()
        .rev()
        .try_for_each(|w| logged("close", w.close())),
      MenuAction::Close => logged("close", window()?.close()),
    }
  }

  // === Hover preview ===

  /// The pointer entered a button: open its preview menu after the show delay.
  pub fn pointer_entered(&mut self, id: ButtonId) -> WindowListResult<()> {
    let has_windows = !self
      .registry
      .button(id)
      .ok_or(WindowListError::ButtonNotFound(id))?
      .windows_on_workspace(self.registry.active_workspace())
      .is_empty();
    if !has_windows {
      return self.cancel_hover(id);
    }
    let delay = self.registry.config.preview_timeout_show_ms;
    self.start_hover(id, delay, HoverAction::Open)
  }

  /// The pointer left a button: close its preview menu after the hide delay.
  pub fn pointer_left(&mut self, id: ButtonId) -> WindowListResult<()> {
    let open = self
      .registry
      .button(id)
      .ok_or(WindowListError::ButtonNotFound(id))?
      .preview
      .is_some();
    if !open {
      return self.cancel_hover(id);
    }
    let delay = self.registry.config.preview_timeout_hide_ms;
    self.start_hover(id, delay, HoverAction::Close)
  }

  /// The pointer moved onto the preview menu: keep it open.
  pub fn preview_entered(&mut self, id: ButtonId) -> WindowListResult<()> {
    self.cancel_hover(id)
  }

  /// The pointer left the preview menu: close it after the hide delay.
  pub fn preview_left(&mut self, id: ButtonId) -> WindowListResult<()> {
    let delay = self.registry.config.preview_timeout_hide_ms;
    self.start_hover(id, delay, HoverAction::Close)
  }

  /// Activate a window listed in the preview menu, then close the menu.
  pub fn preview_activate(&mut self, id: ButtonId, window: WindowId) -> WindowListResult<()> {
    let handle = self.preview_window(id, window)?;
    self.close_preview(id);
    logged("activate", handle.activate())
  }

  /// Close a window listed in the preview menu. The menu follows the
  /// window's removal.
  pub fn preview_close(&mut self, id: ButtonId, window: WindowId) -> WindowListResult<()> {
    let handle = self.preview_window(id, window)?;
    logged("close", handle.close())
  }

  fn preview_window(&self, id: ButtonId, window: WindowId) -> WindowListResult<S::Window> {
    let button = self.registry.button(id).ok_or(WindowListError::ButtonNotFound(id))?;
    button
      .window(window)
      .cloned()
      .ok_or(WindowListError::WindowNotFound(window))
  }

  fn start_hover(&mut self, id: ButtonId, delay_ms: u32, action: HoverAction) -> WindowListResult<()> {
    let inbox = self.registry.inbox().clone();
    let scheduler = self.registry.scheduler_handle();
    let button = self
      .registry
      .button_mut(id)
      .ok_or(WindowListError::ButtonNotFound(id))?;
    button.hover.start(
      scheduler.as_ref(),
      Duration::from_millis(u64::from(delay_ms)),
      action,
      move |generation| inbox.push(Signal::HoverTimer { button: id, generation }),
    );
    Ok(())
  }

  fn cancel_hover(&mut self, id: ButtonId) -> WindowListResult<()> {
    let scheduler = self.registry.scheduler_handle();
    let button = self
      .registry
      .button_mut(id)
      .ok_or(WindowListError::ButtonNotFound(id))?;
    button.hover.cancel(scheduler.as_ref());
    Ok(())
  }

  /// Open the preview menu. Emits `PreviewOpened` unless it is already open
  /// or the button has nothing to list.
  pub(crate) fn open_preview(&mut self, id: ButtonId) {
    let items = build_preview_items(&self.registry, id);
    let thumbnails = self.registry.config.hover_preview;
    let Some(button) = self.registry.button_mut(id) else {
      return;
    };
    if button.preview.is_some() || items.is_empty() {
      return;
    }
    button.preview = Some(items.clone());
    self.registry.emit(Event::PreviewOpened {
      button_id: id,
      items,
      thumbnails,
    });
  }

  /// Close the preview menu. Emits `PreviewClosed` if it was open.
  pub(crate) fn close_preview(&mut self, id: ButtonId) {
    let Some(button) = self.registry.button_mut(id) else {
      return;
    };
    if button.preview.take().is_some() {
      self.registry.emit(Event::PreviewClosed { button_id: id });
    }
  }

  /// Follow window changes in every open preview menu. A menu left with
  /// nothing to list closes.
  pub(crate) fn sync_previews(&mut self) {
    let open: Vec<ButtonId> = self
      .registry
      .order()
      .iter()
      .copied()
      .filter(|&id| self.registry.button(id).is_some_and(|b| b.preview.is_some()))
      .collect();

    for id in open {
      let items = build_preview_items(&self.registry, id);
      if items.is_empty() {
        self.close_preview(id);
        continue;
      }
      let Some(button) = self.registry.button_mut(id) else {
        continue;
      };
      if button.preview.as_ref() == Some(&items) {
        continue;
      }
      button.preview = Some(items.clone());
      self.registry.emit(Event::PreviewChanged { button_id: id, items });
    }
  }
}
