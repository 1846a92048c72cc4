/*!
Pinning policy.

The pin list (`pinned-apps`) decides which apps keep a button without
windows and in which relative order pinned buttons appear. Every write to
the pin list goes through the settings store; while the window list is
writing, a [`PinGuard`] is held so that the store's change notification
for our own write is discarded and nested reconciles are skipped.
*/

use std::cell::Cell;
use std::rc::Rc;

use super::WindowList;
use crate::platform::Shell;
use crate::types::{AppId, ButtonId, PinList, SettingKey, WindowListError, WindowListResult};

/// Reentrancy flag shared with the `pinned-apps` settings listener.
#[derive(Debug, Clone, Default)]
pub(crate) struct PinGuard(Rc<Cell<bool>>);

impl PinGuard {
  pub(crate) fn is_pinning(&self) -> bool {
    self.0.get()
  }

  /// Set the flag for the lifetime of the returned scope.
  /// None if it is already set.
  pub(crate) fn enter(&self) -> Option<PinScope> {
    if self.0.get() {
      return None;
    }
    self.0.set(true);
    Some(PinScope(Rc::clone(&self.0)))
  }
}

/// Clears the [`PinGuard`] flag on drop.
#[derive(Debug)]
pub(crate) struct PinScope(Rc<Cell<bool>>);

impl Drop for PinScope {
  fn drop(&mut self) {
    self.0.set(false);
  }
}

impl<S: Shell> WindowList<S> {
  /// Pin a button's app. No-op if the app is already pinned.
  ///
  /// The app is inserted into the pin list right after the nearest pinned
  /// button to the left of this button, or first if there is none.
  pub fn pin(&mut self, id: ButtonId) -> WindowListResult<()> {
    let app_id = self.app_of(id)?;
    if self.registry.config.pinned_apps.contains(&app_id) {
      return Ok(());
    }
    self.pin_at_position(id);
    Ok(())
  }

  /// Unpin a button's app. A button left without windows goes away.
  pub fn unpin(&mut self, id: ButtonId) -> WindowListResult<()> {
    let app_id = self.app_of(id)?;
    let Some(_scope) = self.pin_guard.enter() else {
      log::trace!("unpin: already pinning, skipped");
      return Ok(());
    };

    let mut pins = self.registry.config.pinned_apps.clone();
    if pins.remove(&app_id) {
      self.store_pins(pins);
    }
    self.reconcile_pins();
    Ok(())
  }

  /// Bring buttons in line with the pin list.
  ///
  /// Every installed pinned app gets a button, pinned buttons take the
  /// pinned slots in pin list order, and buttons that are neither pinned nor
  /// hold windows are destroyed. Skipped while a pin operation is running.
  pub fn reconcile(&mut self) {
    let Some(_scope) = self.pin_guard.enter() else {
      log::trace!("reconcile: already pinning, skipped");
      return;
    };
    self.reconcile_pins();
  }

  /// Finish a drag of one of our buttons: move it to `position` (counted
  /// after taking it out of the order). A pinned button is re-pinned at its
  /// new place.
  pub fn drop_button(&mut self, id: ButtonId, position: usize) -> WindowListResult<()> {
    if self.registry.button(id).is_none() {
      return Err(WindowListError::ButtonNotFound(id));
    }
    self.registry.move_button(id, position);
    if self.registry.is_pinned(id) {
      self.pin_at_position(id);
    }
    self.refresh_views();
    Ok(())
  }

  /// Finish a drag of an application from outside (a launcher or menu):
  /// give it a button if needed, move it to `position` and pin it there.
  pub fn drop_app(&mut self, app_id: &AppId, position: usize) -> WindowListResult<ButtonId> {
    let id = match self.registry.find_first_button_for_app(app_id) {
      Some(id) => id,
      None => {
        let app = self
          .shell
          .lookup_app(app_id)
          .ok_or_else(|| WindowListError::AppNotFound(app_id.clone()))?;
        self.registry.add_button(app)
      }
    };
    self.registry.move_button(id, position);
    self.pin_at_position(id);
    self.refresh_views();
    Ok(id)
  }

  fn app_of(&self, id: ButtonId) -> WindowListResult<AppId> {
    self
      .registry
      .button(id)
      .map(|b| b.app_id.clone())
      .ok_or(WindowListError::ButtonNotFound(id))
  }

  /// (Re)insert a button's app into the pin list according to where the
  /// button currently sits.
  fn pin_at_position(&mut self, id: ButtonId) {
    let Ok(app_id) = self.app_of(id) else {
      return;
    };
    let Some(_scope) = self.pin_guard.enter() else {
      log::trace!("pin: already pinning, skipped");
      return;
    };

    let mut pins = self.registry.config.pinned_apps.clone();
    pins.remove(&app_id);
    let index = self.pin_index(id, &pins);
    pins.insert(index, app_id);
    self.store_pins(pins);
    self.reconcile_pins();
  }

  /// Pin list index for a button: right after the app of the nearest
  /// pinned button before it in the visual order, else 0.
  fn pin_index(&self, id: ButtonId, pins: &PinList) -> usize {
    let Some(position) = self.registry.position(id) else {
      return 0;
    };
    self
      .registry
      .order()
      .iter()
      .take(position)
      .rev()
      .find_map(|&before| {
        let button = self.registry.button(before)?;
        let is_first = self.registry.find_first_button_for_app(&button.app_id) == Some(before);
        if !is_first {
          return None;
        }
        pins.position(&button.app_id).map(|p| p + 1)
      })
      .unwrap_or(0)
  }

  /// Update the local snapshot and write the pin list to the store.
  fn store_pins(&mut self, pins: PinList) {
    let value = pins.to_value();
    self.registry.config.pinned_apps = pins;
    self.persist(SettingKey::PinnedApps, value);
  }

  /// Reconcile body. Callers hold the pin guard.
  fn reconcile_pins(&mut self) {
    if self.registry.config.display_pinned {
      let pinned: Vec<AppId> = self.registry.config.pinned_apps.ids().to_vec();
      for app_id in pinned {
        if self.registry.find_first_button_for_app(&app_id).is_some() {
          continue;
        }
        match self.shell.lookup_app(&app_id) {
          Some(app) => {
            self.registry.add_button(app);
          }
          None => log::debug!("reconcile: pinned app {app_id} not found, skipping"),
        }
      }
    }

    self.place_pinned_buttons();

    let unused: Vec<ButtonId> = self
      .registry
      .order()
      .iter()
      .copied()
      .filter(|&id| {
        !self.registry.is_pinned(id)
          && self.registry.button(id).is_some_and(|b| b.windows.is_empty())
      })
      .collect();
    for id in unused {
      self.registry.remove_button(id);
    }

    self.refresh_views();
  }

  /// Reorder pinned buttons among the slots they occupy, by pin list position.
  fn place_pinned_buttons(&mut self) {
    let order = self.registry.order().to_vec();
    let pins = &self.registry.config.pinned_apps;

    let mut pinned: Vec<(usize, ButtonId)> = order
      .iter()
      .copied()
      .filter(|&id| self.registry.is_pinned(id))
      .filter_map(|id| {
        let app_id = &self.registry.button(id)?.app_id;
        Some((pins.position(app_id)?, id))
      })
      .collect();
    pinned.sort_by_key(|&(pin_position, _)| pin_position);

    let mut sorted = pinned.into_iter().map(|(_, id)| id);
    let placed: Vec<ButtonId> = order
      .iter()
      .map(|&id| {
        if self.registry.is_pinned(id) {
          sorted.next().unwrap_or(id)
        } else {
          id
        }
      })
      .collect();

    self.registry.set_order(placed);
  }
}
