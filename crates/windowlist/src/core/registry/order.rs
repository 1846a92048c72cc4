/*!
Button ordering.

Single source of truth for the visual order of buttons and for which
buttons belong to which application.

## Invariants

1. **Same membership**: a button is in the visual order iff it is in
   exactly one app's button list.
2. **Creation order**: each app's button list is sorted by `ButtonId`, so
   its first entry is the earliest-created button of the app.
3. **No duplicates**: a button appears at most once in the visual order.
*/

use crate::types::{AppId, ButtonId};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct ButtonOrder {
  visual: Vec<ButtonId>,
  by_app: HashMap<AppId, Vec<ButtonId>>,
}

impl ButtonOrder {
  pub(super) fn new() -> Self {
    Self::default()
  }

  /// Visual order, first to last.
  pub(super) fn as_slice(&self) -> &[ButtonId] {
    &self.visual
  }

  pub(super) fn position(&self, id: ButtonId) -> Option<usize> {
    self.visual.iter().position(|&b| b == id)
  }

  /// Buttons of an app, earliest-created first.
  pub(super) fn buttons_for_app(&self, app: &AppId) -> &[ButtonId] {
    self.by_app.get(app).map_or(&[], Vec::as_slice)
  }

  /// Append a new button to the end of the visual order.
  ///
  /// Ids must be fresh; a known id is rejected.
  pub(super) fn append(&mut self, id: ButtonId, app: &AppId) {
    if self.visual.contains(&id) {
      log::error!("ButtonOrder: button {id} appended twice");
      return;
    }
    self.visual.push(id);
    let buttons = self.by_app.entry(app.clone()).or_default();
    let at = buttons.partition_point(|&b| b < id);
    buttons.insert(at, id);
  }

  /// Remove a button. Returns its former visual position.
  pub(super) fn remove(&mut self, id: ButtonId, app: &AppId) -> Option<usize> {
    let position = self.position(id)?;
    self.visual.remove(position);
    if let Some(buttons) = self.by_app.get_mut(app) {
      buttons.retain(|&b| b != id);
      if buttons.is_empty() {
        self.by_app.remove(app);
      }
    }
    Some(position)
  }

  /// Move a button to `position`, counted after taking it out of the order
  /// (clamped to the end). Returns whether the order changed.
  pub(super) fn move_to(&mut self, id: ButtonId, position: usize) -> bool {
    let Some(current) = self.position(id) else {
      return false;
    };
    self.visual.remove(current);
    let position = position.min(self.visual.len());
    self.visual.insert(position, id);
    current != position
  }

  /// Replace the visual order. Must be a permutation of the current order.
  /// Returns whether the order changed.
  pub(super) fn set(&mut self, order: Vec<ButtonId>) -> bool {
    let mut sorted_new = order.clone();
    let mut sorted_old = self.visual.clone();
    sorted_new.sort_unstable();
    sorted_old.sort_unstable();
    if sorted_new != sorted_old {
      log::error!("ButtonOrder: rejected order {order:?}, not a permutation of the current order");
      return false;
    }
    if order == self.visual {
      return false;
    }
    self.visual = order;
    true
  }
}
