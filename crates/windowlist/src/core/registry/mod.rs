/*!
Registry - the single source of truth for button state.

All fields are private. Mutations go through methods that maintain invariants
and emit events. This guarantees:
- The window owner index is always updated
- Events are always emitted, and only for real changes
- Per-button resources are released when a button goes away

## Module Structure

- `mod.rs` - Registry struct, `CachedButton`, view refresh, pinned state
- `buttons.rs` - Button CRUD, window attach/detach, lookups
- `order.rs` - `ButtonOrder` for the visual order and the app index
*/

mod buttons;
mod order;

use async_broadcast::Sender;
use std::collections::HashMap;
use std::rc::Rc;

use super::handlers::Inbox;
use super::subscriptions::SubscriptionList;
use super::visibility;
use crate::hover::HoverDelay;
use crate::platform::{Scheduler, Shell, WindowHandle};
use crate::settings::Config;
use crate::types::{AppId, ButtonId, ButtonView, Event, PreviewItem, WindowId};
use order::ButtonOrder;

/// Per-button state.
pub(crate) struct CachedButton<S: Shell> {
  pub(crate) id: ButtonId,
  pub(crate) app: S::App,
  pub(crate) app_id: AppId,
  /// Attached windows, in attach order. Never contains duplicates.
  pub(crate) windows: Vec<S::Window>,
  pub(crate) current_window: Option<WindowId>,

  // === Owned resources ===
  /// Property subscriptions of the attached windows, tagged by window.
  pub(crate) subscriptions: SubscriptionList,
  pub(crate) hover: HoverDelay,
  /// Entries of the open preview menu. None while it is closed.
  pub(crate) preview: Option<Vec<PreviewItem>>,

  /// Last view published for this button. Used to suppress duplicate events.
  pub(crate) last_view: Option<ButtonView>,
}

impl<S: Shell> CachedButton<S> {
  pub(crate) fn window(&self, id: WindowId) -> Option<&S::Window> {
    self.windows.iter().find(|w| w.id() == id)
  }

  /// Windows shown on workspace `index`, in attach order.
  pub(crate) fn windows_on_workspace(&self, index: u32) -> Vec<&S::Window> {
    visibility::windows_on_workspace(&self.windows, index)
  }
}

/// Internal state storage with automatic event emission.
pub(crate) struct Registry<S: Shell> {
  // Event emission
  events_tx: Sender<Event>,
  inbox: Inbox<S::Window>,
  scheduler: Rc<dyn Scheduler>,

  /// Settings snapshot the views are derived from.
  pub(crate) config: Config,

  // Primary collection
  pub(super) buttons: HashMap<ButtonId, CachedButton<S>>,

  // Indexes
  /// Window → owning button. A window has at most one owner.
  pub(super) window_owner: HashMap<WindowId, ButtonId>,
  /// Visual order and app → buttons index.
  pub(super) order: ButtonOrder,

  active_workspace: u32,
  next_button_id: u32,
}

impl<S: Shell> Registry<S> {
  pub(crate) fn new(
    events_tx: Sender<Event>,
    inbox: Inbox<S::Window>,
    scheduler: Rc<dyn Scheduler>,
    config: Config,
  ) -> Self {
    Self {
      events_tx,
      inbox,
      scheduler,
      config,
      buttons: HashMap::new(),
      window_owner: HashMap::new(),
      order: ButtonOrder::new(),
      active_workspace: 0,
      next_button_id: 1,
    }
  }

  /// Emit an event.
  pub(crate) fn emit(&self, event: Event) {
    if let Err(e) = self.events_tx.try_broadcast(event) {
      if e.is_full() {
        log::error!(
          "Event channel overflow - events are being dropped. \
           Consider increasing EVENT_CHANNEL_CAPACITY or processing events faster."
        );
      }
    }
  }

  pub(crate) fn inbox(&self) -> &Inbox<S::Window> {
    &self.inbox
  }

  pub(crate) fn scheduler_handle(&self) -> Rc<dyn Scheduler> {
    Rc::clone(&self.scheduler)
  }

  pub(crate) fn button(&self, id: ButtonId) -> Option<&CachedButton<S>> {
    self.buttons.get(&id)
  }

  pub(crate) fn button_mut(&mut self, id: ButtonId) -> Option<&mut CachedButton<S>> {
    self.buttons.get_mut(&id)
  }

  pub(crate) fn button_count(&self) -> usize {
    self.buttons.len()
  }

  /// Buttons in visual order.
  pub(crate) fn order(&self) -> &[ButtonId] {
    self.order.as_slice()
  }

  pub(crate) fn position(&self, id: ButtonId) -> Option<usize> {
    self.order.position(id)
  }

  /// Move a button. Emits `OrderChanged` if the order changed.
  pub(crate) fn move_button(&mut self, id: ButtonId, position: usize) -> bool {
    let changed = self.order.move_to(id, position);
    if changed {
      self.emit_order_changed();
    }
    changed
  }

  /// Replace the visual order. Emits `OrderChanged` if it changed.
  pub(crate) fn set_order(&mut self, order: Vec<ButtonId>) -> bool {
    let changed = self.order.set(order);
    if changed {
      self.emit_order_changed();
    }
    changed
  }

  fn emit_order_changed(&self) {
    self.emit(Event::OrderChanged {
      order: self.order.as_slice().to_vec(),
    });
  }

  pub(crate) const fn active_workspace(&self) -> u32 {
    self.active_workspace
  }

  pub(crate) fn set_active_workspace(&mut self, index: u32) {
    self.active_workspace = index;
  }

  /// Whether a button is the pinned button of its app: pinned apps are
  /// displayed, its app is in the pin list, and it is the app's
  /// earliest-created button.
  pub(crate) fn is_pinned(&self, id: ButtonId) -> bool {
    let Some(button) = self.buttons.get(&id) else {
      return false;
    };
    self.config.display_pinned
      && self.config.pinned_apps.contains(&button.app_id)
      && self.order.buttons_for_app(&button.app_id).first() == Some(&id)
  }

  /// Recompute the current window of a button without publishing.
  pub(super) fn update_current_window(&mut self, id: ButtonId) {
    let active = self.active_workspace;
    if let Some(button) = self.buttons.get_mut(&id) {
      button.current_window = visibility::compute_current_window(&button.windows, active);
    }
  }

  /// Recompute a button's view. Emits `ButtonChanged` if it differs from
  /// the last published one.
  pub(crate) fn refresh_button(&mut self, id: ButtonId) {
    let Some(view) = super::adapters::build_view(self, id) else {
      return;
    };
    let Some(button) = self.buttons.get_mut(&id) else {
      return;
    };
    button.current_window = view.current_window;
    if button.last_view.as_ref() == Some(&view) {
      return;
    }
    button.last_view = Some(view.clone());
    self.emit(Event::ButtonChanged { button: view });
  }

  /// Recompute every button, in visual order.
  pub(crate) fn refresh_all(&mut self) {
    let ids = self.order.as_slice().to_vec();
    for id in ids {
      self.refresh_button(id);
    }
  }
}
