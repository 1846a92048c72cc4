/*!
Button operations for the Registry.

CRUD: `add_button`, `remove_button`
Windows: `attach_window`, `detach_window`
Query: `find_button_for_window`, `find_buttons_for_app`, `find_first_button_for_app`

## Ownership

`window_owner` is the only place that decides which button holds a window.
`attach_window` refuses a window that already has a different owner, so a
window can never end up on two buttons.
*/

use super::{CachedButton, Registry};
use crate::core::handlers::Signal;
use crate::core::subscriptions::SubscriptionList;
use crate::hover::HoverDelay;
use crate::platform::{AppHandle, Shell, WindowHandle};
use crate::types::{AppId, ButtonId, Event, WindowId, WindowProperty};

impl<S: Shell> Registry<S> {
  /// Create an empty button for `app` at the end of the order.
  /// Emits `ButtonCreated`.
  pub(crate) fn add_button(&mut self, app: S::App) -> ButtonId {
    let id = ButtonId(self.next_button_id);
    self.next_button_id += 1;

    let app_id = app.id();
    self.order.append(id, &app_id);
    self.buttons.insert(
      id,
      CachedButton {
        id,
        app,
        app_id,
        windows: Vec::new(),
        current_window: None,
        subscriptions: SubscriptionList::new(),
        hover: HoverDelay::new(),
        preview: None,
        last_view: None,
      },
    );

    if let Some(view) = crate::core::adapters::build_view(self, id) {
      if let Some(button) = self.buttons.get_mut(&id) {
        button.last_view = Some(view.clone());
      }
      self.emit(Event::ButtonCreated { button: view });
    }
    id
  }

  /// Destroy a button. Unknown ids are ignored.
  ///
  /// The button must not hold windows any more. Teardown order: pending
  /// delays, then subscriptions (newest first), then window references.
  /// Emits `PreviewClosed` if its preview was open, then `ButtonDestroyed`.
  pub(crate) fn remove_button(&mut self, id: ButtonId) {
    let Some(mut button) = self.buttons.remove(&id) else {
      return;
    };

    debug_assert!(
      button.windows.is_empty(),
      "button {id} destroyed while holding windows"
    );
    if !button.windows.is_empty() {
      log::error!(
        "remove_button: button {id} still holds {} window(s). This is a bug.",
        button.windows.len()
      );
    }

    button.hover.cancel(self.scheduler.as_ref());
    button.subscriptions.dispose();
    for window in button.windows.drain(..) {
      self.window_owner.remove(&window.id());
    }
    self.order.remove(id, &button.app_id);

    let preview_open = button.preview.is_some();
    drop(button);

    if preview_open {
      self.emit(Event::PreviewClosed { button_id: id });
    }
    self.emit(Event::ButtonDestroyed { button_id: id });
  }

  /// Attach a window and subscribe to its property notifications.
  ///
  /// Attaching a window to the button that already holds it is a no-op.
  /// Returns false if the button is unknown or the window belongs to
  /// another button.
  pub(crate) fn attach_window(&mut self, id: ButtonId, window: S::Window) -> bool {
    let window_id = window.id();

    if let Some(&owner) = self.window_owner.get(&window_id) {
      debug_assert_eq!(owner, id, "window {window_id} already attached to another button");
      if owner != id {
        log::error!(
          "attach_window: window {window_id} already attached to button {owner}, \
           cannot attach to {id}. This is a bug."
        );
        return false;
      }
      return true;
    }

    let inbox = self.inbox.clone();
    let Some(button) = self.buttons.get_mut(&id) else {
      log::debug!("attach_window: button {id} not found");
      return false;
    };

    for property in WindowProperty::WATCHED {
      let inbox = inbox.clone();
      let subscription = window.on_property_changed(
        property,
        Box::new(move || inbox.push(Signal::WindowChanged(window_id))),
      );
      button.subscriptions.push_for(window_id, subscription);
    }
    button.windows.push(window);
    self.window_owner.insert(window_id, id);

    self.update_current_window(id);
    true
  }

  /// Detach a window and release its subscriptions.
  ///
  /// Returns whether the button is now empty, or None if the window was
  /// not attached to this button.
  pub(crate) fn detach_window(&mut self, id: ButtonId, window_id: WindowId) -> Option<bool> {
    let button = self.buttons.get_mut(&id)?;
    let index = button.windows.iter().position(|w| w.id() == window_id)?;

    button.windows.remove(index);
    button.subscriptions.release_for(window_id);
    let empty = button.windows.is_empty();
    self.window_owner.remove(&window_id);

    self.update_current_window(id);
    Some(empty)
  }

  pub(crate) fn find_button_for_window(&self, window_id: WindowId) -> Option<ButtonId> {
    self.window_owner.get(&window_id).copied()
  }

  /// Buttons of an app, earliest-created first.
  pub(crate) fn find_buttons_for_app(&self, app_id: &AppId) -> &[ButtonId] {
    self.order.buttons_for_app(app_id)
  }

  pub(crate) fn find_first_button_for_app(&self, app_id: &AppId) -> Option<ButtonId> {
    self.find_buttons_for_app(app_id).first().copied()
  }

  /// Number of windows attached across all buttons.
  pub(crate) fn window_count(&self) -> usize {
    self.window_owner.len()
  }
}
