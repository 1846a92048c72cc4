/*!
Owned subscription lists.

Every subscription the engine acquires (per-window property notifications,
per-workspace lifecycle notifications, shell and settings notifications)
lives in a [`SubscriptionList`]. Disposal releases in reverse acquisition
order.
*/

use crate::platform::Subscription;
use crate::types::WindowId;

/// Subscriptions in acquisition order, optionally tagged with the window
/// they belong to.
#[derive(Debug, Default)]
pub(crate) struct SubscriptionList {
  entries: Vec<(Option<WindowId>, Subscription)>,
}

impl SubscriptionList {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Keep a subscription that is not tied to a window.
  pub(crate) fn push(&mut self, subscription: Subscription) {
    self.entries.push((None, subscription));
  }

  /// Keep a subscription owned by `window`.
  pub(crate) fn push_for(&mut self, window: WindowId, subscription: Subscription) {
    self.entries.push((Some(window), subscription));
  }

  /// Release every subscription owned by `window`, newest first.
  pub(crate) fn release_for(&mut self, window: WindowId) {
    let (released, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
      .into_iter()
      .partition(|(owner, _)| *owner == Some(window));
    self.entries = kept;
    for (_, subscription) in released.into_iter().rev() {
      subscription.unsubscribe();
    }
  }

  /// Release everything, newest first.
  pub(crate) fn dispose(&mut self) {
    while let Some((_, subscription)) = self.entries.pop() {
      subscription.unsubscribe();
    }
  }

  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }
}

impl Drop for SubscriptionList {
  fn drop(&mut self) {
    self.dispose();
  }
}
