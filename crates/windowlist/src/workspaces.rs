/*!
Workspace watching.

Tracks the shell's dynamic set of workspaces and keeps one window-added and
one window-removed subscription per workspace. Consumers don't interact with
this directly - the watcher is owned by `WindowList`.

Whenever the workspace set changes, the watcher drops every subscription,
re-enumerates the workspaces and subscribes again. Windows that appeared
while no subscription was live are reported back as a catch-up list.
*/

use crate::core::handlers::{Inbox, Signal};
use crate::core::subscriptions::SubscriptionList;
use crate::platform::{Shell, WorkspaceHandle};

/// Per-workspace window lifecycle subscriptions.
pub(crate) struct WorkspaceWatcher<S: Shell> {
  workspaces: Vec<S::Workspace>,
  subscriptions: SubscriptionList,
}

impl<S: Shell> std::fmt::Debug for WorkspaceWatcher<S> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WorkspaceWatcher")
      .field("workspaces", &self.workspaces.len())
      .field("subscriptions", &self.subscriptions.len())
      .finish()
  }
}

impl<S: Shell> WorkspaceWatcher<S> {
  pub(crate) fn new() -> Self {
    Self {
      workspaces: Vec::new(),
      subscriptions: SubscriptionList::new(),
    }
  }

  /// Resubscribe to every workspace of `shell`.
  ///
  /// Returns every window currently listed on any workspace together with
  /// the index of the workspace that listed it.
  pub(crate) fn rebuild(&mut self, shell: &S, inbox: &Inbox<S::Window>) -> Vec<(u32, S::Window)> {
    self.clear();
    self.workspaces = shell.workspaces();

    let mut windows = Vec::new();
    for workspace in &self.workspaces {
      let index = workspace.index();
      windows.extend(workspace.list_windows().into_iter().map(|w| (index, w)));

      let added = inbox.clone();
      self.subscriptions.push(workspace.on_window_added(Box::new(move |window| {
        added.push(Signal::WindowAdded {
          workspace: index,
          window: window.clone(),
        });
      })));

      let removed = inbox.clone();
      self.subscriptions.push(workspace.on_window_removed(Box::new(move |window| {
        removed.push(Signal::WindowRemoved {
          workspace: index,
          window: window.clone(),
        });
      })));
    }

    log::debug!(
      "Watching {} workspace(s), {} window(s) listed",
      self.workspace_count(),
      windows.len()
    );
    windows
  }

  /// Drop every workspace subscription.
  pub(crate) fn clear(&mut self) {
    self.subscriptions.dispose();
    self.workspaces.clear();
  }

  pub(crate) fn workspace_count(&self) -> usize {
    self.workspaces.len()
  }
}
