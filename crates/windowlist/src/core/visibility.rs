/*!
Visibility policy: which buttons show, which window each button
represents, focus and urgency.

Everything here is a pure function of the live window state and the
active workspace. Nothing is cached; callers recompute whenever something
may have changed.
*/

use crate::platform::WindowHandle;
use crate::types::{WindowId, WindowInfo};

/// Derived state of one button, computed in a fixed order: visibility,
/// current window, focus, urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ButtonState {
  pub(crate) visible: bool,
  pub(crate) current_window: Option<WindowId>,
  pub(crate) focused: bool,
  pub(crate) urgent: bool,
  /// Windows on the active workspace.
  pub(crate) window_count: usize,
}

/// Whether a window shows up on workspace `index` (its own or all of them).
pub(crate) fn on_workspace(info: &WindowInfo, index: u32) -> bool {
  info.is_on_workspace(index)
}

/// Windows shown on workspace `index`, in attach order. Stale handles are skipped.
pub(crate) fn windows_on_workspace<W: WindowHandle>(windows: &[W], index: u32) -> Vec<&W> {
  windows
    .iter()
    .filter(|w| w.info().is_some_and(|info| on_workspace(&info, index)))
    .collect()
}

pub(crate) fn has_windows_on_workspace<W: WindowHandle>(windows: &[W], index: u32) -> bool {
  windows
    .iter()
    .any(|w| w.info().is_some_and(|info| on_workspace(&info, index)))
}

pub(crate) fn compute_visible<W: WindowHandle>(windows: &[W], active: u32, pinned: bool) -> bool {
  pinned || has_windows_on_workspace(windows, active)
}

/// The active-workspace window with the latest user activity.
/// Ties go to the earliest attached window.
pub(crate) fn compute_current_window<W: WindowHandle>(windows: &[W], active: u32) -> Option<WindowId> {
  let mut best: Option<(u64, WindowId)> = None;
  for window in windows {
    let Some(info) = window.info() else {
      continue;
    };
    if !on_workspace(&info, active) {
      continue;
    }
    if best.is_none_or(|(time, _)| info.user_time > time) {
      best = Some((info.user_time, window.id()));
    }
  }
  best.map(|(_, id)| id)
}

/// A window has focus if it or one of its transients is focused.
pub(crate) fn has_focus<W: WindowHandle>(window: &W) -> bool {
  if window.info().is_some_and(|info| info.focused) {
    return true;
  }
  let mut focused = false;
  window.for_each_transient(&mut |transient| {
    focused = has_focus(transient);
    !focused
  });
  focused
}

pub(crate) fn compute_focus<W: WindowHandle>(windows: &[W], active: u32) -> bool {
  windows_on_workspace(windows, active)
    .into_iter()
    .any(has_focus)
}

pub(crate) fn compute_urgent<W: WindowHandle>(windows: &[W], active: u32) -> bool {
  windows.iter().any(|w| {
    w.info()
      .is_some_and(|info| on_workspace(&info, active) && info.wants_attention())
  })
}

pub(crate) fn compute_state<W: WindowHandle>(windows: &[W], active: u32, pinned: bool) -> ButtonState {
  let visible = compute_visible(windows, active, pinned);
  let current_window = compute_current_window(windows, active);
  let focused = compute_focus(windows, active);
  let urgent = compute_urgent(windows, active);
  ButtonState {
    visible,
    current_window,
    focused,
    urgent,
    window_count: windows_on_workspace(windows, active).len(),
  }
}
