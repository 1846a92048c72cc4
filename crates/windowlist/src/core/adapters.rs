/*!
Adapters for converting registry data to public API types.
*/

use super::registry::Registry;
use super::visibility;
use crate::platform::{AppHandle, Shell, WindowHandle};
use crate::types::{ButtonId, ButtonView, CaptionType, DisplayCaption, PreviewItem, WindowInfo};

const UNKNOWN_APP: &str = "?";

/// Build the view of a button from live window state.
pub(crate) fn build_view<S: Shell>(registry: &Registry<S>, id: ButtonId) -> Option<ButtonView> {
  let button = registry.button(id)?;
  let config = &registry.config;
  let pinned = registry.is_pinned(id);
  let state = visibility::compute_state(&button.windows, registry.active_workspace(), pinned);

  let current: Option<WindowInfo> = state
    .current_window
    .and_then(|wid| button.window(wid))
    .and_then(WindowHandle::info);
  let minimized = current.as_ref().is_some_and(|info| info.minimized);

  let app_name = button.app.name().filter(|name| !name.is_empty());
  let label = caption(config.caption_type, current.as_ref(), app_name.as_deref());
  let label = if minimized { format!("[{label}]") } else { label };

  let caption_visible = match config.display_caption_for {
    DisplayCaption::No => false,
    DisplayCaption::All => true,
    DisplayCaption::Running => state.current_window.is_some(),
    DisplayCaption::Focused => state.focused,
  };

  let number = if config.group_windows && config.display_number.shows(state.window_count) {
    state.window_count.to_string()
  } else {
    String::new()
  };

  let tooltip = (state.window_count == 0)
    .then(|| app_name.clone().unwrap_or_else(|| UNKNOWN_APP.to_owned()));

  Some(ButtonView {
    id: button.id,
    app_id: button.app_id.clone(),
    app_name: app_name.unwrap_or_else(|| UNKNOWN_APP.to_owned()),
    icon_name: button.app.icon_name(),
    label,
    caption_visible,
    label_width: config.label_width,
    number,
    visible: state.visible,
    running: state.current_window.is_some(),
    focused: state.focused,
    urgent: state.urgent,
    minimized,
    pinned,
    window_count: state.window_count,
    current_window: state.current_window,
    tooltip,
  })
}

/// Caption text: the window title when asked for and available, else the app name.
fn caption(kind: CaptionType, current: Option<&WindowInfo>, app_name: Option<&str>) -> String {
  let title = match kind {
    CaptionType::Title => current.and_then(|info| info.title.as_deref()),
    CaptionType::Name => None,
  };
  non_empty(title).or_else(|| non_empty(app_name)).unwrap_or(UNKNOWN_APP).to_owned()
}

fn non_empty(text: Option<&str>) -> Option<&str> {
  text.filter(|t| !t.is_empty())
}

/// Preview menu entries: the button's windows on the active workspace.
pub(crate) fn build_preview_items<S: Shell>(registry: &Registry<S>, id: ButtonId) -> Vec<PreviewItem> {
  let Some(button) = registry.button(id) else {
    return Vec::new();
  };
  let app_name = button.app.name().filter(|name| !name.is_empty());
  button
    .windows_on_workspace(registry.active_workspace())
    .into_iter()
    .filter_map(|w| {
      let info = w.info()?;
      Some(PreviewItem {
        window_id: w.id(),
        title: info
          .title
          .filter(|title| !title.is_empty())
          .or_else(|| app_name.clone())
          .unwrap_or_else(|| UNKNOWN_APP.to_owned()),
      })
    })
    .collect()
}
