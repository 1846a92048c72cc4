/*!
Windowlist - taskbar window grouping and view synchronization

The window list keeps one button per application (or per window when
grouping is off), tracks which windows each button holds across
workspaces, keeps pinned applications in place, and publishes a
render-ready [`ButtonView`] for every button whenever something visible
changes.

```ignore
use windowlist::{MemorySettings, MouseButton, WindowList};

// The host implements `Shell` and `Scheduler` for its desktop.
let mut list = WindowList::builder().build(shell, MemorySettings::new(), scheduler);
let mut events = list.subscribe();
list.start();

// Shell notifications are queued; handle them from the main loop.
list.process_pending();
while let Ok(event) = events.try_recv() {
    // draw event
}

// Forward pointer input.
let menu = list.click(button_id, MouseButton::Right)?;

// Stops tracking when dropped.
drop(list);
```
*/

mod core;
mod hover;
mod platform;
mod settings;
mod workspaces;

#[cfg(test)]
mod testing;

mod types;
pub use types::*;

pub use crate::core::{WindowList, WindowListBuilder};
pub use crate::platform::{
  AppHandle, Callback, Scheduler, SettingsStore, Shell, Subscription, WindowCallback,
  WindowHandle, WorkspaceHandle,
};
pub use crate::settings::{Config, MemorySettings};
