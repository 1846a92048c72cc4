/*!
Boundary to the hosting desktop shell.

The window list never talks to a window manager, settings backend or main
loop directly; the host hands it implementations of these traits.
*/

mod traits;

pub use traits::{
  AppHandle, Callback, Scheduler, SettingsStore, Shell, Subscription, WindowCallback,
  WindowHandle, WorkspaceHandle,
};
