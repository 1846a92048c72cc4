/*! Core types for the window list. */

#![allow(missing_docs)]

mod error;
mod event;
mod ids;
mod menu;
mod settings;
mod window;

pub use error::{WindowListError, WindowListResult};
pub use event::{ButtonView, Event, PreviewItem};
pub use ids::{AppId, ButtonId, TimerId, WindowId};
pub use menu::{MenuAction, MenuItem, MouseButton};
pub use settings::{CaptionType, DisplayCaption, DisplayNumber, PinList, SettingKey};
pub use window::{WindowInfo, WindowProperty};
