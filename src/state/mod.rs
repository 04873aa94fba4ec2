//! Application state module

mod app_state;
pub mod content;
pub mod forms;
mod navigation;
mod notifications;
pub mod page;
mod reveal;
mod ui_area;

pub use app_state::*;
pub use forms::*;
pub use navigation::*;
pub use notifications::*;
pub use page::{Page, Section, SectionId};
pub use reveal::*;
pub use ui_area::*;
