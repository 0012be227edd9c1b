pub mod input;
pub mod picker;
pub mod render;
pub mod runtime;
pub mod ui;

pub use ui::{App, InputMode, ModalState};
