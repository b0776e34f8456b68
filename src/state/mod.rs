//! Application state module

mod app_state;
mod completion;
mod document;
pub(crate) mod forms;
pub(crate) mod records;
mod risk;
mod splash_state;

pub use app_state::*;
pub use completion::*;
pub use document::*;
pub use forms::*;
pub use risk::*;
pub use splash_state::*;
