//! Application state module

mod app_state;
mod dashboard;
mod forms;
mod splash_state;

pub use app_state::*;
pub use dashboard::*;
pub use forms::*;
pub use splash_state::*;
