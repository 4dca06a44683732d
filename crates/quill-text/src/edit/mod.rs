//! Caret, selection and scroll state for a single-line editor.

pub mod movement;
mod state;
mod status;

pub use state::{ResolvedLayout, TextEditState};
pub use status::UpdateStatus;
