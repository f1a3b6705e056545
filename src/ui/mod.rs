//! Terminal host for the picker.
//!
//! [`run`] owns the terminal for one picker session: it draws the dialog with
//! ratatui, feeds input to the [`PickerController`](crate::picker::PickerController)
//! and pumps deferred filtering between input polls. The session ends when the
//! picker closes itself after a selection or a cancel.

mod actions;
mod config;
mod host;
pub mod input;
mod render;
mod runtime;
mod state;
mod theme;

pub use config::{DEFAULT_ROW_HEIGHT, UiOptions};
pub use host::{PickerOutcome, TerminalHost};
pub use runtime::run;
pub use state::App;
pub use theme::Theme;
