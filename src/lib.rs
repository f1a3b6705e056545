//! Searchable icon picker with deferred filtering, a windowed grid and
//! data-URI selection output.
//!
//! The pieces compose bottom-up:
//!
//! - [`catalog`] discovers icon assets and builds the sorted [`AssetIndex`].
//! - [`search`] filters the index cooperatively, committing views in
//!   query-recency order.
//! - [`grid`] maps a filtered view onto a fixed-column grid and yields only the
//!   cells inside the viewport.
//! - [`encode`] turns a chosen icon into a base64 data URI off the UI thread.
//! - [`picker`] ties them together behind [`PickerController`] and the
//!   [`PickerHost`] callbacks.
//! - [`ui`] is the bundled terminal host.

pub mod app_dirs;
pub mod catalog;
pub mod encode;
pub mod grid;
pub mod labels;
pub mod logging;
pub mod picker;
pub mod search;
pub mod ui;

pub use catalog::{
	AssetIndex, AssetSource, BundledAssets, CatalogError, DirectoryAssets, Icon, IconResource,
	MemoryAssets,
};
pub use encode::{EncodeError, SelectionResult};
pub use grid::{CellDescriptor, GridGeometry, ViewportWindow, compute_cells};
pub use labels::{Labels, Translate};
pub use picker::{PickerController, PickerHost, PickerState};
pub use search::{FilterOutcome, FilteredView, SearchFilterEngine};
pub use ui::{PickerOutcome, UiOptions, run};
