//! Immutable, sorted index of the icons the picker can offer.
//!
//! The index is built exactly once from an [`AssetSource`] and then shared
//! read-only (usually behind an `Arc`) by every filter and render pass.

mod name;
mod source;

use std::cmp::Ordering;
use std::path::PathBuf;

use thiserror::Error;

pub use source::{
	AssetSource, BundledAssets, DEFAULT_EXTENSIONS, DirectoryAssets, DiscoveredAsset, IconResource,
	MemoryAssets,
};

/// Failures encountered while enumerating icon resources.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The configured asset directory does not exist.
	#[error("asset directory '{}' does not exist", root.display())]
	MissingRoot { root: PathBuf },

	/// Discovery finished without finding a single icon.
	#[error("no icon assets were found")]
	Empty,
}

/// A single selectable icon.
#[derive(Debug, Clone)]
pub struct Icon {
	name: String,
	search_key: String,
	media_type: Option<&'static str>,
	resource: IconResource,
}

impl Icon {
	/// Build an icon from its storage path, deriving the display name and MIME type.
	pub fn new(path: &str, resource: IconResource) -> Self {
		let name = name::icon_name(path);
		let search_key = name.to_lowercase();
		let media_type = name::extension(path)
			.as_deref()
			.and_then(name::media_type_for);
		Self {
			name,
			search_key,
			media_type,
			resource,
		}
	}

	/// Display name, also used as the search key.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Lowercase form of the name used for case-insensitive matching.
	pub fn search_key(&self) -> &str {
		&self.search_key
	}

	/// MIME type of the underlying resource, when recognised.
	pub fn media_type(&self) -> Option<&'static str> {
		self.media_type
	}

	pub fn resource(&self) -> &IconResource {
		&self.resource
	}
}

/// The full catalog, sorted by case-insensitive name.
#[derive(Debug, Default)]
pub struct AssetIndex {
	icons: Vec<Icon>,
}

impl AssetIndex {
	/// Enumerate `source` and build the sorted index.
	pub fn build(source: &dyn AssetSource) -> Result<Self, CatalogError> {
		let assets = source.discover()?;
		Ok(Self::from_assets(assets))
	}

	/// Like [`AssetIndex::build`], but degrade to an empty index when discovery fails.
	///
	/// An empty index is a valid picker state: the user simply sees the
	/// "no results" message.
	pub fn build_or_empty(source: &dyn AssetSource) -> Self {
		match Self::build(source) {
			Ok(index) => {
				log::info!("icon catalog ready with {} entries", index.len());
				index
			}
			Err(err) => {
				log::error!("icon catalog unavailable: {err}");
				Self::default()
			}
		}
	}

	/// Sort already discovered assets into an index.
	pub fn from_assets(assets: impl IntoIterator<Item = DiscoveredAsset>) -> Self {
		let mut keyed: Vec<(String, usize, Icon)> = assets
			.into_iter()
			.enumerate()
			.map(|(order, asset)| {
				let icon = Icon::new(&asset.path, asset.resource);
				(icon.name.to_uppercase(), order, icon)
			})
			.collect();
		keyed.sort_by(|(a_key, a_order, a_icon), (b_key, b_order, b_icon)| {
			compare_names(a_key, a_icon, b_key, b_icon).then_with(|| a_order.cmp(b_order))
		});

		Self {
			icons: keyed.into_iter().map(|(_, _, icon)| icon).collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.icons.len()
	}

	pub fn is_empty(&self) -> bool {
		self.icons.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Icon> {
		self.icons.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Icon> {
		self.icons.iter()
	}

	pub fn as_slice(&self) -> &[Icon] {
		&self.icons
	}

	/// Names in index order.
	pub fn names(&self) -> Vec<&str> {
		self.icons.iter().map(Icon::name).collect()
	}
}

impl<'a> IntoIterator for &'a AssetIndex {
	type Item = &'a Icon;
	type IntoIter = std::slice::Iter<'a, Icon>;

	fn into_iter(self) -> Self::IntoIter {
		self.icons.iter()
	}
}

/// Case-insensitive ascending order. Names that fold to the same key fall
/// back to the exact name; callers break the remaining ties by discovery
/// order, so the result never depends on sort stability.
fn compare_names(a_key: &str, a: &Icon, b_key: &str, b: &Icon) -> Ordering {
	a_key.cmp(b_key).then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn memory(names: &[&str]) -> MemoryAssets {
		names.iter().fold(MemoryAssets::new(), |assets, name| {
			assets.with(format!("assets/{name}.svg"), b"<svg/>".to_vec())
		})
	}

	#[test]
	fn sorts_case_insensitively() {
		let index = AssetIndex::build(&memory(&["Cherry", "banana", "Apple"])).expect("index");
		assert_eq!(index.names(), vec!["Apple", "banana", "Cherry"]);
	}

	#[test]
	fn already_sorted_input_is_preserved() {
		let index = AssetIndex::build(&memory(&["Apple", "banana", "Cherry"])).expect("index");
		assert_eq!(index.names(), vec!["Apple", "banana", "Cherry"]);
	}

	#[test]
	fn case_folded_ties_are_deterministic() {
		let forward = AssetIndex::build(&memory(&["star", "Star", "STAR"])).expect("index");
		let reverse = AssetIndex::build(&memory(&["STAR", "Star", "star"])).expect("index");
		assert_eq!(forward.names(), vec!["STAR", "Star", "star"]);
		assert_eq!(forward.names(), reverse.names());
	}

	#[test]
	fn identical_names_keep_discovery_order() {
		let assets = MemoryAssets::new()
			.with("one/Dup.svg", b"first".to_vec())
			.with("two/Dup.svg", b"second".to_vec());
		let index = AssetIndex::build(&assets).expect("index");
		let contents: Vec<_> = index
			.iter()
			.map(|icon| icon.resource().read().expect("read").into_owned())
			.collect();
		assert_eq!(contents, vec![b"first".to_vec(), b"second".to_vec()]);
	}

	#[test]
	fn icons_carry_search_key_and_media_type() {
		let index = AssetIndex::build(&memory(&["Credit%20Card"])).expect("index");
		let icon = index.get(0).expect("icon");
		assert_eq!(icon.name(), "Credit Card");
		assert_eq!(icon.search_key(), "credit card");
		assert_eq!(icon.media_type(), Some("image/svg+xml"));
	}

	#[test]
	fn failed_discovery_degrades_to_empty_index() {
		let temp = tempfile::tempdir().expect("tempdir");
		let source = DirectoryAssets::new(temp.path().join("missing"));
		assert!(AssetIndex::build(&source).is_err());
		assert!(AssetIndex::build_or_empty(&source).is_empty());
	}

	#[test]
	fn bundled_catalog_names() {
		let index = AssetIndex::build(&BundledAssets).expect("bundled index");
		insta::assert_snapshot!("bundled_catalog_names", index.names().join("\n"));
	}
}
