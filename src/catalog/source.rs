//! Providers that enumerate the raw icon resources a catalog is built from.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;
use include_dir::{Dir, include_dir};

use super::CatalogError;
use super::name::extension;

static BUNDLED_ICONS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

/// Extensions picked up by [`DirectoryAssets`] unless configured otherwise.
pub const DEFAULT_EXTENSIONS: &[&str] = &["svg"];

/// Opaque handle to the bytes backing an icon.
#[derive(Debug, Clone)]
pub enum IconResource {
	/// Bytes compiled into the binary.
	Embedded(&'static [u8]),
	/// Bytes owned in memory.
	Memory(Arc<[u8]>),
	/// A file read lazily when the icon is encoded.
	File(PathBuf),
}

impl IconResource {
	/// Read the resource contents.
	pub fn read(&self) -> io::Result<Cow<'_, [u8]>> {
		match self {
			Self::Embedded(bytes) => Ok(Cow::Borrowed(*bytes)),
			Self::Memory(bytes) => Ok(Cow::Borrowed(bytes.as_ref())),
			Self::File(path) => fs::read(path).map(Cow::Owned),
		}
	}
}

/// A resource found by an [`AssetSource`], before it becomes an icon.
#[derive(Debug, Clone)]
pub struct DiscoveredAsset {
	/// Storage path the display name is derived from.
	pub path: String,
	/// Handle used to read the bytes later.
	pub resource: IconResource,
}

impl DiscoveredAsset {
	pub fn new(path: impl Into<String>, resource: IconResource) -> Self {
		Self {
			path: path.into(),
			resource,
		}
	}
}

/// Enumerates the icon resources available to the process.
pub trait AssetSource {
	/// Return every resource in discovery order.
	fn discover(&self) -> Result<Vec<DiscoveredAsset>, CatalogError>;
}

/// Icons compiled into the binary from `assets/icons`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledAssets;

impl AssetSource for BundledAssets {
	fn discover(&self) -> Result<Vec<DiscoveredAsset>, CatalogError> {
		let mut assets = Vec::new();
		collect_bundled(&BUNDLED_ICONS, &mut assets);
		if assets.is_empty() {
			return Err(CatalogError::Empty);
		}
		Ok(assets)
	}
}

fn collect_bundled(dir: &'static Dir<'static>, assets: &mut Vec<DiscoveredAsset>) {
	for file in dir.files() {
		let path = file.path().to_string_lossy().into_owned();
		if !has_allowed_extension(&path, DEFAULT_EXTENSIONS) {
			continue;
		}
		assets.push(DiscoveredAsset::new(
			path,
			IconResource::Embedded(file.contents()),
		));
	}
	for child in dir.dirs() {
		collect_bundled(child, assets);
	}
}

/// Icons discovered on disk below a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
	root: PathBuf,
	extensions: Vec<String>,
	include_hidden: bool,
	respect_ignore: bool,
	max_depth: Option<usize>,
}

impl DirectoryAssets {
	/// Scan `root` for files with the default extensions.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			extensions: DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
			include_hidden: false,
			respect_ignore: false,
			max_depth: None,
		}
	}

	/// Restrict discovery to the given extensions (case-insensitive, without dots).
	#[must_use]
	pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.extensions = extensions
			.into_iter()
			.map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
			.filter(|ext| !ext.is_empty())
			.collect();
		self
	}

	#[must_use]
	pub fn include_hidden(mut self, include_hidden: bool) -> Self {
		self.include_hidden = include_hidden;
		self
	}

	/// Honour `.gitignore`, `.ignore` and git exclude rules below the root.
	/// Off by default so every icon file is listed.
	#[must_use]
	pub fn respect_ignore(mut self, respect_ignore: bool) -> Self {
		self.respect_ignore = respect_ignore;
		self
	}

	#[must_use]
	pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
		self.max_depth = max_depth;
		self
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn extensions(&self) -> &[String] {
		&self.extensions
	}
}

impl AssetSource for DirectoryAssets {
	fn discover(&self) -> Result<Vec<DiscoveredAsset>, CatalogError> {
		if !self.root.is_dir() {
			return Err(CatalogError::MissingRoot {
				root: self.root.clone(),
			});
		}

		let mut builder = WalkBuilder::new(&self.root);
		builder
			.hidden(!self.include_hidden)
			.git_ignore(self.respect_ignore)
			.git_global(self.respect_ignore)
			.git_exclude(self.respect_ignore)
			.ignore(self.respect_ignore)
			.parents(self.respect_ignore)
			.require_git(self.respect_ignore)
			.max_depth(self.max_depth)
			.sort_by_file_path(|a, b| a.cmp(b));

		let mut assets = Vec::new();
		for entry in builder.build() {
			let entry = match entry {
				Ok(entry) => entry,
				Err(err) => {
					log::warn!("skipping unreadable asset entry: {err}");
					continue;
				}
			};
			if !entry.file_type().is_some_and(|kind| kind.is_file()) {
				continue;
			}
			let path = entry.path();
			let relative = path.strip_prefix(&self.root).unwrap_or(path);
			let storage_path = relative.to_string_lossy().into_owned();
			if !has_allowed_extension(&storage_path, self.extensions.as_slice()) {
				continue;
			}
			assets.push(DiscoveredAsset::new(
				storage_path,
				IconResource::File(path.to_path_buf()),
			));
		}

		if assets.is_empty() {
			return Err(CatalogError::Empty);
		}
		Ok(assets)
	}
}

/// In-memory resources, mostly useful for embedders and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
	assets: Vec<DiscoveredAsset>,
}

impl MemoryAssets {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a resource with the given storage path and contents.
	#[must_use]
	pub fn with(mut self, path: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
		self.assets
			.push(DiscoveredAsset::new(path, IconResource::Memory(bytes.into())));
		self
	}

	/// Append an already constructed resource.
	#[must_use]
	pub fn with_resource(mut self, path: impl Into<String>, resource: IconResource) -> Self {
		self.assets.push(DiscoveredAsset::new(path, resource));
		self
	}
}

impl AssetSource for MemoryAssets {
	fn discover(&self) -> Result<Vec<DiscoveredAsset>, CatalogError> {
		if self.assets.is_empty() {
			return Err(CatalogError::Empty);
		}
		Ok(self.assets.clone())
	}
}

fn has_allowed_extension<S: AsRef<str>>(path: &str, allowed: &[S]) -> bool {
	extension(path).is_some_and(|ext| allowed.iter().any(|candidate| candidate.as_ref() == ext))
}
