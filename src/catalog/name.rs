use percent_encoding::percent_decode_str;

/// Derive the display name of an icon from its storage path.
///
/// The directory prefix and the final extension are removed and the remaining
/// stem is percent-decoded, so `assets/Credit%20Card.svg` becomes
/// `Credit Card`. Sequences that do not decode to UTF-8 are kept lossily.
pub(crate) fn icon_name(path: &str) -> String {
	let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
	let stem = match file_name.rfind('.') {
		Some(0) | None => file_name,
		Some(dot) => &file_name[..dot],
	};
	percent_decode_str(stem).decode_utf8_lossy().into_owned()
}

/// Lowercase extension of a storage path, without the leading dot.
pub(crate) fn extension(path: &str) -> Option<String> {
	let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
	match file_name.rfind('.') {
		Some(0) | None => None,
		Some(dot) => Some(file_name[dot + 1..].to_ascii_lowercase()),
	}
}

/// MIME type used when embedding a resource with the given extension.
pub(crate) fn media_type_for(extension: &str) -> Option<&'static str> {
	match extension {
		"svg" => Some("image/svg+xml"),
		"png" => Some("image/png"),
		"gif" => Some("image/gif"),
		"jpg" | "jpeg" => Some("image/jpeg"),
		"webp" => Some("image/webp"),
		"ico" => Some("image/x-icon"),
		_ => None,
	}
}
