//! Album art lookup by file name convention.
//!
//! A folder's cover is the first of a fixed list of file names that exists in it.
//! The resolver remembers what it last handed out so the UI only redraws the art
//! when it actually changes.

mod image;
mod resolve;

pub use image::{ArtDimensions, aspect_ratio, fit_within, probe_dimensions};
pub use resolve::{AlbumArtResolver, ArtLookup, find_album_art, resolve_art};

/// Cover file names in priority order.
pub const DEFAULT_CANDIDATES: [&str; 6] = [
    "cover.jpg",
    "Folder.jpg",
    "folder.jpg",
    "cover.png",
    "AlbumArt.jpg",
    "AlbumArtSmall.jpg",
];

#[cfg(test)]
mod tests;
