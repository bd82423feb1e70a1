// SPDX-License-Identifier: MPL-2.0
//! Asset loading for the song and the carousel photos.
//!
//! Assets are either local files or remote URLs. Photos are decoded in
//! memory; the song is cached on disk first because the decoder reads from a
//! path.

pub mod image;
mod source;

pub use image::{decode_gallery_image, load_gallery_image, GalleryImage};
pub use source::{cache_remote, fetch_bytes, AssetSource};
