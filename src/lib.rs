//! Library for turning one source raster into a platform-specific set of
//! square icons and packaging them into a platform-native icon container.
//!
//! Windows targets get a multi-image `.ico` file, macOS targets a chunked
//! `.icns` file, and Android/iOS targets a ZIP bundle laid out by density
//! bucket or by size-keyed filename.  The source image is always stretched
//! to fill each square target size; generated variants are cached per
//! platform and a user-chosen subset of them is merged into the final
//! container.
//!
//! ```
//! use iconmerger::{encode, IconSetCache, Image, Platform, Selection};
//!
//! # fn main() -> iconmerger::Result<()> {
//! let source = Image::from_rgba(2, 2, vec![0xff; 16])?;
//! let mut cache = IconSetCache::new();
//! let variants = cache.ensure(Platform::Windows, &source)?;
//! let selection = Selection::new(Platform::Windows, variants, &[16, 32, 256])?;
//! let container = encode(&selection)?;
//! assert_eq!(container.filename, "iconmerger.ico");
//! assert_eq!(container.mime, "image/x-icon");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod archive;
mod cache;
mod catalog;
mod encode;
mod error;
mod icns;
mod ico;
mod image;
mod pngio;
mod resample;
mod select;
mod variant;

pub use crate::cache::{generate_set, IconSetCache};
pub use crate::catalog::{
    android_bucket, assess_source, icns_tag, ios_filename, size_description,
    size_usage, OSType, Platform, SourceQuality,
};
pub use crate::encode::{encode, encode_single, EncodedContainer};
pub use crate::error::{Error, Result};
pub use crate::image::Image;
pub use crate::select::Selection;
pub use crate::variant::IconVariant;
