use std::io;
use thiserror::Error;

/// Errors produced while generating icon variants or encoding containers.
#[derive(Debug, Error)]
pub enum Error {
    /// The source input was not a usable raster image.
    #[error("invalid source image: {0}")]
    InvalidSource(String),

    /// No sizes were selected (or none of the requested sizes were
    /// available) for a merge/encode call.
    #[error("no icon sizes selected")]
    EmptySelection,

    /// An external platform tag did not name a known platform.
    #[error("unsupported platform: {0:?}")]
    UnsupportedPlatform(String),

    /// A length, offset, or count does not fit its fixed-width binary field.
    #[error("{field} of {value} exceeds the container format limit of {max}")]
    EncodingOverflow {
        /// Name of the binary field that overflowed.
        field: &'static str,
        /// The value that did not fit.
        value: u64,
        /// The largest value the field can hold.
        max: u64,
    },

    /// Generating one size's variant failed; the whole batch for that
    /// platform is abandoned rather than producing an incomplete icon set.
    #[error("failed to generate the {size}x{size} variant")]
    Generation {
        /// The size whose generation failed.
        size: u32,
        /// The underlying PNG/IO failure.
        #[source]
        source: io::Error,
    },

    /// An underlying I/O failure.
    #[error("i/o error")]
    Io(#[from] io::Error),

    /// An underlying ZIP archive failure.
    #[error("archive error")]
    Zip(#[from] zip::result::ZipError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
