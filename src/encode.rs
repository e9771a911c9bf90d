use crate::archive;
use crate::catalog::Platform;
use crate::error::Result;
use crate::icns;
use crate::ico;
use crate::select::Selection;
use crate::variant::IconVariant;
use tracing::debug;

/// A fully encoded icon container, ready to hand to a download sink.
pub struct EncodedContainer {
    /// The container bytes.
    pub bytes: Vec<u8>,
    /// Suggested filename for saving the container.
    pub filename: String,
    /// MIME type matching `bytes`.
    pub mime: &'static str,
}

/// Encodes a selection into its platform's container format.
///
/// Dispatch is an explicit match over the closed platform enum; given the
/// same selection and source bytes, the output is byte-identical on every
/// call.
pub fn encode(selection: &Selection) -> Result<EncodedContainer> {
    let variants = selection.variants();
    debug!(
        platform = %selection.platform(),
        count = variants.len(),
        "encoding icon container"
    );
    let (bytes, filename, mime) = match selection.platform() {
        Platform::Windows => {
            (ico::encode(variants)?, "iconmerger.ico", "image/x-icon")
        }
        Platform::Mac => (
            icns::encode(variants)?,
            "iconmerger.icns",
            "application/octet-stream",
        ),
        Platform::Android => (
            archive::encode_android(variants)?,
            "iconmerger_android.zip",
            "application/zip",
        ),
        Platform::Ios => (
            archive::encode_ios(variants)?,
            "iconmerger_ios.zip",
            "application/zip",
        ),
    };
    Ok(EncodedContainer {
        bytes,
        filename: filename.to_string(),
        mime,
    })
}

/// Encodes one variant as a standalone download: a single-image ICO named
/// `icon_{size}px.ico` for Windows, the bare PNG named `icon_{size}px.png`
/// for every other platform.
pub fn encode_single(
    platform: Platform,
    variant: &IconVariant,
) -> Result<EncodedContainer> {
    let size = variant.size();
    match platform {
        Platform::Windows => Ok(EncodedContainer {
            bytes: ico::encode(&[variant])?,
            filename: format!("icon_{}px.ico", size),
            mime: "image/x-icon",
        }),
        _ => Ok(EncodedContainer {
            bytes: variant.png_data().to_vec(),
            filename: format!("icon_{}px.png", size),
            mime: "image/png",
        }),
    }
}
