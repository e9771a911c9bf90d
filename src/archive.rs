use crate::catalog::{android_bucket, ios_filename};
use crate::error::{Error, Result};
use crate::variant::IconVariant;
use std::io::{Cursor, Write};
use tracing::warn;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Filename used inside every Android density-bucket directory.
const ANDROID_LAUNCHER_NAME: &str = "ic_launcher.png";

/// Encodes the variants into an Android ZIP: one `{bucket}/ic_launcher.png`
/// entry per density bucket, raw PNG payloads.
///
/// When two selected sizes map to the same bucket the later selection wins,
/// so the archive always holds one physical entry per bucket.
pub(crate) fn encode_android(variants: &[&IconVariant]) -> Result<Vec<u8>> {
    if variants.is_empty() {
        return Err(Error::EmptySelection);
    }
    let mut entries: Vec<(String, &[u8])> = Vec::new();
    for variant in variants {
        let path = format!(
            "{}/{}",
            android_bucket(variant.size()),
            ANDROID_LAUNCHER_NAME
        );
        match entries.iter_mut().find(|(existing, _)| *existing == path) {
            Some(entry) => {
                warn!(
                    size = variant.size(),
                    path = path.as_str(),
                    "density bucket collision, replacing earlier entry"
                );
                entry.1 = variant.png_data();
            }
            None => entries.push((path, variant.png_data())),
        }
    }
    write_archive(&entries)
}

/// Encodes the variants into an iOS ZIP: one `Icon-{size}.png` entry per
/// selected size, raw PNG payloads.  Filenames are keyed by exact size, so
/// entries can never collide.
pub(crate) fn encode_ios(variants: &[&IconVariant]) -> Result<Vec<u8>> {
    if variants.is_empty() {
        return Err(Error::EmptySelection);
    }
    let entries: Vec<(String, &[u8])> = variants
        .iter()
        .map(|variant| (ios_filename(variant.size()), variant.png_data()))
        .collect();
    write_archive(&entries)
}

/// Payloads are already PNG-compressed, so entries are stored rather than
/// deflated again.
fn write_archive(entries: &[(String, &[u8])]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (path, payload) in entries {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Stored);
        writer.start_file(path.as_str(), options)?;
        writer.write_all(payload)?;
    }
    Ok(writer.finish()?.into_inner())
}
