use crate::catalog::{icns_tag, OSType};
use crate::error::{Error, Result};
use crate::variant::IconVariant;
use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

/// The first four bytes of an ICNS file:
const ICNS_MAGIC_LITERAL: &[u8; 4] = b"icns";

/// The length of an ICNS file header, in bytes:
const ICNS_HEADER_LENGTH: u32 = 8;

/// The length of an icon chunk header, in bytes:
const ICNS_CHUNK_HEADER_LENGTH: u32 = 8;

/// Encodes the variants into an ICNS file with PNG chunk payloads.
///
/// Each chunk is a 4-byte OSType tag plus a big-endian length covering the
/// chunk header and payload.  The file header carries the total file length,
/// so chunk lengths are summed in a first pass before anything is written.
pub(crate) fn encode(variants: &[&IconVariant]) -> Result<Vec<u8>> {
    if variants.is_empty() {
        return Err(Error::EmptySelection);
    }
    let mut total_length = ICNS_HEADER_LENGTH;
    for variant in variants {
        total_length = total_length.checked_add(chunk_length(variant)?).ok_or(
            Error::EncodingOverflow {
                field: "file length",
                value: u64::from(total_length)
                    + variant.png_data().len() as u64,
                max: u64::from(u32::MAX),
            },
        )?;
    }

    let mut file = Vec::with_capacity(total_length as usize);
    file.write_all(ICNS_MAGIC_LITERAL)?;
    file.write_u32::<BigEndian>(total_length)?;
    for variant in variants {
        let OSType(raw_tag) = icns_tag(variant.size());
        file.write_all(&raw_tag)?;
        file.write_u32::<BigEndian>(chunk_length(variant)?)?;
        file.write_all(variant.png_data())?;
    }
    Ok(file)
}

fn chunk_length(variant: &IconVariant) -> Result<u32> {
    let length = variant.png_data().len() as u64
        + u64::from(ICNS_CHUNK_HEADER_LENGTH);
    if length > u64::from(u32::MAX) {
        return Err(Error::EncodingOverflow {
            field: "chunk length",
            value: length,
            max: u64::from(u32::MAX),
        });
    }
    Ok(length as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;

    fn fake(size: u32, payload: &[u8]) -> IconVariant {
        IconVariant::new(size, Image::new(1, 1), payload.to_vec())
    }

    #[test]
    fn header_and_chunks_account_for_every_byte() {
        let v16 = fake(16, b"foobar"); // chunk length 14
        let v32 = fake(32, b"#"); // chunk length 9
        let file = encode(&[&v16, &v32]).expect("encode failed");

        assert_eq!(&file[0..4], b"icns");
        assert_eq!(&file[4..8], &[0, 0, 0, 31]); // 8 + 14 + 9
        assert_eq!(&file[8..12], b"is32");
        assert_eq!(&file[12..16], &[0, 0, 0, 14]);
        assert_eq!(&file[16..22], b"foobar");
        assert_eq!(&file[22..26], b"il32");
        assert_eq!(&file[26..30], &[0, 0, 0, 9]);
        assert_eq!(&file[30..31], b"#");
        assert_eq!(file.len(), 31);
    }

    #[test]
    fn chunks_follow_selection_order() {
        let v512 = fake(512, b"aa");
        let v1024 = fake(1024, b"bbb");
        let file = encode(&[&v512, &v1024]).expect("encode failed");
        assert_eq!(&file[8..12], b"ic08");
        assert_eq!(&file[18..22], b"ic09");
        // totalSize = 8 + (8+2) + (8+3)
        assert_eq!(&file[4..8], &[0, 0, 0, 29]);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let err = encode(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptySelection));
    }
}
