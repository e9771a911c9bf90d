use crate::error::{Error, Result};
use crate::variant::IconVariant;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

/// The length of an ICO file header, in bytes:
const ICO_HEADER_LENGTH: u32 = 6;

/// The length of one ICO directory entry, in bytes:
const ICO_DIRECTORY_ENTRY_LENGTH: u32 = 16;

/// Resource type field value for icons (as opposed to cursors):
const ICO_RESOURCE_TYPE_ICON: u16 = 1;

/// The image count field is 16 bits wide:
const ICO_MAX_IMAGES: usize = u16::MAX as usize;

/// Encodes the variants into a multi-image ICO file with PNG payloads.
///
/// Layout: 6-byte header, then one 16-byte directory entry per image in
/// selection order, then the concatenated PNG payloads in the same order.
/// All integers are little-endian; payload offsets are absolute from the
/// start of the file.
pub(crate) fn encode(variants: &[&IconVariant]) -> Result<Vec<u8>> {
    if variants.is_empty() {
        return Err(Error::EmptySelection);
    }
    if variants.len() > ICO_MAX_IMAGES {
        return Err(Error::EncodingOverflow {
            field: "image count",
            value: variants.len() as u64,
            max: ICO_MAX_IMAGES as u64,
        });
    }
    let mut file = Vec::new();
    file.write_u16::<LittleEndian>(0)?; // reserved
    file.write_u16::<LittleEndian>(ICO_RESOURCE_TYPE_ICON)?;
    file.write_u16::<LittleEndian>(variants.len() as u16)?;

    let mut offset = ICO_HEADER_LENGTH
        + ICO_DIRECTORY_ENTRY_LENGTH * variants.len() as u32;
    for variant in variants {
        let data_size = payload_length(variant)?;
        file.write_u8(dimension_field(variant.size()))?; // width
        file.write_u8(dimension_field(variant.size()))?; // height
        file.write_u8(0)?; // no color palette
        file.write_u8(0)?; // reserved
        file.write_u16::<LittleEndian>(1)?; // color planes
        file.write_u16::<LittleEndian>(32)?; // bits per pixel
        file.write_u32::<LittleEndian>(data_size)?;
        file.write_u32::<LittleEndian>(offset)?;
        offset = offset.checked_add(data_size).ok_or(
            Error::EncodingOverflow {
                field: "payload offset",
                value: u64::from(offset) + u64::from(data_size),
                max: u64::from(u32::MAX),
            },
        )?;
    }
    for variant in variants {
        file.write_all(variant.png_data())?;
    }
    Ok(file)
}

/// ICO stores dimensions in a single byte where 0 stands for 256.  Sizes
/// above 256 also get 0; the real dimensions live in the PNG payload.
fn dimension_field(size: u32) -> u8 {
    if size >= 256 {
        0
    } else {
        size as u8
    }
}

fn payload_length(variant: &IconVariant) -> Result<u32> {
    let length = variant.png_data().len();
    if length as u64 > u64::from(u32::MAX) {
        return Err(Error::EncodingOverflow {
            field: "payload length",
            value: length as u64,
            max: u64::from(u32::MAX),
        });
    }
    Ok(length as u32)
}
