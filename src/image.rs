use crate::error::{Error, Result};

/// Number of bytes per RGBA pixel.
pub(crate) const BYTES_PER_PIXEL: usize = 4;

/// A decoded raster image stored as 8-bit RGBA.
///
/// All pixel data in this crate lives in this one channel order; PNG decode
/// converts other color types on the way in (see `read_png`).
#[derive(Clone, Debug)]
pub struct Image {
    width: u32,
    height: u32,
    data: Box<[u8]>,
}

impl Image {
    /// Creates a new image with all pixels set to transparent black.
    pub fn new(width: u32, height: u32) -> Image {
        let data_bytes = BYTES_PER_PIXEL * width as usize * height as usize;
        Image {
            width,
            height,
            data: vec![0u8; data_bytes].into_boxed_slice(),
        }
    }

    /// Wraps an existing RGBA pixel buffer.  Returns `InvalidSource` if
    /// either dimension is zero or the buffer length does not match the
    /// dimensions.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Image> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSource(format!(
                "image dimensions must be at least 1x1 (got {}x{})",
                width, height
            )));
        }
        let expected = BYTES_PER_PIXEL * width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidSource(format!(
                "pixel buffer holds {} bytes but a {}x{} RGBA image needs {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Image {
            width,
            height,
            data: data.into_boxed_slice(),
        })
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the image's pixel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Converts RGB image data into RGBA.
pub(crate) fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    assert_eq!(rgb.len() % 3, 0);
    let num_pixels = rgb.len() / 3;
    let mut rgba = Vec::with_capacity(num_pixels * 4);
    for i in 0..num_pixels {
        rgba.extend_from_slice(&rgb[(3 * i)..(3 * i + 3)]);
        rgba.push(u8::MAX);
    }
    rgba
}

/// Converts grayscale image data into RGBA.
pub(crate) fn gray_to_rgba(gray: &[u8]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(gray.len() * 4);
    for &value in gray {
        rgba.push(value);
        rgba.push(value);
        rgba.push(value);
        rgba.push(u8::MAX);
    }
    rgba
}

/// Converts grayscale-with-alpha image data into RGBA.
pub(crate) fn gray_alpha_to_rgba(gray_alpha: &[u8]) -> Vec<u8> {
    assert_eq!(gray_alpha.len() % 2, 0);
    let num_pixels = gray_alpha.len() / 2;
    let mut rgba = Vec::with_capacity(num_pixels * 4);
    for i in 0..num_pixels {
        let value = gray_alpha[2 * i];
        rgba.push(value);
        rgba.push(value);
        rgba.push(value);
        rgba.push(gray_alpha[2 * i + 1]);
    }
    rgba
}
