use crate::error::{Error, Result};
use crate::image::Image;

/// One generated icon: the resampled square raster plus its cached
/// PNG-encoded form.
///
/// The PNG bytes are produced once at generation time and never recomputed;
/// every container encoder consumes them as-is.
#[derive(Debug)]
pub struct IconVariant {
    size: u32,
    image: Image,
    png: Vec<u8>,
}

impl IconVariant {
    /// Resamples `source` to a `size` by `size` square and encodes the PNG
    /// payload.
    pub fn generate(source: &Image, size: u32) -> Result<IconVariant> {
        if size == 0 {
            return Err(Error::InvalidSource(
                "icon size must be at least 1".to_string(),
            ));
        }
        let image = source.resample(size);
        let mut png = Vec::new();
        image
            .write_png(&mut png)
            .map_err(|source| Error::Generation { size, source })?;
        Ok(IconVariant { size, image, png })
    }

    pub(crate) fn new(size: u32, image: Image, png: Vec<u8>) -> IconVariant {
        IconVariant { size, image, png }
    }

    /// The square edge length of this variant, in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The resampled raster.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// The cached PNG-encoded bytes.
    pub fn png_data(&self) -> &[u8] {
        &self.png
    }
}
