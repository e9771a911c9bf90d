use crate::image::{Image, BYTES_PER_PIXEL};

impl Image {
    /// Scales the image to a `target` by `target` square using bilinear
    /// interpolation.  The full source bounding box is stretched to fill the
    /// target, so a non-square source is distorted rather than letterboxed
    /// or cropped.  The alpha channel is interpolated along with the color
    /// channels.
    ///
    /// Upscaling beyond the source resolution is allowed; it degrades visual
    /// quality but never fails.
    pub fn resample(&self, target: u32) -> Image {
        let mut output = Image::new(target, target);
        let scale_x = self.width() as f32 / target as f32;
        let scale_y = self.height() as f32 / target as f32;
        for row in 0..target {
            // Map the output pixel center back into source space.
            let src_y = ((row as f32 + 0.5) * scale_y - 0.5).max(0.0);
            let y0 = (src_y as u32).min(self.height() - 1);
            let y1 = (y0 + 1).min(self.height() - 1);
            let weight_y = src_y - y0 as f32;
            for col in 0..target {
                let src_x = ((col as f32 + 0.5) * scale_x - 0.5).max(0.0);
                let x0 = (src_x as u32).min(self.width() - 1);
                let x1 = (x0 + 1).min(self.width() - 1);
                let weight_x = src_x - x0 as f32;
                let out_base =
                    BYTES_PER_PIXEL * (row * target + col) as usize;
                for channel in 0..BYTES_PER_PIXEL {
                    let top_left = self.sample(x0, y0, channel);
                    let top_right = self.sample(x1, y0, channel);
                    let bottom_left = self.sample(x0, y1, channel);
                    let bottom_right = self.sample(x1, y1, channel);
                    let top = top_left + (top_right - top_left) * weight_x;
                    let bottom =
                        bottom_left + (bottom_right - bottom_left) * weight_x;
                    let value = top + (bottom - top) * weight_y;
                    output.data_mut()[out_base + channel] =
                        value.round() as u8;
                }
            }
        }
        output
    }

    fn sample(&self, x: u32, y: u32, channel: usize) -> f32 {
        let index = BYTES_PER_PIXEL * (y * self.width() + x) as usize + channel;
        f32::from(self.data()[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, pixel: [u8; 4]) -> Image {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..(width * height) {
            data.extend_from_slice(&pixel);
        }
        Image::from_rgba(width, height, data).unwrap()
    }

    #[test]
    fn upscale_solid_color_stays_solid() {
        let source = solid(1, 1, [200, 100, 50, 255]);
        let scaled = source.resample(4);
        assert_eq!(scaled.width(), 4);
        assert_eq!(scaled.height(), 4);
        for pixel in scaled.data().chunks(4) {
            assert_eq!(pixel, [200, 100, 50, 255]);
        }
    }

    #[test]
    fn downscale_solid_color_stays_solid() {
        let source = solid(4, 4, [10, 20, 30, 128]);
        let scaled = source.resample(2);
        for pixel in scaled.data().chunks(4) {
            assert_eq!(pixel, [10, 20, 30, 128]);
        }
    }

    #[test]
    fn non_square_source_is_stretched_to_square() {
        let source = solid(4, 2, [7, 7, 7, 255]);
        let scaled = source.resample(3);
        assert_eq!(scaled.width(), 3);
        assert_eq!(scaled.height(), 3);
    }

    #[test]
    fn horizontal_gradient_keeps_ordering() {
        // Left half dark, right half bright; upscaled columns must not
        // decrease in brightness from left to right.
        let data = vec![
            0, 0, 0, 255, // left pixel
            255, 255, 255, 255, // right pixel
        ];
        let source = Image::from_rgba(2, 1, data).unwrap();
        let scaled = source.resample(4);
        let red_of = |col: usize| scaled.data()[4 * col];
        assert!(red_of(0) <= red_of(1));
        assert!(red_of(1) <= red_of(2));
        assert!(red_of(2) <= red_of(3));
        assert!(red_of(0) < red_of(3));
    }
}
