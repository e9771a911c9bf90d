use crate::image::{gray_alpha_to_rgba, gray_to_rgba, rgb_to_rgba, Image};
use std::io::{self, BufRead, Error, ErrorKind, Seek, Write};

impl Image {
    /// Reads an image from a PNG file, converting whatever color type the
    /// file uses into RGBA.
    pub fn read_png<R: BufRead + Seek>(input: R) -> io::Result<Image> {
        let mut decoder = png::Decoder::new(input);
        decoder.set_transformations(
            png::Transformations::STRIP_16 | png::Transformations::EXPAND,
        );
        let info = decoder.read_header_info()?;
        let (width, height) = (info.width, info.height);
        let mut reader = decoder.read_info()?;

        let (color_type, bit_depth) = reader.output_color_type();
        assert!(bit_depth == png::BitDepth::Eight);
        let buffer_size = reader.output_buffer_size().ok_or_else(|| {
            Error::new(ErrorKind::InvalidData, "PNG dimensions overflow")
        })?;
        let mut raw = vec![0u8; buffer_size];
        reader.next_frame(&mut raw)?;
        reader.finish()?;

        let rgba = match color_type {
            png::ColorType::Rgba => raw,
            png::ColorType::Rgb => rgb_to_rgba(&raw),
            png::ColorType::GrayscaleAlpha => gray_alpha_to_rgba(&raw),
            png::ColorType::Grayscale => gray_to_rgba(&raw),
            _ => unreachable!(), // EXPAND prevents paletted output
        };
        Image::from_rgba(width, height, rgba)
            .map_err(|err| Error::new(ErrorKind::InvalidData, err.to_string()))
    }

    /// Writes the image to a PNG file.
    pub fn write_png<W: Write>(&self, output: W) -> io::Result<()> {
        let mut encoder = png::Encoder::new(output, self.width(), self.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.data())?;
        Ok(())
    }
}
