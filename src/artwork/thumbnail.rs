use image::{DynamicImage, ImageFormat};

/// Opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Pixel box an image is scaled into.
///
/// In the terminal each cell holds one pixel column and two pixel rows, so
/// a box of `w x h` pixels covers `w x h/2` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailBounds {
    pub width: u32,
    pub height: u32,
}

/// Decoded artwork, scaled and flattened onto a background colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Thumbnail {
    pub fn from_png(
        bytes: &[u8],
        bounds: ThumbnailBounds,
        background: Rgb,
    ) -> Result<Self, image::ImageError> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
        Ok(Self::from_image(&image, bounds, background))
    }

    pub fn from_image(image: &DynamicImage, bounds: ThumbnailBounds, background: Rgb) -> Self {
        let scaled = image
            .thumbnail(bounds.width.max(1), bounds.height.max(1))
            .to_rgba8();
        let (width, height) = scaled.dimensions();
        let pixels = scaled
            .pixels()
            .map(|px| {
                let [r, g, b, a] = px.0;
                Rgb(
                    blend(r, background.0, a),
                    blend(g, background.1, a),
                    blend(b, background.2, a),
                )
            })
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let alpha = u16::from(alpha);
    ((u16::from(fg) * alpha + u16::from(bg) * (255 - alpha)) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const BG: Rgb = Rgb(10, 20, 30);

    fn square(size: u32, color: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, color))
    }

    #[test]
    fn keeps_aspect_ratio_inside_bounds() {
        let thumb = Thumbnail::from_image(
            &square(100, Rgba([255, 0, 0, 255])),
            ThumbnailBounds {
                width: 20,
                height: 10,
            },
            BG,
        );
        assert_eq!((thumb.width(), thumb.height()), (10, 10));
    }

    #[test]
    fn transparent_pixels_take_background() {
        let thumb = Thumbnail::from_image(
            &square(4, Rgba([255, 255, 255, 0])),
            ThumbnailBounds {
                width: 4,
                height: 4,
            },
            BG,
        );
        assert_eq!(thumb.pixel(0, 0), Some(BG));
    }

    #[test]
    fn opaque_pixels_keep_colour() {
        let thumb = Thumbnail::from_image(
            &square(4, Rgba([200, 100, 50, 255])),
            ThumbnailBounds {
                width: 4,
                height: 4,
            },
            BG,
        );
        assert_eq!(thumb.pixel(3, 3), Some(Rgb(200, 100, 50)));
        assert_eq!(thumb.pixel(4, 0), None);
    }

    #[test]
    fn invalid_png_is_an_error() {
        let bounds = ThumbnailBounds {
            width: 4,
            height: 4,
        };
        assert!(Thumbnail::from_png(b"not a png", bounds, BG).is_err());
    }
}
