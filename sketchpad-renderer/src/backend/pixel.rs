//! Headless pixel overlay backed by an RGBA buffer.

use image::{ImageEncoder, Rgba, RgbaImage};
use sketchpad_core::{Color, Rect};

use crate::error::{RenderError, RenderResult};

use super::OverlaySurface;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Overlay surface that rasterizes 1px outlines into a pixel buffer.
#[derive(Debug, Clone)]
pub struct PixelOverlay {
    buffer: RgbaImage,
    /// Rectangles stroked since the last clear, in draw order.
    strokes: Vec<(Rect, Color)>,
}

impl PixelOverlay {
    /// Create a transparent overlay of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::from_pixel(width, height, TRANSPARENT),
            strokes: Vec::new(),
        }
    }

    /// Rectangles stroked in the current frame.
    #[must_use]
    pub fn strokes(&self) -> &[(Rect, Color)] {
        &self.strokes
    }

    /// RGBA value of a pixel, `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.buffer.width() && y < self.buffer.height()).then(|| self.buffer.get_pixel(x, y).0)
    }

    /// Encode the current frame as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn to_png(&self) -> RenderResult<Vec<u8>> {
        let mut bytes = Vec::new();
        image::codecs::png::PngEncoder::new(&mut bytes)
            .write_image(
                self.buffer.as_raw(),
                self.buffer.width(),
                self.buffer.height(),
                image::ColorType::Rgba8.into(),
            )
            .map_err(|e| RenderError::Export(format!("PNG encoding failed: {e}")))?;
        Ok(bytes)
    }

    /// Paint a pixel if it lies on the surface.
    fn plot(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if px < self.buffer.width() && py < self.buffer.height() {
            self.buffer.put_pixel(px, py, color);
        }
    }
}

impl Default for PixelOverlay {
    fn default() -> Self {
        Self::new(400, 400)
    }
}

impl OverlaySurface for PixelOverlay {
    fn clear(&mut self) -> RenderResult<()> {
        for pixel in self.buffer.pixels_mut() {
            *pixel = TRANSPARENT;
        }
        self.strokes.clear();
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)] // Rounded scene coordinates fit in i64
    fn stroke_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        self.strokes.push((rect, color));

        let left = rect.x.round() as i64;
        let top = rect.y.round() as i64;
        let right = (rect.x + rect.width).round() as i64;
        let bottom = (rect.y + rect.height).round() as i64;

        // Clip spans to the surface so huge off-screen shapes stay cheap.
        let max_x = i64::from(self.buffer.width());
        let max_y = i64::from(self.buffer.height());
        let rgba = Rgba(color.to_rgba());

        for x in left.max(0)..=right.min(max_x - 1) {
            self.plot(x, top, rgba);
            self.plot(x, bottom, rgba);
        }
        for y in top.max(0)..=bottom.min(max_y - 1) {
            self.plot(left, y, rgba);
            self.plot(right, y, rgba);
        }
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: [u8; 4] = [0, 0, 255, 255];

    #[test]
    fn test_stroke_draws_outline_only() {
        let mut overlay = PixelOverlay::new(100, 100);
        overlay
            .stroke_rect(Rect::new(10.0, 10.0, 20.0, 20.0), Color::BLUE)
            .expect("stroke");

        assert_eq!(overlay.pixel(10, 10), Some(BLUE));
        assert_eq!(overlay.pixel(30, 30), Some(BLUE));
        assert_eq!(overlay.pixel(20, 10), Some(BLUE));
        assert_eq!(overlay.pixel(10, 20), Some(BLUE));
        assert_eq!(overlay.pixel(20, 20), Some([0, 0, 0, 0]));
        assert_eq!(overlay.strokes().len(), 1);
    }

    #[test]
    fn test_clear_erases_frame() {
        let mut overlay = PixelOverlay::new(50, 50);
        overlay
            .stroke_rect(Rect::new(5.0, 5.0, 10.0, 10.0), Color::BLUE)
            .expect("stroke");
        overlay.clear().expect("clear");

        assert!(overlay.strokes().is_empty());
        assert_eq!(overlay.pixel(5, 5), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_stroke_clips_off_surface() {
        let mut overlay = PixelOverlay::new(50, 50);
        overlay
            .stroke_rect(Rect::new(-100.0, 40.0, 1000.0, 1000.0), Color::RED)
            .expect("stroke");

        assert_eq!(overlay.pixel(0, 40), Some([255, 0, 0, 255]));
        assert_eq!(overlay.pixel(49, 40), Some([255, 0, 0, 255]));
        assert_eq!(overlay.pixel(25, 45), Some([0, 0, 0, 0]));
        assert_eq!(overlay.pixel(50, 40), None);
    }

    #[test]
    fn test_png_bytes() {
        let overlay = PixelOverlay::default();
        assert_eq!(overlay.size(), (400, 400));
        let png = overlay.to_png().expect("png");
        assert_eq!(&png[0..4], &[137, 80, 78, 71]);
    }
}
