//! The painting seam between widgets and surfaces.
//!
//! Widgets paint against the [`Renderer`] trait. [`DisplayListRenderer`] is
//! the built-in implementation: it records draw commands into a display
//! list that a host can replay onto whatever surface it owns, and that
//! tests can inspect directly.

use crate::font::Font;
use crate::image::Image;
use crate::types::{Color, Point, Rect, Stroke};

/// Drawing operations available to widget paint code.
pub trait Renderer {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a text run with its baseline box starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color);

    /// Draw an image into `dest`, optionally tinted.
    ///
    /// A tint replaces the image's color channels while keeping its alpha,
    /// which is how monochrome icons are recolored.
    fn draw_image(&mut self, image: &Image, dest: Rect, tint: Option<Color>);
}

/// A single recorded draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect { rect: Rect, color: Color },
    /// A stroked rectangle outline.
    StrokeRect { rect: Rect, stroke: Stroke },
    /// A text run.
    Text {
        text: String,
        origin: Point,
        size: f32,
        color: Color,
    },
    /// An image blit.
    Image {
        image: Image,
        dest: Rect,
        tint: Option<Color>,
    },
}

/// A [`Renderer`] that records commands instead of rasterizing.
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    commands: Vec<DrawCommand>,
}

impl DisplayListRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for DisplayListRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            size: font.size(),
            color,
        });
    }

    fn draw_image(&mut self, image: &Image, dest: Rect, tint: Option<Color>) {
        self.commands.push(DrawCommand::Image {
            image: image.clone(),
            dest,
            tint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontFamily;

    #[test]
    fn test_records_in_draw_order() {
        let mut renderer = DisplayListRenderer::new();
        renderer.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        renderer.stroke_rect(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            &Stroke::new(Color::BLACK, 1.0),
        );
        renderer.draw_text(
            "hi",
            Point::new(2.0, 2.0),
            &Font::new(FontFamily::SansSerif, 14.0),
            Color::BLACK,
        );

        assert_eq!(renderer.commands().len(), 3);
        assert!(matches!(renderer.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(renderer.commands()[2], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_take_commands_empties_recorder() {
        let mut renderer = DisplayListRenderer::new();
        renderer.fill_rect(Rect::ZERO, Color::BLACK);
        let commands = renderer.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_draw_image_records_tint() {
        let mut renderer = DisplayListRenderer::new();
        let image = Image::solid(4, 4, [255, 255, 255, 255]);
        renderer.draw_image(&image, Rect::new(0.0, 0.0, 4.0, 4.0), Some(Color::RED));

        match &renderer.commands()[0] {
            DrawCommand::Image { tint, .. } => assert_eq!(*tint, Some(Color::RED)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
