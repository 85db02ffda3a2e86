//! [`RenderTarget`] implementation over macroquad's immediate-mode drawing.

use glam::Vec2;
use macroquad::{
    color::{Color as MacroquadColor, WHITE},
    math::{Rect, Vec2 as MacroquadVec2},
    shapes::{draw_circle, draw_circle_lines, draw_line, draw_rectangle},
    texture::{draw_texture_ex, DrawTextureParams},
};
use orbital_defence_rendering::{ImageHandle, Paint, RenderTarget, Rgba, SourceRect};

use crate::{textures::TextureCache, transform::TransformStack};

/// Draws into the current macroquad frame.
pub(crate) struct MacroquadTarget<'a> {
    textures: &'a TextureCache,
    background: MacroquadColor,
    transforms: TransformStack,
}

impl<'a> MacroquadTarget<'a> {
    pub(crate) fn new(textures: &'a TextureCache, background: Rgba) -> Self {
        Self {
            textures,
            background: to_macroquad_color(background),
            transforms: TransformStack::new(),
        }
    }

    fn map(&self, point: Vec2) -> Vec2 {
        self.transforms.current().apply(point)
    }
}

impl RenderTarget for MacroquadTarget<'_> {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        draw_rectangle(origin.x, origin.y, size.x, size.y, self.background);
    }

    fn save(&mut self) {
        self.transforms.save();
    }

    fn restore(&mut self) {
        self.transforms.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        self.transforms.current_mut().translate(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.transforms.current_mut().rotate(radians);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        let center = self.map(center);
        draw_circle(center.x, center.y, radius, paint_color(paint));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, paint: Paint) {
        let center = self.map(center);
        draw_circle_lines(center.x, center.y, radius, line_width, paint_color(paint));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, paint: Paint) {
        let from = self.map(from);
        let to = self.map(to);
        draw_line(from.x, from.y, to.x, to.y, line_width, paint_color(paint));
    }

    fn draw_image(&mut self, image: &ImageHandle, source: Option<SourceRect>, position: Vec2) {
        let Some(texture) = self.textures.get(image) else {
            return;
        };
        let top_left = self.map(position);
        let params = DrawTextureParams {
            source: source.map(|rect| Rect::new(rect.x, rect.y, rect.width, rect.height)),
            dest_size: source.map(|rect| MacroquadVec2::new(rect.width, rect.height)),
            rotation: self.transforms.current().rotation(),
            pivot: Some(MacroquadVec2::new(top_left.x, top_left.y)),
            ..DrawTextureParams::default()
        };
        draw_texture_ex(texture, top_left.x, top_left.y, WHITE, params);
    }
}

pub(crate) fn to_macroquad_color(color: Rgba) -> MacroquadColor {
    MacroquadColor::new(color.red, color.green, color.blue, color.alpha)
}

fn paint_color(paint: Paint) -> MacroquadColor {
    to_macroquad_color(paint.to_rgba())
}
