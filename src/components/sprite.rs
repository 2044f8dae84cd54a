use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::animation::WalkCycle;
use crate::resources::rowlayout::RowLayout;

/// Rows in a character sheet: idle poses plus two walk variants per direction.
pub const SHEET_ROWS: u32 = 13;
/// Animation phases per row.
pub const SHEET_COLUMNS: u32 = 4;

/// Pixel layout of a loaded sprite sheet. Fixed once the texture is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetGeometry {
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub rows: u32,
    pub columns: u32,
}

impl SheetGeometry {
    /// Derive the frame grid from the texture size reported by the loader.
    pub fn from_texture_size(width: i32, height: i32) -> Result<Self, String> {
        if width < SHEET_COLUMNS as i32 || height < SHEET_ROWS as i32 {
            return Err(format!(
                "sprite sheet is {}x{}, need at least {}x{} pixels",
                width, height, SHEET_COLUMNS, SHEET_ROWS
            ));
        }
        let (width, height) = (width as u32, height as u32);
        Ok(Self {
            sheet_width: width,
            sheet_height: height,
            frame_width: width / SHEET_COLUMNS,
            frame_height: height / SHEET_ROWS,
            rows: SHEET_ROWS,
            columns: SHEET_COLUMNS,
        })
    }
}

/// Sprite is identified by a texture key and the geometry of its sheet.
/// `width`/`height` are the on-screen size: one frame scaled by `scale`.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub sheet: SheetGeometry,
    pub scale: f32,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, sheet: SheetGeometry, scale: f32) -> Self {
        let mut sprite = Self {
            tex_key: tex_key.into(),
            sheet,
            scale,
            width: 0.0,
            height: 0.0,
        };
        sprite.replace_sheet(sheet);
        sprite
    }

    /// Swap in the geometry of a freshly loaded sheet and recompute the size.
    pub fn replace_sheet(&mut self, sheet: SheetGeometry) {
        self.sheet = sheet;
        self.width = sheet.frame_width as f32 * self.scale;
        self.height = sheet.frame_height as f32 * self.scale;
    }

    /// Region of the sheet sampled for the current frame.
    pub fn source_rect(&self, cycle: &WalkCycle, layout: &RowLayout) -> Rectangle {
        let row = layout.row(cycle.row_facing(), cycle.animation_key);
        Rectangle {
            x: (self.sheet.frame_width * cycle.frame_column) as f32,
            y: (self.sheet.frame_height * row) as f32,
            width: self.sheet.frame_width as f32,
            height: self.sheet.frame_height as f32,
        }
    }

    /// On-screen region the frame is drawn into, with `pos` as top-left.
    pub fn dest_rect(&self, pos: Vector2) -> Rectangle {
        Rectangle {
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.height,
        }
    }
}
