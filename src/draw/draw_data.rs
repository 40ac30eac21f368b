//! Draw Data - Pure DOP
//!
//! NO METHODS. Just data.
//! Backend-neutral render primitives; any 2D API can replay them in order.

use crate::shape::SpriteRect;

/// Straight (non-premultiplied) RGBA, components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Screen-space rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Base color of a sprite slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotColor {
    /// Degrees
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

/// One render primitive, in draw order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled rounded rectangle behind the sprite
    RoundedRect {
        rect: Rect,
        corner_radius: f32,
        color: Rgba,
    },
    /// Sprite atlas region blitted into a rounded-rect clip
    SpriteBlit {
        source: SpriteRect,
        dest: Rect,
        corner_radius: f32,
        alpha: f32,
    },
}

/// Counters for the last emitted frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub points: usize,
    pub drawn_points: usize,
    pub culled_points: usize,
    pub commands: usize,
}
