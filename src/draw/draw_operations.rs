//! Draw Operations - Pure DOP Functions
//!
//! Ordered transforms in, draw commands out.

use super::draw_data::{DrawCommand, FrameStats, Rect, Rgba, SlotColor};
use crate::config::ColorConfig;
use crate::constants::render::MIN_VISIBLE_ALPHA;
use crate::frame::PointTransform;
use crate::shape::SpriteRect;

/// HSL (hue in degrees, s/l in [0, 1]) to RGB
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (f32, f32, f32) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma * 0.5;
    (r + m, g + m, b + m)
}

/// One base color per slot, spread across the configured ranges
pub fn slot_colors(colors: &ColorConfig, slot_count: usize) -> Vec<SlotColor> {
    let [s_min, s_max] = colors.saturation_range;
    let [l_min, l_max] = colors.lightness_range;
    let denominator = slot_count.saturating_sub(1).max(1) as f32;

    (0..slot_count)
        .map(|slot| {
            let t = slot as f32 / denominator;
            // Stride so neighbouring slots do not get neighbouring lightness
            let u = ((slot * 37) % slot_count.max(1)) as f32 / denominator;
            SlotColor {
                hue: colors.hue,
                saturation: s_min + (s_max - s_min) * t,
                lightness: l_min + (l_max - l_min) * u,
            }
        })
        .collect()
}

/// Background color for a point, darkened and saturated as it becomes a glyph pixel
pub fn background_color(base: &SlotColor, eased: f32, contrast_boost: f32, alpha: f32) -> Rgba {
    let boost = contrast_boost * eased.clamp(0.0, 1.0);
    let lightness = base.lightness * (1.0 - boost);
    let saturation = (base.saturation * (1.0 + boost)).min(1.0);
    let (r, g, b) = hsl_to_rgb(base.hue, saturation, lightness);
    Rgba {
        r,
        g,
        b,
        a: alpha.clamp(0.0, 1.0),
    }
}

/// Emit commands for transforms already in back-to-front order.
///
/// `out` is cleared and refilled; its allocation is kept.
pub fn emit_draw_commands(
    ordered: &[PointTransform],
    sprite_rects: &[SpriteRect],
    colors: &[SlotColor],
    contrast_boost: f32,
    out: &mut Vec<DrawCommand>,
) -> FrameStats {
    out.clear();
    let mut stats = FrameStats {
        points: ordered.len(),
        ..Default::default()
    };

    for t in ordered {
        let background_alpha = t.image_opacity.max(t.eased);
        if background_alpha < MIN_VISIBLE_ALPHA {
            stats.culled_points += 1;
            continue;
        }

        let slot = t.slot as usize;
        let half = t.size * 0.5;
        let dest = Rect {
            x: t.screen_x - half,
            y: t.screen_y - half,
            width: t.size,
            height: t.size,
        };

        let base = colors.get(slot).copied().unwrap_or(SlotColor {
            hue: 0.0,
            saturation: 0.0,
            lightness: 0.5,
        });
        out.push(DrawCommand::RoundedRect {
            rect: dest,
            corner_radius: t.corner_radius,
            color: background_color(&base, t.eased, contrast_boost, background_alpha),
        });

        if t.image_opacity > 0.0 {
            if let Some(source) = sprite_rects.get(slot) {
                out.push(DrawCommand::SpriteBlit {
                    source: *source,
                    dest,
                    corner_radius: t.corner_radius,
                    alpha: t.image_opacity,
                });
            }
        }
        stats.drawn_points += 1;
    }

    stats.commands = out.len();
    stats
}
