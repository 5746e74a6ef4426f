use crate::{
    color::Rgb,
    math8::{blend8, fraction8},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Linear RGB blend at a unit fraction (0.0 = all a, 1.0 = all b)
///
/// Fractions outside of the unit range are clamped.
#[inline]
pub fn lerp_colors(a: Rgb, b: Rgb, fraction: f32) -> Rgb {
    blend_colors(a, b, fraction8(fraction))
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
