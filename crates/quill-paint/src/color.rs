use std::str::FromStr;

use palette::{LinSrgba, Srgb, Srgba};

use crate::scene::ColorLinPremul;

// sRGB ↔ linear premultiplied conversions.
impl ColorLinPremul {
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// sRGB bytes, as written in UI code.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        let lin: LinSrgba = Srgba::new(r, g, b, a).into_format::<f32, f32>().into_linear();
        Self::from_lin_rgba(lin.red, lin.green, lin.blue, lin.alpha)
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// `#rrggbb` or `#rgb`, leading `#` optional, fully opaque.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let c = Srgb::<u8>::from_str(hex).ok()?;
        Some(Self::rgb(c.red, c.green, c.blue))
    }

    pub fn from_lin_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r * a,
            g: g * a,
            b: b * a,
            a,
        }
    }

    /// Same colour, alpha scaled by `factor`.
    pub fn with_alpha(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: self.r * f,
            g: self.g * f,
            b: self.b * f,
            a: self.a * f,
        }
    }

    /// Back to unpremultiplied sRGB bytes.
    pub fn to_srgba_u8(&self) -> [u8; 4] {
        if self.a <= f32::EPSILON {
            return [0, 0, 0, 0];
        }
        let lin = LinSrgba::new(self.r / self.a, self.g / self.a, self.b / self.a, self.a);
        let srgb: Srgba<u8> = Srgba::<f32>::from_linear(lin).into_format();
        [srgb.red, srgb.green, srgb.blue, srgb.alpha]
    }
}
