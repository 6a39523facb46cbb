use crate::theme::Theme;

pub type Rgb = [f32; 3];

/// Colours used to draw a field, picked per theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Desaturated end of the blend.
    pub neutral: Rgb,
    pub primary: Rgb,
    pub secondary: Rgb,
    /// Bright centre of neurons facing the viewer.
    pub core: Rgb,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                neutral: [0.58, 0.62, 0.70],
                primary: [0.39, 0.40, 0.95],   // indigo
                secondary: [0.13, 0.83, 0.93], // cyan
                core: [0.95, 0.97, 1.0],
            },
            Theme::Light => Self {
                neutral: [0.45, 0.48, 0.55],
                primary: [0.31, 0.27, 0.90],
                secondary: [0.03, 0.57, 0.70],
                core: [0.20, 0.22, 0.45],
            },
        }
    }

    /// Primary colour pulled toward neutral as saturation drops.
    #[inline]
    pub fn primary_at(&self, saturation: f32) -> Rgb {
        mix(self.neutral, self.primary, saturation)
    }

    #[inline]
    pub fn secondary_at(&self, saturation: f32) -> Rgb {
        mix(self.neutral, self.secondary, saturation)
    }
}

#[inline]
pub fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// CSS `rgba(r, g, b, a)` with 0-255 channels.
pub fn rgba_css(c: Rgb, alpha: f32) -> String {
    let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {:.3})",
        ch(c[0]),
        ch(c[1]),
        ch(c[2]),
        alpha.clamp(0.0, 1.0)
    )
}
