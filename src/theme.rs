//! Light/dark palettes for both animators.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// 8-bit RGB with a fractional alpha, formatted the way canvas and SVG
/// attributes expect it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_css(self) -> String {
        self.to_string()
    }

    /// `#rrggbb`, dropping alpha (SVG fills carry opacity separately).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

const INDIGO: Rgba = Rgba::new(129, 140, 248, 1.0);
const VIOLET: Rgba = Rgba::new(192, 132, 252, 1.0);
const DEEP_INDIGO: Rgba = Rgba::new(79, 70, 229, 1.0);
const DEEP_VIOLET: Rgba = Rgba::new(147, 51, 234, 1.0);

/// How blobs combine with what is already on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Normal,
    /// Additive-style lightening, for dark backgrounds.
    Screen,
    /// Subtractive-style darkening, for light backgrounds.
    Multiply,
}

impl BlendMode {
    /// Canvas `globalCompositeOperation` value.
    pub fn composite_operation(self) -> &'static str {
        match self {
            BlendMode::Normal => "source-over",
            BlendMode::Screen => "screen",
            BlendMode::Multiply => "multiply",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldPalette {
    pub blobs: [Rgba; 2],
    pub particles: [Rgba; 3],
    pub connection: Rgba,
    pub blob_blend: BlendMode,
}

pub fn field_palette(theme: Theme) -> FieldPalette {
    match theme {
        Theme::Dark => FieldPalette {
            blobs: [INDIGO.with_alpha(0.08), VIOLET.with_alpha(0.08)],
            particles: [
                INDIGO.with_alpha(0.5),
                VIOLET.with_alpha(0.5),
                Rgba::new(255, 255, 255, 0.3),
            ],
            connection: INDIGO,
            blob_blend: BlendMode::Screen,
        },
        Theme::Light => FieldPalette {
            blobs: [DEEP_INDIGO.with_alpha(0.12), DEEP_VIOLET.with_alpha(0.12)],
            particles: [
                DEEP_INDIGO.with_alpha(0.5),
                DEEP_VIOLET.with_alpha(0.5),
                Rgba::new(100, 116, 139, 0.4), // slate
            ],
            connection: DEEP_INDIGO,
            blob_blend: BlendMode::Multiply,
        },
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CompanionPalette {
    pub body: Rgba,
    pub eye: Rgba,
    pub pupil: Rgba,
    pub cheek: Rgba,
    pub mouth: Rgba,
    pub glow: Rgba,
}

pub fn companion_palette(theme: Theme) -> CompanionPalette {
    match theme {
        Theme::Dark => CompanionPalette {
            body: INDIGO.with_alpha(0.8),
            eye: Rgba::new(255, 255, 255, 1.0),
            pupil: Rgba::new(0, 0, 0, 1.0),
            cheek: Rgba::new(255, 182, 193, 0.6),
            mouth: Rgba::new(255, 255, 255, 0.8),
            glow: INDIGO.with_alpha(0.5),
        },
        Theme::Light => CompanionPalette {
            body: DEEP_INDIGO.with_alpha(0.85),
            eye: Rgba::new(255, 255, 255, 1.0),
            pupil: Rgba::new(30, 27, 75, 1.0),
            cheek: Rgba::new(244, 114, 182, 0.55),
            mouth: Rgba::new(255, 255, 255, 0.9),
            glow: DEEP_INDIGO.with_alpha(0.35),
        },
    }
}
