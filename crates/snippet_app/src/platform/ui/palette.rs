use crossterm::style::Color;
use snippet_core::Theme;

use super::render::LineStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub muted: Color,
    pub code: Color,
    pub info: Color,
    pub error: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb { r: 30, g: 30, b: 30 },
    text: Color::Rgb { r: 224, g: 224, b: 224 },
    accent: Color::Rgb { r: 97, g: 218, b: 251 },
    muted: Color::Rgb { r: 128, g: 128, b: 128 },
    code: Color::Rgb { r: 206, g: 145, b: 120 },
    info: Color::Rgb { r: 106, g: 153, b: 85 },
    error: Color::Rgb { r: 244, g: 71, b: 71 },
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb { r: 250, g: 250, b: 250 },
    text: Color::Rgb { r: 33, g: 33, b: 33 },
    accent: Color::Rgb { r: 0, g: 92, b: 197 },
    muted: Color::Rgb { r: 110, g: 110, b: 110 },
    code: Color::Rgb { r: 163, g: 21, b: 21 },
    info: Color::Rgb { r: 34, g: 134, b: 58 },
    error: Color::Rgb { r: 203, g: 36, b: 49 },
};

pub fn for_theme(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}

impl Palette {
    pub fn color(&self, style: LineStyle) -> Color {
        match style {
            LineStyle::Header | LineStyle::Title => self.accent,
            LineStyle::Text => self.text,
            LineStyle::Muted => self.muted,
            LineStyle::Code => self.code,
            LineStyle::Info => self.info,
            LineStyle::Error => self.error,
        }
    }
}
