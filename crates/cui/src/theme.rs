use arcanum_core::Theme;
use ratatui::prelude::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub card_back: Color,
    pub card_face: Color,
    pub selected: Color,
    pub reversed: Color,
    pub error: Color,
}

const DARK: Palette = Palette {
    bg: Color::Rgb(18, 16, 28),
    fg: Color::Rgb(226, 220, 240),
    muted: Color::Rgb(130, 122, 150),
    accent: Color::Rgb(212, 175, 55),
    border: Color::Rgb(88, 78, 120),
    card_back: Color::Rgb(76, 52, 128),
    card_face: Color::Rgb(240, 232, 210),
    selected: Color::Rgb(212, 175, 55),
    reversed: Color::Rgb(220, 90, 90),
    error: Color::Rgb(255, 110, 110),
};

const LIGHT: Palette = Palette {
    bg: Color::Rgb(246, 242, 232),
    fg: Color::Rgb(40, 34, 52),
    muted: Color::Rgb(120, 112, 128),
    accent: Color::Rgb(150, 100, 20),
    border: Color::Rgb(170, 160, 190),
    card_back: Color::Rgb(150, 120, 200),
    card_face: Color::Rgb(255, 255, 255),
    selected: Color::Rgb(190, 130, 20),
    reversed: Color::Rgb(180, 50, 50),
    error: Color::Rgb(190, 30, 30),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}
