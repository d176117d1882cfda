use colored::Color;

pub const PRIMARY: Color = Color::TrueColor {
    r: 0,
    g: 230,
    b: 190,
};
pub const ACCENT: Color = Color::TrueColor {
    r: 255,
    g: 0,
    b: 110,
};
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MAPPING: Color = Color::TrueColor {
    r: 140,
    g: 170,
    b: 255,
};
