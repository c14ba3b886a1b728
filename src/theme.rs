//! Light and dark palettes.
//!
//! Widgets never pick colors directly; they read a semantic role from the
//! active [`Palette`].

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl ThemeVariant {
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::light(),
            Self::Dark => Palette::dark(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

#[derive(Debug, Clone)]
pub struct Palette {
    // -- Chrome --
    pub base: Style,
    pub text_muted: Style,
    pub border: Style,
    pub border_focused: Style,
    pub title: Style,
    pub brand: Style,
    pub header: Style,

    // -- Sidebar --
    pub sidebar: Style,
    pub sidebar_heading: Style,
    pub nav_leaf_active: Style,
    pub nav_section_active: Style,
    pub nav_cursor: Style,
    pub badge_new: Style,
    pub badge_hot: Style,

    // -- Status --
    pub positive: Style,
    pub negative: Style,
    pub warning: Style,
    pub info: Style,

    // -- Charts --
    pub series_primary: Color,
    pub series_secondary: Color,
    pub series_tertiary: Color,
}

impl Palette {
    fn light() -> Self {
        Self {
            base: Style::default().fg(Color::Black).bg(Color::White),
            text_muted: Style::default().fg(Color::Gray),
            border: Style::default().fg(Color::Gray),
            border_focused: Style::default().fg(Color::Blue),
            title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            brand: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header: Style::default().fg(Color::Black).bg(Color::White),

            sidebar: Style::default().fg(Color::Gray).bg(Color::Rgb(64, 81, 137)),
            sidebar_heading: Style::default()
                .fg(Color::Rgb(131, 143, 185))
                .add_modifier(Modifier::BOLD),
            nav_leaf_active: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            nav_section_active: Style::default().fg(Color::Rgb(206, 212, 235)),
            nav_cursor: Style::default().bg(Color::Rgb(84, 101, 157)),
            badge_new: Style::default().fg(Color::White).bg(Color::Green),
            badge_hot: Style::default().fg(Color::White).bg(Color::Red),

            positive: Style::default().fg(Color::Green),
            negative: Style::default().fg(Color::Red),
            warning: Style::default().fg(Color::Yellow),
            info: Style::default().fg(Color::Cyan),

            series_primary: Color::Blue,
            series_secondary: Color::Yellow,
            series_tertiary: Color::Green,
        }
    }

    fn dark() -> Self {
        Self {
            base: Style::default().fg(Color::White).bg(Color::Rgb(26, 29, 33)),
            text_muted: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::LightCyan),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            brand: Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
            header: Style::default().fg(Color::White).bg(Color::Rgb(33, 37, 41)),

            sidebar: Style::default().fg(Color::Gray).bg(Color::Rgb(33, 37, 41)),
            sidebar_heading: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            nav_leaf_active: Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
            nav_section_active: Style::default().fg(Color::White),
            nav_cursor: Style::default().bg(Color::DarkGray),
            badge_new: Style::default().fg(Color::Black).bg(Color::LightGreen),
            badge_hot: Style::default().fg(Color::Black).bg(Color::LightRed),

            positive: Style::default().fg(Color::LightGreen),
            negative: Style::default().fg(Color::LightRed),
            warning: Style::default().fg(Color::LightYellow),
            info: Style::default().fg(Color::LightCyan),

            series_primary: Color::LightBlue,
            series_secondary: Color::LightYellow,
            series_tertiary: Color::LightGreen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemeVariant::Light.toggled(), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::Light.toggled().toggled(), ThemeVariant::Light);
    }

    #[test]
    fn test_palettes_differ() {
        let light = ThemeVariant::Light.palette();
        let dark = ThemeVariant::Dark.palette();
        assert_ne!(light.base, dark.base);
        assert_ne!(light.nav_leaf_active, dark.nav_leaf_active);
    }
}
