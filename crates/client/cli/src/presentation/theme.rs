//! Colors and glyphs for battle elements, health, and difficulty.

use battle_core::{Difficulty, ElementType};
use ratatui::style::{Color, Modifier, Style};

/// Accent color for moves and attack effects of an element.
pub fn element_color(element: ElementType) -> Color {
    match element {
        ElementType::Normal => Color::Gray,
        ElementType::Fire => Color::Red,
        ElementType::Water => Color::Blue,
        ElementType::Electric => Color::Yellow,
        ElementType::Grass => Color::Green,
        ElementType::Ice => Color::Cyan,
        ElementType::Fighting => Color::Rgb(234, 88, 12),
        ElementType::Poison => Color::Magenta,
        ElementType::Ground => Color::Rgb(217, 119, 6),
        ElementType::Flying => Color::Rgb(129, 140, 248),
        ElementType::Psychic => Color::LightMagenta,
        ElementType::Bug => Color::LightGreen,
        ElementType::Rock => Color::Rgb(120, 113, 108),
        ElementType::Ghost => Color::Rgb(139, 92, 246),
        ElementType::Dragon => Color::Rgb(20, 184, 166),
        ElementType::Dark => Color::DarkGray,
        ElementType::Steel => Color::Rgb(161, 161, 170),
        ElementType::Fairy => Color::LightRed,
    }
}

/// Effect glyph shown next to an attack of this element.
pub fn element_icon(element: ElementType) -> &'static str {
    match element {
        ElementType::Normal => "●",
        ElementType::Fire => "🔥",
        ElementType::Water => "💧",
        ElementType::Electric => "⚡",
        ElementType::Grass => "🌿",
        ElementType::Ice => "❄",
        ElementType::Fighting => "👊",
        ElementType::Poison => "☠",
        ElementType::Ground => "⛰",
        ElementType::Flying => "🌪",
        ElementType::Psychic => "🔮",
        ElementType::Bug => "🐛",
        ElementType::Rock => "🪨",
        ElementType::Ghost => "👻",
        ElementType::Dragon => "🐉",
        ElementType::Dark => "🌑",
        ElementType::Steel => "⚙",
        ElementType::Fairy => "✨",
    }
}

/// Health bar color: green above 50%, yellow above 20%, red otherwise.
pub fn health_color(percent: u32) -> Color {
    match percent {
        51.. => Color::Green,
        21..=50 => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn key_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::Gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_thresholds() {
        assert_eq!(health_color(100), Color::Green);
        assert_eq!(health_color(51), Color::Green);
        assert_eq!(health_color(50), Color::Yellow);
        assert_eq!(health_color(21), Color::Yellow);
        assert_eq!(health_color(20), Color::Red);
        assert_eq!(health_color(0), Color::Red);
    }

    #[test]
    fn every_element_has_an_icon() {
        use strum::IntoEnumIterator;

        for element in ElementType::iter() {
            assert!(!element_icon(element).is_empty(), "{element} has no icon");
        }
    }
}
