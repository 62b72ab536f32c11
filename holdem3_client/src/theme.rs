//! 配色表，沿用手游版的颜色。

use holdem3_core::{Card, PlayerAction};
use tui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(15, 20, 31);
pub const TABLE: Color = Color::Rgb(26, 69, 41);
pub const PLAYER_CARD: Color = Color::Rgb(36, 41, 56);
pub const PLAYER_CARD_ACTIVE: Color = Color::Rgb(56, 87, 102);
pub const TEXT_WHITE: Color = Color::Rgb(245, 245, 250);
pub const TEXT_GOLD: Color = Color::Rgb(255, 214, 0);
pub const CHIP_GOLD: Color = Color::Rgb(255, 214, 0);
pub const POT_GOLD: Color = Color::Rgb(255, 224, 61);
pub const BTN_GREEN: Color = Color::Rgb(69, 191, 79);
pub const BTN_RED: Color = Color::Rgb(230, 79, 79);
pub const BTN_BLUE: Color = Color::Rgb(79, 150, 230);
pub const CARD_RED: Color = Color::Rgb(219, 61, 61);
pub const CARD_BLACK: Color = Color::Rgb(41, 41, 41);
pub const CARD_FACE: Color = Color::Rgb(250, 250, 250);
pub const CARD_BACK: Color = Color::Rgb(79, 31, 31);

/// 正面朝上的牌：白底，红色或黑色花色
pub fn card_face(card: &Card) -> Style {
    let fg = if card.is_red() { CARD_RED } else { CARD_BLACK };
    Style::default().fg(fg).bg(CARD_FACE).add_modifier(Modifier::BOLD)
}

pub fn card_back() -> Style {
    Style::default().fg(TEXT_WHITE).bg(CARD_BACK)
}

pub fn seat(active: bool) -> Style {
    let bg = if active { PLAYER_CARD_ACTIVE } else { PLAYER_CARD };
    Style::default().fg(TEXT_WHITE).bg(bg)
}

pub fn button(action: PlayerAction, selected: bool) -> Style {
    let bg = match action {
        PlayerAction::Fold => BTN_RED,
        PlayerAction::Check => BTN_BLUE,
        PlayerAction::Call => BTN_GREEN,
    };
    let style = Style::default().fg(TEXT_WHITE).bg(bg);
    if selected {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}
