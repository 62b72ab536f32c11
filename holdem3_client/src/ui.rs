use holdem3_core::{Card, PlayerAction, PlayerView, TableView};
use tui::backend::Backend;
use tui::layout::{Alignment, Rect};
use tui::style::{Modifier, Style};
use tui::text::{Span, Spans};
use tui::widgets::{Block, BorderType, Borders, Paragraph};
use tui::Frame;

use crate::app::App;
use crate::layout;
use crate::theme;

const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = layout::SEAT_HEIGHT * 2 + 6;

/// 筹码显示为 ¥5,000 这样的格式
pub fn format_chips(chips: u32) -> String {
    let digits = chips.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    out.push('¥');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn card_span(card: Option<&Card>) -> Span<'static> {
    match card {
        Some(card) => Span::styled(format!(" {} ", card), theme::card_face(card)),
        None => Span::styled(" ▒▒ ", theme::card_back()),
    }
}

fn cards_line(cards: &[Option<Card>]) -> Spans<'static> {
    let mut spans = Vec::with_capacity(cards.len() * 2);
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(card_span(card.as_ref()));
    }
    Spans::from(spans)
}

/// 每帧整体重绘，界面只读取牌局快照，从不修改牌局
pub fn draw<B: Backend>(f: &mut Frame<B>, app: &App) {
    let size = f.size();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let hint = Paragraph::new("终端窗口太小").style(Style::default().fg(theme::TEXT_GOLD).bg(theme::BG));
        f.render_widget(hint, size);
        return;
    }

    let view = app.state.view();
    let human_idx = view.players.iter().position(|p| p.is_human);
    let screen = layout::compute(size, view.players.len(), human_idx, PlayerAction::ALL.len());

    f.render_widget(Block::default().style(Style::default().bg(theme::BG)), size);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().bg(theme::TABLE)),
        screen.table,
    );

    for (seat, (player, area)) in view.players.iter().zip(&screen.seats).enumerate() {
        draw_seat(f, player, *area, seat == view.cur_player_idx, app.shown_cards(seat));
    }
    draw_center(f, &view, screen.center);

    let info = Paragraph::new(app.info.as_str())
        .style(Style::default().fg(theme::TEXT_GOLD).bg(theme::BG))
        .alignment(Alignment::Center);
    f.render_widget(info, screen.info);

    for (idx, (action, area)) in PlayerAction::ALL.iter().zip(&screen.buttons).enumerate() {
        let selected = idx == app.selected;
        let button = Paragraph::new(action.label())
            .style(theme::button(*action, selected))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).style(theme::button(*action, selected)));
        f.render_widget(button, *area);
    }
}

fn draw_seat<B: Backend>(f: &mut Frame<B>, player: &PlayerView, area: Rect, active: bool, shown: usize) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .style(theme::seat(active));
    if active {
        block = block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(theme::TEXT_WHITE).add_modifier(Modifier::BOLD));
    }

    let shown = shown.min(player.hand.len());
    let lines = vec![
        Spans::from(Span::styled(player.name.clone(), Style::default().fg(theme::TEXT_WHITE))),
        Spans::from(Span::styled(
            format_chips(player.chips),
            Style::default().fg(theme::CHIP_GOLD).add_modifier(Modifier::BOLD),
        )),
        Spans::from(Span::styled(player.status.to_string(), Style::default().fg(theme::TEXT_GOLD))),
        cards_line(&player.hand[..shown]),
    ];
    let panel = Paragraph::new(lines).block(block).alignment(Alignment::Center);
    f.render_widget(panel, area);
}

fn draw_center<B: Backend>(f: &mut Frame<B>, view: &TableView, area: Rect) {
    let community: Vec<Option<Card>> = view.community_cards.iter().copied().map(Some).collect();
    let lines = vec![
        Spans::from(Span::styled(
            format!("底池 {}", format_chips(view.pot)),
            Style::default().fg(theme::POT_GOLD).add_modifier(Modifier::BOLD),
        )),
        Spans::from(Span::styled(view.phase.to_string(), Style::default().fg(theme::TEXT_WHITE))),
        cards_line(&community),
    ];
    let center = Paragraph::new(lines)
        .style(Style::default().bg(theme::TABLE))
        .alignment(Alignment::Center);
    f.render_widget(center, area);
}
