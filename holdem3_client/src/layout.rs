use tui::layout::{Constraint, Direction, Layout, Rect};

/// 座位面板高度：边框两行，加上名字、筹码、状态、底牌四行
pub const SEAT_HEIGHT: u16 = 6;
const INFO_HEIGHT: u16 = 1;
const BUTTON_HEIGHT: u16 = 3;

/// 一帧里各个部件的位置
#[derive(Debug, Clone)]
pub struct ScreenLayout {
    pub table: Rect,
    pub center: Rect,
    // 按座位索引排列
    pub seats: Vec<Rect>,
    pub info: Rect,
    pub buttons: Vec<Rect>,
}

fn even_split(area: Rect, direction: Direction, n: usize) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Ratio(1, n as u32)).collect();
    Layout::default().direction(direction).constraints(constraints).split(area)
}

/// 根据终端大小计算牌桌布局
///
/// 电脑玩家沿牌桌上沿排开，真人玩家固定在下方正中。没有真人时所有座位都在上沿。
pub fn compute(area: Rect, seat_count: usize, human_idx: Option<usize>, button_count: usize) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(SEAT_HEIGHT * 2),
            Constraint::Length(INFO_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
        ].as_ref())
        .split(area);
    let (table, info, button_bar) = (rows[0], rows[1], rows[2]);

    let table_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEAT_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(if human_idx.is_some() { SEAT_HEIGHT } else { 0 }),
        ].as_ref())
        .split(table);

    let top_count = seat_count - usize::from(human_idx.is_some());
    let mut top_slots = even_split(table_rows[0], Direction::Horizontal, top_count).into_iter();

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ].as_ref())
        .split(table_rows[2])[1];

    let seats = (0..seat_count)
        .map(|idx| {
            if Some(idx) == human_idx {
                bottom
            } else {
                top_slots.next().unwrap_or_default()
            }
        })
        .collect();

    ScreenLayout {
        table,
        center: table_rows[1],
        seats,
        info,
        buttons: even_split(button_bar, Direction::Horizontal, button_count),
    }
}
