use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use holdem3_core::{GameEvent, GameState, PlayerAction};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

pub const WELCOME: &str = "欢迎来到德州扑克3";
/// 每隔几帧亮出一张刚发的牌
pub const DEAL_INTERVAL_FRAMES: u64 = 3;

/// 终端界面的全部状态。牌局状态的修改和绘制都在同一个事件循环里进行。
pub struct App {
    pub state: GameState,
    rng: StdRng,
    pub info: String,
    pub selected: usize, // 当前选中的操作按钮
    pub should_quit: bool,
    frame: u64,
    // 尚未在界面上播放的发牌事件
    pending: VecDeque<GameEvent>,
    // 每个座位已经亮出的底牌张数
    dealt: Vec<usize>,
}

impl App {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut app = App {
            state: GameState::default_table(),
            rng,
            info: WELCOME.to_string(),
            selected: 0,
            should_quit: false,
            frame: 0,
            pending: VecDeque::new(),
            dealt: Vec::new(),
        };
        app.start_hand();
        app
    }

    pub fn start_hand(&mut self) {
        self.dealt = vec![0; self.state.players.len()];
        match self.state.start_hand(&mut self.rng) {
            Ok(events) => self.pending = events.into(),
            Err(e) => {
                warn!("发牌失败: {}", e);
                self.pending.clear();
                self.info = format!("发牌失败: {}", e);
            }
        }
    }

    /// 按下一个操作按钮
    pub fn press(&mut self, action: PlayerAction) {
        if let Some(idx) = PlayerAction::ALL.iter().position(|a| *a == action) {
            self.selected = idx;
        }
        match self.state.process_action(action.name()) {
            Ok(event) => self.apply(event),
            Err(e) => {
                warn!("操作失败: {}", e);
                self.info = e.to_string();
            }
        }
    }

    fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::HandStarted { phase } => debug!("界面进入 {} 阶段", phase),
            GameEvent::CardDealt { seat, .. } => {
                if let Some(count) = self.dealt.get_mut(seat) {
                    *count += 1;
                }
            }
            GameEvent::ActionChosen { action } => {
                self.info = format!("你选择了: {}", action.label());
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let buttons = PlayerAction::ALL.len();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.should_quit = true,
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('f') => self.press(PlayerAction::Fold),
            KeyCode::Char('k') => self.press(PlayerAction::Check),
            KeyCode::Char('c') => self.press(PlayerAction::Call),
            KeyCode::Left => self.selected = (self.selected + buttons - 1) % buttons,
            KeyCode::Right => self.selected = (self.selected + 1) % buttons,
            KeyCode::Enter | KeyCode::Char(' ') => self.press(PlayerAction::ALL[self.selected]),
            KeyCode::Char('n') => self.start_hand(),
            _ => {}
        }
    }

    /// 每帧调用一次，按固定间隔播放一张发牌
    pub fn on_tick(&mut self) {
        self.frame += 1;
        if self.frame % DEAL_INTERVAL_FRAMES != 0 {
            return;
        }
        while let Some(event) = self.pending.pop_front() {
            let is_deal = matches!(event, GameEvent::CardDealt { .. });
            self.apply(event);
            if is_deal {
                break;
            }
        }
    }

    pub fn is_dealing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// 某个座位在界面上可以显示的底牌张数
    pub fn shown_cards(&self, seat: usize) -> usize {
        self.dealt.get(seat).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn tick(app: &mut App, frames: u64) {
        for _ in 0..frames {
            app.on_tick();
        }
    }

    #[test]
    fn test_new_app_deals_first_hand() {
        let app = App::new(Some(3));
        assert_eq!(app.info, WELCOME);
        assert_eq!(app.state.deck_len(), 42);
        assert!(app.state.players.iter().all(|p| p.hand.len() == 2));
        // 牌还没在界面上亮出
        assert!(app.is_dealing());
        assert_eq!(app.shown_cards(0), 0);
    }

    #[test]
    fn test_cards_are_revealed_one_per_interval() {
        let mut app = App::new(Some(3));
        tick(&mut app, DEAL_INTERVAL_FRAMES);
        assert_eq!(app.shown_cards(0), 1);
        assert_eq!(app.shown_cards(1), 0);

        tick(&mut app, DEAL_INTERVAL_FRAMES);
        assert_eq!(app.shown_cards(0), 2);

        tick(&mut app, DEAL_INTERVAL_FRAMES * 20);
        assert!(!app.is_dealing());
        assert!((0..5).all(|seat| app.shown_cards(seat) == 2));
    }

    #[test]
    fn test_action_keys_update_info_label() {
        let mut app = App::new(Some(9));
        app.on_key(key(KeyCode::Char('f')));
        assert_eq!(app.info, "你选择了: 弃牌");
        assert_eq!(app.selected, 0);

        app.on_key(key(KeyCode::Char('c')));
        assert_eq!(app.info, "你选择了: 跟注");
        assert_eq!(app.selected, 2);

        // 操作不会改变牌局
        assert!(app.state.players.iter().all(|p| !p.folded));
        assert_eq!(app.state.pot, 0);
    }

    #[test]
    fn test_button_selection_wraps() {
        let mut app = App::new(Some(9));
        app.on_key(key(KeyCode::Left));
        assert_eq!(app.selected, 2);
        app.on_key(key(KeyCode::Right));
        app.on_key(key(KeyCode::Right));
        assert_eq!(app.selected, 1);
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.info, "你选择了: 过牌");
    }

    #[test]
    fn test_new_hand_and_quit() {
        let mut app = App::new(Some(4));
        tick(&mut app, 100);
        app.on_key(key(KeyCode::Char('n')));
        assert!(app.is_dealing());
        assert_eq!(app.shown_cards(4), 0);
        assert_eq!(app.state.deck_len(), 42);

        assert!(!app.should_quit);
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
