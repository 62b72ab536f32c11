use crate::card::Card;
use crate::error::GameError;
use crate::player::{Player, PlayerId, PlayerStatus};
use crate::state::{GamePhase, GameState};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// --- 展示层 -> 核心 ---
// 展示层只通过操作名写入，见 GameState::process_action。

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerAction {
    Fold,  // 弃牌
    Check, // 过牌
    Call,  // 跟注
}

impl PlayerAction {
    /// 按钮从左到右的顺序
    pub const ALL: [PlayerAction; 3] = [PlayerAction::Fold, PlayerAction::Check, PlayerAction::Call];

    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::Fold => "fold",
            PlayerAction::Check => "check",
            PlayerAction::Call => "call",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Fold => "弃牌",
            PlayerAction::Check => "过牌",
            PlayerAction::Call => "跟注",
        }
    }
}

impl FromStr for PlayerAction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(PlayerAction::Fold),
            "check" => Ok(PlayerAction::Check),
            "call" => Ok(PlayerAction::Call),
            _ => Err(GameError::UnknownAction(s.to_string())),
        }
    }
}

// --- 核心 -> 展示层 ---
// 状态变化后产生的事件，展示层据此播放发牌、刷新提示文字等。

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEvent {
    /// 新的一局开始
    HandStarted { phase: GamePhase },
    /// 给某个座位发了一张牌，背面朝上的牌对观看者是 None
    CardDealt {
        player_id: PlayerId,
        seat: usize,
        card: Option<Card>,
    },
    /// 玩家点击了一个操作按钮
    ActionChosen { action: PlayerAction },
}

/// 展示层读取的牌桌快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableView {
    pub players: Vec<PlayerView>,
    pub community_cards: Vec<Card>,
    pub pot: u32,
    pub cur_player_idx: usize,
    pub phase: GamePhase,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub is_human: bool,
    pub chips: u32,
    // 背面朝上的牌为 None
    pub hand: Vec<Option<Card>>,
    pub current_bet: u32,
    pub folded: bool,
    pub all_in: bool,
    pub status: PlayerStatus,
}

/// 观看者看不到背面朝上的牌
pub(crate) fn visible(card: &Card) -> Option<Card> {
    card.face_up.then_some(*card)
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        PlayerView {
            id: p.id,
            name: p.name.clone(),
            is_human: p.is_human,
            chips: p.chips,
            hand: p.hand.iter().map(visible).collect(),
            current_bet: p.current_bet,
            folded: p.folded,
            all_in: p.all_in,
            status: p.status(),
        }
    }
}

impl GameState {
    /// 生成给展示层的快照，牌堆不会出现在快照里
    pub fn view(&self) -> TableView {
        TableView {
            players: self.players.iter().map(PlayerView::from).collect(),
            community_cards: self.community_cards.clone(),
            pot: self.pot,
            cur_player_idx: self.cur_player_idx,
            phase: self.phase,
        }
    }
}
