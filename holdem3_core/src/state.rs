use crate::card::Card;
use crate::deck::Deck;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 默认牌桌：四名电脑玩家加一名真人玩家
pub const AI_STARTING_CHIPS: u32 = 5000;
pub const HUMAN_STARTING_CHIPS: u32 = 10000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    // 座位顺序即发牌顺序，玩家跨局保留
    pub players: Vec<Player>,
    // 公共牌，0 到 5 张，只增不减
    pub community_cards: Vec<Card>,
    pub pot: u32,  // 总奖池金额，单局内只增不减
    pub current_bet: u32, // 当前轮下注的最高金额
    pub phase: GamePhase,
    pub cur_player_idx: usize,  // 当前应该行动的玩家在 players 中的索引
    // 每局重新洗牌，不会交给展示层
    #[serde(skip)]
    pub deck: Deck,
}

/// 目前只有 PreFlop 会被实际驱动
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    PreFlop,
    Flop,
    Turn,
    River,
}

impl GameState {
    /// 第一个真人座位先行动，没有真人时从 0 号座位开始
    pub fn new(players: Vec<Player>) -> Self {
        let cur_player_idx = players.iter().position(|p| p.is_human).unwrap_or(0);
        GameState {
            players,
            community_cards: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            phase: GamePhase::PreFlop,
            cur_player_idx,
            deck: Deck::default(),
        }
    }

    pub fn default_table() -> Self {
        let mut players: Vec<Player> = (1..=4)
            .map(|i| Player::new(format!("AI {}", i), false, AI_STARTING_CHIPS))
            .collect();
        players.push(Player::new("我", true, HUMAN_STARTING_CHIPS));
        Self::new(players)
    }

    pub fn human_idx(&self) -> Option<usize> {
        self.players.iter().position(|p| p.is_human)
    }

    pub fn human(&self) -> Option<&Player> {
        self.human_idx().map(|idx| &self.players[idx])
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.cur_player_idx)
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            GamePhase::PreFlop => "翻牌前",
            GamePhase::Flop => "翻牌",
            GamePhase::Turn => "转牌",
            GamePhase::River => "河牌",
        })
    }
}
