use crate::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type PlayerId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_human: bool,
    pub chips: u32,        // 剩余筹码，跨局保留
    pub hand: Vec<Card>,   // 底牌，0 到 2 张
    pub current_bet: u32,  // 本局已投入的筹码
    pub folded: bool,
    pub all_in: bool,
}

/// 座位上显示的状态标签
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    Idle,
    Betting(u32),
    AllIn,
    Folded,
}

impl Player {
    pub fn new(name: impl Into<String>, is_human: bool, chips: u32) -> Self {
        Player {
            id: Uuid::new_v4(),
            name: name.into(),
            is_human,
            chips,
            hand: Vec::with_capacity(2),
            current_bet: 0,
            folded: false,
            all_in: false,
        }
    }

    /// 新一局开始前清空本局状态，筹码不变
    pub fn reset_for_new_hand(&mut self) {
        self.hand.clear();
        self.current_bet = 0;
        self.folded = false;
        self.all_in = false;
    }

    /// 下注，返回实际投入的筹码
    ///
    /// 金额不小于剩余筹码时按剩余筹码全下。
    /// 从筹码中扣除的数额与加到 `current_bet` 上的数额严格相等。
    pub fn place_bet(&mut self, amount: u32) -> u32 {
        let amount = if amount >= self.chips {
            self.all_in = true;
            self.chips
        } else {
            amount
        };
        self.chips -= amount;
        self.current_bet += amount;
        amount
    }

    /// 弃牌优先于全下，全下优先于下注额
    pub fn status(&self) -> PlayerStatus {
        if self.folded {
            PlayerStatus::Folded
        } else if self.all_in {
            PlayerStatus::AllIn
        } else if self.current_bet > 0 {
            PlayerStatus::Betting(self.current_bet)
        } else {
            PlayerStatus::Idle
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerStatus::Idle => Ok(()),
            PlayerStatus::Betting(amount) => write!(f, "下注:{}", amount),
            PlayerStatus::AllIn => write!(f, "全下"),
            PlayerStatus::Folded => write!(f, "弃牌"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn test_bet_below_stack() {
        let mut p = Player::new("AI 1", false, 5000);
        assert_eq!(p.place_bet(200), 200);
        assert_eq!(p.chips, 4800);
        assert_eq!(p.current_bet, 200);
        assert!(!p.all_in);

        // 同一局内继续下注会累加
        assert_eq!(p.place_bet(300), 300);
        assert_eq!(p.chips, 4500);
        assert_eq!(p.current_bet, 500);
        assert!(!p.all_in);
    }

    #[test]
    fn test_bet_above_stack_is_clamped() {
        let mut p = Player::new("AI 2", false, 100);
        assert_eq!(p.place_bet(150), 100);
        assert_eq!(p.chips, 0);
        assert_eq!(p.current_bet, 100);
        assert!(p.all_in);
    }

    #[test]
    fn test_bet_exact_stack_goes_all_in() {
        let mut p = Player::new("我", true, 300);
        p.place_bet(100);
        assert_eq!(p.place_bet(200), 200);
        assert_eq!(p.chips, 0);
        assert_eq!(p.current_bet, 300);
        assert!(p.all_in);
    }

    #[test]
    fn test_zero_bet_on_empty_stack_is_all_in() {
        let mut p = Player::new("AI 1", false, 0);
        assert_eq!(p.place_bet(0), 0);
        assert_eq!(p.chips, 0);
        assert_eq!(p.current_bet, 0);
        assert!(p.all_in);
        assert_eq!(p.status(), PlayerStatus::AllIn);
    }

    #[test]
    fn test_bet_conserves_chips() {
        let mut p = Player::new("AI 3", false, 1234);
        for amount in [0, 1, 500, 10_000, 7] {
            let before = p.chips + p.current_bet;
            let wagered = p.place_bet(amount);
            assert!(wagered <= amount);
            assert_eq!(p.chips + p.current_bet, before);
        }
    }

    #[test]
    fn test_reset_for_new_hand() {
        let mut p = Player::new("AI 4", false, 500);
        p.hand = vec![Card::new(Rank::Ace, Suit::Spade), Card::new(Rank::King, Suit::Heart)];
        p.place_bet(600);
        p.folded = true;

        p.reset_for_new_hand();
        assert!(p.hand.is_empty());
        assert_eq!(p.current_bet, 0);
        assert!(!p.folded);
        assert!(!p.all_in);
        // 筹码不会被重置
        assert_eq!(p.chips, 0);
    }

    #[test]
    fn test_status_label() {
        let mut p = Player::new("AI 1", false, 1000);
        assert_eq!(p.status(), PlayerStatus::Idle);
        assert_eq!(p.status().to_string(), "");

        p.place_bet(50);
        assert_eq!(p.status().to_string(), "下注:50");

        p.place_bet(2000);
        assert_eq!(p.status(), PlayerStatus::AllIn);
        assert_eq!(p.status().to_string(), "全下");

        p.folded = true;
        assert_eq!(p.status().to_string(), "弃牌");
    }
}
