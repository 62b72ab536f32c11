//! # 德州扑克3 核心逻辑库
//!
//! 这个 `core` crate 包含牌、牌堆、玩家筹码记账和发牌流程，
//! 以及展示层读写牌局的接口 (快照、事件、操作)。
//! 它不包含牌力评估、下注轮和摊牌，也不依赖任何界面实现。

mod card;
mod deck;
mod error;
mod logic;
mod message;
mod player;
mod state;

pub use card::*;

pub use deck::*;

pub use error::*;

pub use message::*;

pub use player::*;

pub use state::*;
