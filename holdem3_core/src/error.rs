use thiserror::Error;

/// 核心逻辑的错误类型
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// 本局已无牌可发，当前发牌必须中止
    #[error("牌堆已空，无法继续发牌")]
    EmptyDeck,

    /// 奖池超出 u32 能表示的范围，下注被拒绝，牌局状态不变
    #[error("奖池溢出，无法再加入 {0} 筹码")]
    PotOverflow(u32),

    #[error("未知的操作: {0}")]
    UnknownAction(String),

    #[error("座位 {0} 不存在")]
    InvalidSeat(usize),
}
