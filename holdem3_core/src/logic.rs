use crate::error::GameError;
use crate::message::{visible, GameEvent, PlayerAction};
use crate::state::{GamePhase, GameState};
use rand::Rng;
use tracing::{debug, info};

// --- 核心游戏流程函数 ---

impl GameState {
    /// 开始新的一局游戏
    ///
    /// - 重新建牌并洗牌。
    /// - 清空公共牌和奖池，重置每个玩家的本局状态。
    /// - 按座位顺序给每个玩家连发两张底牌，真人玩家的牌正面朝上，其余背面朝上。
    /// - 设置游戏阶段为 PreFlop。
    ///
    /// 返回给展示层的事件。发牌失败时整局发牌中止，错误原样返回，绝不补牌。
    pub fn start_hand<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<GameEvent>, GameError> {
        self.deck.reset_and_shuffle(rng);
        self.community_cards.clear();
        self.pot = 0;
        self.current_bet = 0;
        for player in &mut self.players {
            player.reset_for_new_hand();
        }

        let mut events = Vec::with_capacity(1 + self.players.len() * 2);
        events.push(GameEvent::HandStarted { phase: GamePhase::PreFlop });

        for (seat, player) in self.players.iter_mut().enumerate() {
            for _ in 0..2 {
                let mut card = self.deck.deal_one()?;
                card.face_up = player.is_human;
                player.hand.push(card);
                events.push(GameEvent::CardDealt {
                    player_id: player.id,
                    seat,
                    card: visible(&card),
                });
            }
            debug!("已给 {} 发两张底牌", player.name);
        }

        self.phase = GamePhase::PreFlop;
        info!("新的一局开始，{} 名玩家，牌堆剩余 {} 张", self.players.len(), self.deck.len());
        Ok(events)
    }

    /// 替某个座位下注，实际投入的筹码进入奖池
    ///
    /// 这里没有下注轮的规则 (最小加注、边池等)，只做筹码记账。
    /// 奖池放不下时返回 PotOverflow，玩家和奖池都不会被修改。
    pub fn post_bet(&mut self, seat: usize, amount: u32) -> Result<u32, GameError> {
        let player = self.players.get_mut(seat).ok_or(GameError::InvalidSeat(seat))?;
        let to_wager = amount.min(player.chips);
        let pot = self.pot.checked_add(to_wager).ok_or(GameError::PotOverflow(to_wager))?;
        let wagered = player.place_bet(amount);
        self.pot = pot;
        self.current_bet = self.current_bet.max(player.current_bet);
        debug!("{} 下注 {}，奖池 {}", player.name, wagered, self.pot);
        Ok(wagered)
    }

    /// 处理展示层发来的操作
    ///
    /// 目前只解析操作名并通知展示层更新提示文字，不推进牌局。
    /// 下注轮、摊牌等逻辑接入时从这里开始。
    pub fn process_action(&mut self, action_name: &str) -> Result<GameEvent, GameError> {
        let action: PlayerAction = action_name.parse()?;
        info!("玩家选择了 {}", action.name());
        Ok(GameEvent::ActionChosen { action })
    }
}

// --- 单元测试 ---
