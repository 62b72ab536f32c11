use crate::card::{Card, Rank, Suit};
use crate::error::GameError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 52;

/// 一副牌。牌堆顶在 Vec 末尾，发牌只会让牌堆变小，直到下一次重置。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

/// 创建一副完整的 52 张扑克牌 (未洗牌)
fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in &Suit::ALL {
        for &rank in &Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

impl Deck {
    /// 重新放入全部 52 张牌并均匀洗牌
    pub fn reset_and_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = create_deck();
        self.cards.shuffle(rng);
    }

    /// 从牌堆顶取一张牌
    pub fn deal_one(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn shuffled(seed: u64) -> Deck {
        let mut deck = Deck::default();
        deck.reset_and_shuffle(&mut StdRng::seed_from_u64(seed));
        deck
    }

    #[test]
    fn test_reset_yields_52_unique_cards() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::default();
        for _ in 0..20 {
            deck.reset_and_shuffle(&mut rng);
            assert_eq!(deck.len(), DECK_SIZE);
            let keys: HashSet<_> = deck.cards().iter().map(Card::key).collect();
            assert_eq!(keys.len(), DECK_SIZE);
            assert!(deck.cards().iter().all(|c| c.face_up));
        }
    }

    #[test]
    fn test_reset_refills_partially_dealt_deck() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = Deck::default();
        deck.reset_and_shuffle(&mut rng);
        for _ in 0..30 {
            deck.deal_one().unwrap();
        }
        deck.reset_and_shuffle(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn test_deal_n_distinct_cards() {
        let mut deck = shuffled(42);
        let mut seen = HashSet::new();
        for n in 1..=15 {
            let card = deck.deal_one().unwrap();
            assert!(seen.insert(card.key()), "重复发出了 {}", card);
            assert_eq!(deck.len(), DECK_SIZE - n);
        }
        // 已发出的牌不会留在牌堆里
        assert!(deck.cards().iter().all(|c| !seen.contains(&c.key())));
    }

    #[test]
    fn test_deal_from_exhausted_deck() {
        let mut deck = shuffled(3);
        for _ in 0..DECK_SIZE {
            assert!(deck.deal_one().is_ok());
        }
        assert!(deck.is_empty());
        assert_eq!(deck.deal_one(), Err(GameError::EmptyDeck));
        assert_eq!(Deck::default().deal_one(), Err(GameError::EmptyDeck));
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let order = |d: &Deck| d.cards().iter().map(Card::key).collect::<Vec<_>>();
        assert_eq!(order(&shuffled(99)), order(&shuffled(99)));
        assert_ne!(order(&shuffled(99)), order(&shuffled(100)));
        assert_ne!(order(&shuffled(99)), create_deck().iter().map(Card::key).collect::<Vec<_>>());
    }
}
