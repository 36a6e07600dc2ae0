use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A set of cards to draw from: the full 52-card deck, or the pool of
/// cards not yet visible anywhere (hole cards, board, dealt opponents).
///
/// No card is ever in two places at once: `unseen` subtracts from the
/// full deck, so a pool and the cards it excludes are disjoint by
/// construction.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards.
    ///
    /// ```
    /// use holdem_odds::deck::Deck;
    ///
    /// assert_eq!(Deck::standard().len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// The live pool: all 52 cards minus every card in `seen`.
    ///
    /// ```
    /// use holdem_odds::cards::parse_cards;
    /// use holdem_odds::deck::Deck;
    ///
    /// let seen = parse_cards("As Ks Qs").unwrap();
    /// assert_eq!(Deck::unseen(seen).len(), 49);
    /// ```
    pub fn unseen<I>(seen: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut gone = [false; 52];
        for c in seen {
            gone[c.index() as usize] = true;
        }
        let cards = Deck::standard()
            .cards
            .into_iter()
            .filter(|c| !gone[c.index() as usize])
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let mut seen = [false; 52];
        for c in d.as_slice() {
            assert!(!seen[c.index() as usize]);
            seen[c.index() as usize] = true;
        }
    }

    #[test]
    fn unseen_subtracts_visible_cards() {
        let seen = parse_cards("As Ks Qd Jh 10c 2c 3c").unwrap();
        let pool = Deck::unseen(seen.iter().copied());
        assert_eq!(pool.len(), 45);
        for c in &seen {
            assert!(!pool.as_slice().contains(c));
        }
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn draw_reduces_length_and_returns_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let hand = d.draw_n(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
    }
}
