use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("board must have 0, 3, 4 or 5 cards, got {0}")]
    IllegalBoardLen(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards. Always distinct.
///
/// ```
/// use holdem_odds::cards::{Card, Rank, Suit};
/// use holdem_odds::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.to_string(), "As Ks");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    /// Like `try_new`, but stores the higher card first. Combinations built
    /// this way compare equal regardless of the order the cards came in.
    pub fn normalized(a: Card, b: Card) -> Result<Self, HandError> {
        if a >= b {
            Self::try_new(a, b)
        } else {
            Self::try_new(b, a)
        }
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 2 {
            return Err(HandError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }

    /// Return the first (left) hole card.
    pub fn first(&self) -> Card {
        self.0
    }

    /// Return the second (right) hole card.
    pub fn second(&self) -> Card {
        self.1
    }

    /// Return both hole cards as a fixed array.
    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 == card || self.1 == card
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Betting street, derived from how much of the board is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Street for a given board length. Lengths 1, 2 and >5 never occur in
    /// a Hold'em hand and are rejected.
    pub fn from_board_len(len: usize) -> Result<Street, HandError> {
        match len {
            0 => Ok(Street::Preflop),
            3 => Ok(Street::Flop),
            4 => Ok(Street::Turn),
            5 => Ok(Street::River),
            n => Err(HandError::IllegalBoardLen(n)),
        }
    }
}

/// Community cards. Grows 0 -> 3 -> 4 -> 5 across streets; scoring ignores
/// the arrival order.
///
/// ```
/// use holdem_odds::hand::{Board, Street};
///
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// assert_eq!(board.street(), Street::Flop);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Empty preflop board.
    pub fn preflop() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        Street::from_board_len(cards.len())?;
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn street(&self) -> Street {
        // Length was validated at construction.
        match self.cards.len() {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.cards {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Validate that hole cards and board form a legal Hold'em state: distinct
/// hole cards, street-shaped board, and no card in both sets.
///
/// ```
/// use holdem_odds::hand::{validate_state, Board, HoleCards};
///
/// let hole: HoleCards = "As Ks".parse().unwrap();
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// validate_state(&hole, &board).unwrap();
/// ```
pub fn validate_state(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    Street::from_board_len(board.len())?;
    if board.contains(hole.first()) || board.contains(hole.second()) {
        return Err(HandError::Overlap);
    }
    Ok(())
}
