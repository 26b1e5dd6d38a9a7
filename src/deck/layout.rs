//! Deck layout: the ordered cards of one deal.

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::card::{Card, CardId, PairValue};
use crate::core::config::BoardSize;
use crate::core::error::DeckError;
use crate::core::rng::GameRng;

/// The ordered cards of one game.
///
/// Positions are row-major: position `p` sits at row `p / side`, column
/// `p % side`. Cards never change once dealt; a new game gets a new `Deck`.
///
/// ## Usage
///
/// ```
/// use memory_match::core::{BoardSize, CardId, GameRng};
/// use memory_match::deck::Deck;
///
/// let mut rng = GameRng::new(42);
/// let deck = Deck::generate(BoardSize::new(4), &mut rng);
///
/// assert_eq!(deck.len(), 16);
/// assert!(deck.contains(CardId::new(16)));
/// assert!(!deck.contains(CardId::new(17)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<Card>,
    /// card id -> position
    positions: FxHashMap<CardId, usize>,
}

impl Deck {
    /// Deal a fresh, uniformly shuffled deck for `size`.
    ///
    /// Deals `size.pair_count()` values, two cards each, with ids following
    /// the standard layout (`2v - 1`, `2v`). An odd cell count leaves the last
    /// cell empty.
    #[must_use]
    pub fn generate(size: BoardSize, rng: &mut GameRng) -> Self {
        let mut cards = ordered_cards(size.pair_count());
        rng.shuffle(&mut cards);
        Self::index(cards.into_iter().collect())
    }

    /// Build a deck from a fixed layout.
    ///
    /// Ids must be unique and every value must appear exactly twice.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, DeckError> {
        let cards: Vector<Card> = cards.into_iter().collect();
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut value_counts: FxHashMap<PairValue, usize> = FxHashMap::default();
        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(DeckError::DuplicateId(card.id));
            }
            *value_counts.entry(card.value).or_insert(0) += 1;
        }

        let mut unpaired: Vec<_> = value_counts.into_iter().filter(|&(_, count)| count != 2).collect();
        unpaired.sort_unstable();
        if let Some(&(value, count)) = unpaired.first() {
            return Err(DeckError::UnpairedValue { value, count });
        }

        Ok(Self::index(cards))
    }

    /// Build a deck from values in position order, assigning ids `1..=n`.
    ///
    /// Convenient for fixed layouts such as `[1, 1, 2, 2]`.
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Result<Self, DeckError> {
        Self::from_cards(
            values
                .into_iter()
                .zip(1u32..)
                .map(|(value, id)| Card::new(CardId(id), PairValue(value))),
        )
    }

    fn index(cards: Vector<Card>) -> Self {
        let positions = cards.iter().enumerate().map(|(pos, card)| (card.id, pos)).collect();
        Self { cards, positions }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of distinct pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Check if a card id belongs to this deck.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.positions.get(&id).and_then(|&pos| self.cards.get(pos))
    }

    /// Card at a position.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Position of a card.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Pair value of a card.
    #[must_use]
    pub fn value_of(&self, id: CardId) -> Option<PairValue> {
        self.card(id).map(|card| card.value)
    }

    /// The other card carrying the same value.
    #[must_use]
    pub fn partner_of(&self, id: CardId) -> Option<CardId> {
        let value = self.value_of(id)?;
        self.cards
            .iter()
            .find(|card| card.id != id && card.value == value)
            .map(|card| card.id)
    }

    /// Iterate cards in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card ids in position order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id).collect()
    }

    /// Values in position order.
    #[must_use]
    pub fn values(&self) -> Vec<PairValue> {
        self.cards.iter().map(|card| card.value).collect()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Unshuffled pairs: `[1, 1, 2, 2, ...]` with ids `1..=2 * pair_count`.
fn ordered_cards(pair_count: usize) -> Vec<Card> {
    (1..=pair_count as u32)
        .flat_map(|value| {
            let value = PairValue(value);
            let (a, b) = value.card_ids();
            [Card::new(a, value), Card::new(b, value)]
        })
        .collect()
}
