//! Card attributes and identities.

use rand::Rng;

/// Number of symbols printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// One symbol.
    One,
    /// Two symbols.
    Two,
    /// Three symbols.
    Three,
}

impl Number {
    /// Every number, in canonical order.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Returns how many symbols the card shows.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Ink color of the symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Purple.
    Purple,
}

impl Color {
    /// Every color, in canonical order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Purple];
}

/// Fill of the symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shading {
    /// Solid fill.
    Solid,
    /// Outline only.
    Open,
    /// Striped fill.
    Striped,
}

impl Shading {
    /// Every shading, in canonical order.
    pub const ALL: [Self; 3] = [Self::Solid, Self::Open, Self::Striped];
}

/// Shape of the symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Diamond.
    Diamond,
    /// Oval.
    Oval,
    /// Squiggle.
    Squiggle,
}

impl Symbol {
    /// Every symbol, in canonical order.
    pub const ALL: [Self; 3] = [Self::Diamond, Self::Oval, Self::Squiggle];
}

/// Stable identity of a card instance.
///
/// Two cards with the same attributes but different ids are different cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(u128);

impl CardId {
    /// Wraps a raw id value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Draws a random 128-bit id.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random())
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u128 {
        self.0
    }
}

/// A Set card.
///
/// Equality compares every field including the id, so use [`Card::same_face`]
/// to compare attributes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Identity of this card instance.
    pub id: CardId,
    /// How many symbols are shown.
    pub number: Number,
    /// Ink color.
    pub color: Color,
    /// Fill.
    pub shading: Shading,
    /// Shape.
    pub symbol: Symbol,
}

impl Card {
    /// Creates a card.
    #[must_use]
    pub const fn new(
        id: CardId,
        number: Number,
        color: Color,
        shading: Shading,
        symbol: Symbol,
    ) -> Self {
        Self {
            id,
            number,
            color,
            shading,
            symbol,
        }
    }

    /// Returns whether both cards show the same four attributes.
    #[must_use]
    pub fn same_face(&self, other: &Self) -> bool {
        self.number == other.number
            && self.color == other.color
            && self.shading == other.shading
            && self.symbol == other.symbol
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 81;
