//! Trio evaluation.

use crate::card::Card;

/// Number of cards in a Set.
pub const SET_SIZE: usize = 3;

/// Returns whether three attribute values are all equal or pairwise distinct.
#[must_use]
pub fn all_same_or_all_different<T: PartialEq>(a: T, b: T, c: T) -> bool {
    let all_same = a == b && b == c;
    let all_different = a != b && b != c && a != c;
    all_same || all_different
}

/// Returns whether the cards form a Set.
///
/// Each of number, color, shading and symbol must be either identical on all
/// three cards or different on all three. Ids and positions are ignored.
/// Anything other than exactly three cards is never a Set.
///
/// # Example
///
/// ```
/// use setrs::{Card, CardId, Color, Number, Shading, Symbol, is_set};
///
/// let trio = [
///     Card::new(CardId::new(1), Number::One, Color::Red, Shading::Solid, Symbol::Diamond),
///     Card::new(CardId::new(2), Number::Two, Color::Red, Shading::Solid, Symbol::Diamond),
///     Card::new(CardId::new(3), Number::Three, Color::Red, Shading::Solid, Symbol::Diamond),
/// ];
/// assert!(is_set(&trio));
/// assert!(!is_set(&trio[..2]));
/// ```
#[must_use]
pub fn is_set(cards: &[Card]) -> bool {
    let [a, b, c] = cards else {
        return false;
    };

    all_same_or_all_different(a.number, b.number, c.number)
        && all_same_or_all_different(a.color, b.color, c.color)
        && all_same_or_all_different(a.shading, b.shading, c.shading)
        && all_same_or_all_different(a.symbol, b.symbol, c.symbol)
}

/// Finds the first Set among the cards.
///
/// Trios are tried in index order (`i < j < k`), so the result is
/// deterministic for a given slice.
#[must_use]
pub fn find_set(cards: &[Card]) -> Option<[Card; 3]> {
    let len = cards.len();
    for i in 0..len {
        for j in (i + 1)..len {
            for k in (j + 1)..len {
                let trio = [cards[i], cards[j], cards[k]];
                if is_set(&trio) {
                    return Some(trio);
                }
            }
        }
    }
    None
}
