//! Deck generation.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardId, Color, DECK_SIZE, Number, Shading, Symbol};

/// Creates the full 81-card deck and shuffles it.
///
/// Every combination of number, color, shading and symbol appears exactly
/// once. Ids are 128 random bits drawn from `rng`, like a v4 UUID: repeated
/// calls on one generator get unrelated ids, and the same seed replays the
/// same deck with the same ids.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use setrs::{DECK_SIZE, create_shuffled_deck};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let deck = create_shuffled_deck(&mut rng);
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
pub fn create_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for color in Color::ALL {
        for symbol in Symbol::ALL {
            for number in Number::ALL {
                for shading in Shading::ALL {
                    cards.push(Card::new(
                        CardId::random(rng),
                        number,
                        color,
                        shading,
                        symbol,
                    ));
                }
            }
        }
    }

    cards.shuffle(rng);
    cards
}
