//! Deck and trio rule tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use setrs::{
    Card, CardId, Color, DECK_SIZE, Number, Shading, Symbol, all_same_or_all_different,
    create_shuffled_deck, find_set, is_set,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> CardId {
    CardId::new(u128::from(NEXT_ID.fetch_add(1, Ordering::Relaxed)))
}

fn card(number: Number, color: Color, shading: Shading, symbol: Symbol) -> Card {
    Card::new(next_id(), number, color, shading, symbol)
}

#[test]
fn deck_is_the_full_cartesian_product() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = create_shuffled_deck(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);

    let faces: HashSet<_> = deck
        .iter()
        .map(|c| (c.number, c.color, c.shading, c.symbol))
        .collect();
    assert_eq!(faces.len(), DECK_SIZE);

    for number in Number::ALL {
        for color in Color::ALL {
            for shading in Shading::ALL {
                for symbol in Symbol::ALL {
                    assert!(faces.contains(&(number, color, shading, symbol)));
                }
            }
        }
    }

    let ids: HashSet<_> = deck.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), DECK_SIZE);
}

#[test]
fn decks_never_share_ids() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let first = create_shuffled_deck(&mut rng);
    let second = create_shuffled_deck(&mut rng);

    let first_ids: HashSet<_> = first.iter().map(|c| c.id).collect();
    assert!(second.iter().all(|c| !first_ids.contains(&c.id)));
}

#[test]
fn same_seed_replays_the_same_deck() {
    let first = create_shuffled_deck(&mut ChaCha8Rng::seed_from_u64(3));
    let second = create_shuffled_deck(&mut ChaCha8Rng::seed_from_u64(3));

    assert_eq!(first, second);
}

#[test]
fn deck_order_depends_on_seed() {
    let deck_a = create_shuffled_deck(&mut ChaCha8Rng::seed_from_u64(1));
    let deck_b = create_shuffled_deck(&mut ChaCha8Rng::seed_from_u64(2));
    assert!(deck_a.iter().zip(&deck_b).any(|(a, b)| !a.same_face(b)));
}

#[test]
fn numbers_all_different_rest_same_is_a_set() {
    let trio = [
        card(Number::One, Color::Red, Shading::Solid, Symbol::Diamond),
        card(Number::Two, Color::Red, Shading::Solid, Symbol::Diamond),
        card(Number::Three, Color::Red, Shading::Solid, Symbol::Diamond),
    ];
    assert!(is_set(&trio));
}

#[test]
fn two_same_one_different_shading_is_not_a_set() {
    let trio = [
        card(Number::One, Color::Red, Shading::Solid, Symbol::Diamond),
        card(Number::One, Color::Green, Shading::Solid, Symbol::Diamond),
        card(Number::One, Color::Purple, Shading::Open, Symbol::Diamond),
    ];
    assert!(!is_set(&trio));
}

#[test]
fn every_attribute_different_is_a_set() {
    let trio = [
        card(Number::One, Color::Red, Shading::Solid, Symbol::Diamond),
        card(Number::Two, Color::Green, Shading::Open, Symbol::Oval),
        card(Number::Three, Color::Purple, Shading::Striped, Symbol::Squiggle),
    ];
    assert!(is_set(&trio));
}

#[test]
fn is_set_rejects_wrong_card_counts() {
    let a = card(Number::One, Color::Red, Shading::Solid, Symbol::Diamond);
    let b = card(Number::Two, Color::Red, Shading::Solid, Symbol::Diamond);
    let c = card(Number::Three, Color::Red, Shading::Solid, Symbol::Diamond);
    let d = card(Number::One, Color::Green, Shading::Solid, Symbol::Diamond);

    assert!(!is_set(&[]));
    assert!(!is_set(&[a]));
    assert!(!is_set(&[a, b]));
    assert!(!is_set(&[a, b, c, d]));
}

#[test]
fn is_set_ignores_ids() {
    let a = card(Number::Two, Color::Green, Shading::Open, Symbol::Oval);
    let mut same_face = a;
    same_face.id = next_id();
    let b = card(Number::Two, Color::Green, Shading::Open, Symbol::Oval);

    // Three identical faces are "all same" on every attribute.
    assert!(is_set(&[a, same_face, b]));
}

#[test]
fn attribute_predicate() {
    assert!(all_same_or_all_different(1, 1, 1));
    assert!(all_same_or_all_different(1, 2, 3));
    assert!(!all_same_or_all_different(1, 1, 2));
    assert!(!all_same_or_all_different(2, 1, 1));
    assert!(!all_same_or_all_different(1, 2, 1));
}

#[test]
fn find_set_returns_first_trio_in_index_order() {
    let cards = [
        card(Number::One, Color::Red, Shading::Solid, Symbol::Diamond),
        card(Number::One, Color::Green, Shading::Solid, Symbol::Diamond),
        card(Number::Two, Color::Red, Shading::Solid, Symbol::Diamond),
        card(Number::One, Color::Purple, Shading::Solid, Symbol::Diamond),
        card(Number::Three, Color::Red, Shading::Solid, Symbol::Diamond),
    ];

    let found = find_set(&cards).unwrap();
    assert_eq!(found, [cards[0], cards[1], cards[3]]);
    assert!(find_set(&cards[..3]).is_none());
    assert!(find_set(&[]).is_none());
}

#[test]
fn number_values() {
    let values: Vec<u8> = Number::ALL.iter().map(|n| n.value()).collect();
    assert_eq!(values, vec![1, 2, 3]);
}
