//! Property tests for the trio rule and the game invariants.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use setrs::{
    Card, CardId, ChooseOutcome, Color, DECK_SIZE, EvalStatus, Game, GameOptions, Number, Shading,
    Symbol, TapPolicy, create_shuffled_deck, is_set,
};

fn face() -> impl Strategy<Value = Card> {
    (any::<u128>(), 0..3usize, 0..3usize, 0..3usize, 0..3usize).prop_map(|(id, n, c, sh, sy)| {
        Card::new(
            CardId::new(id),
            Number::ALL[n],
            Color::ALL[c],
            Shading::ALL[sh],
            Symbol::ALL[sy],
        )
    })
}

fn tap_policy() -> impl Strategy<Value = TapPolicy> {
    prop_oneof![Just(TapPolicy::StartSelection), Just(TapPolicy::Acknowledge)]
}

#[derive(Debug, Clone)]
enum Intent {
    Tap(usize),
    Deal,
    Shuffle,
}

fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        6 => (0..40usize).prop_map(Intent::Tap),
        2 => Just(Intent::Deal),
        1 => Just(Intent::Shuffle),
    ]
}

fn check_invariants(game: &Game) -> Result<(), TestCaseError> {
    let deck: HashSet<_> = game.deck().iter().map(|c| c.id).collect();
    let table: HashSet<_> = game.table().iter().map(|c| c.id).collect();
    let discard: HashSet<_> = game.discard().iter().map(|c| c.id).collect();

    prop_assert_eq!(deck.len(), game.deck().len());
    prop_assert_eq!(table.len(), game.table().len());
    prop_assert_eq!(discard.len(), game.discard().len());
    prop_assert!(deck.is_disjoint(&table));
    prop_assert!(deck.is_disjoint(&discard));
    prop_assert!(table.is_disjoint(&discard));
    prop_assert_eq!(deck.len() + table.len() + discard.len(), DECK_SIZE);

    prop_assert!(game.selected().len() <= 3);
    prop_assert!(game.selected().iter().all(|c| table.contains(&c.id)));
    if game.status() != EvalStatus::None {
        prop_assert_eq!(game.selected().len(), 3);
    }
    Ok(())
}

proptest! {
    #[test]
    fn is_set_is_symmetric(a in face(), b in face(), c in face()) {
        let expected = is_set(&[a, b, c]);
        for trio in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            prop_assert_eq!(is_set(&trio), expected);
        }
    }

    #[test]
    fn any_two_cards_have_exactly_one_completion(seed in any::<u64>(), i in 0..DECK_SIZE, j in 0..DECK_SIZE) {
        prop_assume!(i != j);
        let deck = create_shuffled_deck(&mut ChaCha8Rng::seed_from_u64(seed));
        let (a, b) = (deck[i], deck[j]);
        let completions = deck
            .iter()
            .filter(|c| c.id != a.id && c.id != b.id)
            .filter(|&&c| is_set(&[a, b, c]))
            .count();
        prop_assert_eq!(completions, 1);
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        after_match in tap_policy(),
        after_mismatch in tap_policy(),
        intents in prop::collection::vec(intent(), 0..300),
    ) {
        let options = GameOptions::default()
            .with_after_match(after_match)
            .with_after_mismatch(after_mismatch);
        let mut game = Game::new(options, seed);
        check_invariants(&game)?;

        for intent in intents {
            let score = game.score();
            match intent {
                Intent::Tap(index) => {
                    if game.table().is_empty() {
                        continue;
                    }
                    let outcome = game.choose_at(index % game.table().len()).unwrap();
                    let delta = game.score() - score;
                    match outcome {
                        ChooseOutcome::SetFound => {
                            prop_assert_eq!(delta, 3);
                            prop_assert!(is_set(game.selected()));
                        }
                        ChooseOutcome::SetFailed => {
                            prop_assert_eq!(delta, -1);
                            prop_assert!(!is_set(game.selected()));
                        }
                        _ => prop_assert_eq!(delta, 0),
                    }
                }
                Intent::Deal => {
                    game.deal_more();
                    prop_assert_eq!(game.score(), score);
                }
                Intent::Shuffle => {
                    game.shuffle_table();
                    prop_assert_eq!(game.score(), score);
                }
            }
            check_invariants(&game)?;
        }
    }
}
