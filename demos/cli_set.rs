//! CLI Set example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use setrs::{
    Card, ChooseOutcome, Color, DealOutcome, EvalStatus, Game, GameOptions, Shading, Symbol,
};

fn main() {
    println!("Set CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        print_table(&game);
        println!("{}", format_actions(&game));

        let input = prompt_line("Command: ");
        match input.as_str() {
            "q" | "quit" => {
                println!("Final score: {}", game.score());
                return;
            }
            "d" | "deal" => match game.deal_more() {
                DealOutcome::ResolvedMatch => println!("Set replaced."),
                DealOutcome::Drew(0) => println!("Nothing to deal."),
                DealOutcome::Drew(count) => println!("Dealt {count} card(s)."),
            },
            "s" | "shuffle" => game.shuffle_table(),
            "h" | "hint" => match game.find_set() {
                Some(trio) => {
                    let positions: Vec<String> = trio
                        .iter()
                        .filter_map(|card| game.position_of(card.id))
                        .map(|index| index.to_string())
                        .collect();
                    println!("Try {}.", positions.join(", "));
                }
                None => println!("No Set on the table. Deal more."),
            },
            "n" | "new" => {
                game.new_game();
                println!("New game.");
            }
            other => {
                let Ok(index) = other.parse::<usize>() else {
                    println!("Unknown command.");
                    continue;
                };
                match game.choose_at(index) {
                    Ok(outcome) => report(outcome),
                    Err(err) => println!("Choose error: {err}"),
                }
            }
        }

        if !game.can_deal_more() && game.find_set().is_none() {
            print_table(&game);
            println!("No more Sets. Final score: {}", game.score());
            return;
        }
    }
}

fn report(outcome: ChooseOutcome) {
    match outcome {
        ChooseOutcome::SetFound => println!("{}", colorize("Set!", "32")),
        ChooseOutcome::SetFailed => println!("{}", colorize("Not a Set.", "31")),
        ChooseOutcome::MatchResolved { .. } => println!("Set replaced."),
        ChooseOutcome::Ignored => println!("Selection is full."),
        ChooseOutcome::Selected
        | ChooseOutcome::Deselected
        | ChooseOutcome::MismatchCleared { .. } => {}
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!(
        "\nDeck: {} cards left | Score: {} | Discarded: {}",
        game.cards_left(),
        game.score(),
        game.discard().len()
    );

    let selected = game.selected_indices();
    let marker_code = match game.status() {
        EvalStatus::None => "1",
        EvalStatus::Found => "42",
        EvalStatus::Fail => "41",
    };

    for (index, card) in game.table().iter().enumerate() {
        let label = format!("{index:>2}: {}", format_card(card));
        if selected.contains(&index) {
            println!("* {}", colorize(&label, marker_code));
        } else {
            println!("  {label}");
        }
    }
    println!();
}

fn format_actions(game: &Game) -> String {
    let parts = [
        format_action("deal", "d", game.can_deal_more()),
        format_action("shuffle", "s", !game.table().is_empty()),
        format_action("hint", "h", true),
        format_action("new", "n", true),
    ];
    format!("Pick a card by number. Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.color {
        Color::Red => "31",
        Color::Green => "32",
        Color::Purple => "35",
    };
    let glyph = match (card.symbol, card.shading) {
        (Symbol::Diamond, Shading::Solid) => "◆",
        (Symbol::Diamond, Shading::Open) => "◇",
        (Symbol::Diamond, Shading::Striped) => "◈",
        (Symbol::Oval, Shading::Solid) => "●",
        (Symbol::Oval, Shading::Open) => "○",
        (Symbol::Oval, Shading::Striped) => "◍",
        (Symbol::Squiggle, Shading::Solid) => "▲",
        (Symbol::Squiggle, Shading::Open) => "△",
        (Symbol::Squiggle, Shading::Striped) => "◬",
    };
    let symbols = glyph.repeat(usize::from(card.number.value()));
    colorize(&format!("{symbols:<3}"), color_code)
}
