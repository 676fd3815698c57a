use setrs::{
    Card, ChooseOutcome, Color, DealOutcome, EvalStatus, Game, GameOptions, Shading, Symbol,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn new_game(&mut self) {
        self.game.new_game();
    }

    pub fn choose(&mut self, index: u32) -> Result<String, JsValue> {
        self.game
            .choose_at(index as usize)
            .map(|outcome| outcome_to_str(outcome).to_string())
            .map_err(js_err)
    }

    /// Returns how many cards were drawn, or `undefined` when the action
    /// replaced a found Set instead.
    pub fn deal_more(&mut self) -> Option<u32> {
        drawn_count(self.game.deal_more())
    }

    pub fn shuffle_table(&mut self) {
        self.game.shuffle_table();
    }

    pub fn hint(&self) -> Vec<u32> {
        self.game
            .find_set()
            .map(|trio| {
                trio.iter()
                    .filter_map(|card| self.game.position_of(card.id))
                    .map(|index| index as u32)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            table: self.game.table().iter().map(card_to_js).collect(),
            selected: self
                .game
                .selected_indices()
                .into_iter()
                .map(|index| index as u32)
                .collect(),
            status: status_to_str(self.game.status()),
            score: self.game.score(),
            cards_left: self.game.cards_left() as u32,
            discarded: self.game.discard().len() as u32,
            can_deal_more: self.game.can_deal_more(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    table: Vec<JsCard>,
    selected: Vec<u32>,
    status: &'static str,
    score: i32,
    cards_left: u32,
    discarded: u32,
    can_deal_more: bool,
}

#[derive(Serialize)]
struct JsCard {
    id: String,
    number: u8,
    color: &'static str,
    shading: &'static str,
    symbol: &'static str,
}

fn card_to_js(card: &Card) -> JsCard {
    JsCard {
        id: format!("{:032x}", card.id.get()),
        number: card.number.value(),
        color: color_to_str(card.color),
        shading: shading_to_str(card.shading),
        symbol: symbol_to_str(card.symbol),
    }
}

fn drawn_count(outcome: DealOutcome) -> Option<u32> {
    match outcome {
        DealOutcome::Drew(count) => Some(count as u32),
        DealOutcome::ResolvedMatch => None,
    }
}

fn color_to_str(color: Color) -> &'static str {
    match color {
        Color::Red => "Red",
        Color::Green => "Green",
        Color::Purple => "Purple",
    }
}

fn shading_to_str(shading: Shading) -> &'static str {
    match shading {
        Shading::Solid => "Solid",
        Shading::Open => "Open",
        Shading::Striped => "Striped",
    }
}

fn symbol_to_str(symbol: Symbol) -> &'static str {
    match symbol {
        Symbol::Diamond => "Diamond",
        Symbol::Oval => "Oval",
        Symbol::Squiggle => "Squiggle",
    }
}

fn status_to_str(status: EvalStatus) -> &'static str {
    match status {
        EvalStatus::None => "None",
        EvalStatus::Found => "Found",
        EvalStatus::Fail => "Fail",
    }
}

fn outcome_to_str(outcome: ChooseOutcome) -> &'static str {
    match outcome {
        ChooseOutcome::Selected => "Selected",
        ChooseOutcome::Deselected => "Deselected",
        ChooseOutcome::Ignored => "Ignored",
        ChooseOutcome::SetFound => "SetFound",
        ChooseOutcome::SetFailed => "SetFailed",
        ChooseOutcome::MatchResolved { .. } => "MatchResolved",
        ChooseOutcome::MismatchCleared { .. } => "MismatchCleared",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
