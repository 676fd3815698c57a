use crate::card::Card;
use crate::error::ChooseError;
use crate::options::TapPolicy;
use crate::rules::{SET_SIZE, is_set};

use super::{ChooseOutcome, EvalStatus, Game};

impl Game {
    /// Handles a tap on a table card.
    ///
    /// The effect depends on the current [`EvalStatus`]:
    ///
    /// - `None`: toggles the card in or out of the selection. The third
    ///   selected card triggers an evaluation that adds the Set reward or
    ///   subtracts the mismatch penalty.
    /// - `Found`: the found Set is resolved first (as by
    ///   [`Game::deal_more`]), then [`GameOptions::after_match`] decides
    ///   whether the tapped card starts a new selection.
    /// - `Fail`: the failed trio is cleared, then
    ///   [`GameOptions::after_mismatch`] decides whether the tapped card
    ///   starts a new selection.
    ///
    /// Cards that are not on the table are never selected.
    ///
    /// [`GameOptions::after_match`]: crate::GameOptions::after_match
    /// [`GameOptions::after_mismatch`]: crate::GameOptions::after_mismatch
    pub fn choose(&mut self, card: Card) -> ChooseOutcome {
        match self.status {
            EvalStatus::None => self.choose_while_selecting(card),
            EvalStatus::Found => self.choose_after_match(card),
            EvalStatus::Fail => self.choose_after_mismatch(card),
        }
    }

    /// Taps the card at the given table position.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is past the end of the table.
    pub fn choose_at(&mut self, index: usize) -> Result<ChooseOutcome, ChooseError> {
        let card = *self
            .table
            .get(index)
            .ok_or(ChooseError::IndexOutOfRange {
                index,
                len: self.table.len(),
            })?;
        Ok(self.choose(card))
    }

    /// Taps a card after checking that it is on the table.
    ///
    /// # Errors
    ///
    /// Returns an error if no table card has the card's id.
    pub fn try_choose(&mut self, card: Card) -> Result<ChooseOutcome, ChooseError> {
        if !self.is_on_table(card.id) {
            return Err(ChooseError::NotOnTable);
        }
        Ok(self.choose(card))
    }

    fn choose_while_selecting(&mut self, card: Card) -> ChooseOutcome {
        if let Some(index) = self.selected.iter().position(|s| s.id == card.id) {
            self.selected.remove(index);
            return ChooseOutcome::Deselected;
        }

        if self.selected.len() >= SET_SIZE || !self.is_on_table(card.id) {
            return ChooseOutcome::Ignored;
        }

        self.selected.push(card);
        if self.selected.len() < SET_SIZE {
            return ChooseOutcome::Selected;
        }

        self.evaluate_selection()
    }

    fn choose_after_match(&mut self, card: Card) -> ChooseOutcome {
        let was_matched = self.is_selected(card.id);
        self.resolve_match();

        let reselected = self.options.after_match == TapPolicy::StartSelection
            && !was_matched
            && self.reseed_selection(card);
        ChooseOutcome::MatchResolved { reselected }
    }

    fn choose_after_mismatch(&mut self, card: Card) -> ChooseOutcome {
        self.selected.clear();
        self.status = EvalStatus::None;

        let reselected = self.options.after_mismatch == TapPolicy::StartSelection
            && self.reseed_selection(card);
        ChooseOutcome::MismatchCleared { reselected }
    }

    /// Starts a one-card selection with the table's copy of the card.
    fn reseed_selection(&mut self, card: Card) -> bool {
        let Some(&on_table) = self.table.iter().find(|c| c.id == card.id) else {
            return false;
        };
        self.selected.push(on_table);
        true
    }

    fn evaluate_selection(&mut self) -> ChooseOutcome {
        if is_set(&self.selected) {
            self.status = EvalStatus::Found;
            self.score = self.score.saturating_add(self.options.set_reward);
            ChooseOutcome::SetFound
        } else {
            self.status = EvalStatus::Fail;
            self.score = self.score.saturating_sub(self.options.mismatch_penalty);
            ChooseOutcome::SetFailed
        }
    }
}
