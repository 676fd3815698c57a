use core::mem;

use super::{DealOutcome, EvalStatus, Game};

impl Game {
    /// Deals the opening cards from the front of the deck.
    ///
    /// Does nothing unless the table is empty, so repeated calls never
    /// double-deal. Returns the number of cards dealt.
    pub fn deal_initial_cards(&mut self) -> usize {
        if !self.table.is_empty() {
            return 0;
        }
        self.draw_onto_table(self.options.initial_deal)
    }

    /// Handles the deal action.
    ///
    /// While a found Set is displayed this resolves it (discard and replace)
    /// instead of adding cards. Otherwise up to `deal_size` cards move from
    /// the deck to the end of the table; an empty deck draws nothing.
    pub fn deal_more(&mut self) -> DealOutcome {
        if self.status == EvalStatus::Found {
            self.resolve_match();
            return DealOutcome::ResolvedMatch;
        }
        DealOutcome::Drew(self.normal_draw())
    }

    fn normal_draw(&mut self) -> usize {
        let room = self
            .options
            .table_limit
            .map_or(usize::MAX, |limit| limit.saturating_sub(self.table.len()));
        self.draw_onto_table(self.options.deal_size.min(room))
    }

    fn draw_onto_table(&mut self, count: usize) -> usize {
        let count = count.min(self.deck.len());
        self.table.extend(self.deck.drain(..count));
        count
    }

    /// Moves the selected Set to the discard pile and fills its table slots.
    ///
    /// Each matched card is replaced in place by the next deck card so the
    /// rest of the table keeps its positions. Once the deck is empty the
    /// remaining matched cards are removed and the table shrinks.
    pub(super) fn resolve_match(&mut self) {
        let matched = mem::take(&mut self.selected);
        self.discard.extend_from_slice(&matched);

        for card in &matched {
            let Some(index) = self.position_of(card.id) else {
                continue;
            };
            if self.deck.is_empty() {
                self.table.remove(index);
            } else {
                self.table[index] = self.deck.remove(0);
            }
        }

        self.status = EvalStatus::None;
    }
}
