use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    NotStarted,
    Started,
}

impl Phase {
    pub const fn is_started(self) -> bool {
        matches!(self, Self::Started)
    }
}

/// Owns the card and its marks, and gates every change behind the current [`Phase`].
///
/// Operations that are not allowed in the current phase are ignored and report
/// [`ActionOutcome::NoChange`].
#[derive(Clone, Debug)]
pub struct BingoEngine<G = RandomCardGenerator> {
    pool: ItemPool,
    generator: G,
    card: Card,
    marks: MarkState,
    phase: Phase,
    completed: CompletedLines,
}

impl<G: CardGenerator> BingoEngine<G> {
    pub fn new(pool: ItemPool, mut generator: G) -> Result<Self> {
        let card = generator.generate(&pool)?;
        Ok(Self {
            pool,
            generator,
            card,
            marks: MarkState::new(),
            phase: Phase::default(),
            completed: CompletedLines::default(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn marks(&self) -> &MarkState {
        &self.marks
    }

    pub fn pool(&self) -> &ItemPool {
        &self.pool
    }

    pub fn completed_lines(&self) -> &CompletedLines {
        &self.completed
    }

    pub fn line_count(&self) -> usize {
        self.completed.count()
    }

    pub fn is_marked(&self, index: CellIndex) -> bool {
        self.marks.is_marked(index)
    }

    pub fn is_in_completed_line(&self, index: CellIndex) -> bool {
        self.completed.contains_cell(index)
    }

    pub fn status(&self) -> StatusMessage {
        StatusMessage::new(self.phase.is_started(), self.line_count())
    }

    pub fn can_reroll(&self) -> bool {
        !self.phase.is_started()
    }

    pub fn can_start(&self) -> bool {
        !self.phase.is_started()
    }

    pub fn can_tap(&self, index: CellIndex) -> bool {
        self.phase.is_started() && index != FREE_CELL_INDEX && index < CELL_COUNT
    }

    /// Replaces the card with a fresh one and clears all marks.
    pub fn reroll(&mut self) -> Result<ActionOutcome> {
        if !self.can_reroll() {
            log::trace!("reroll ignored, game already started");
            return Ok(ActionOutcome::NoChange);
        }

        self.card = self.generator.generate(&self.pool)?;
        self.marks = MarkState::new();
        self.reevaluate();
        log::debug!("card rerolled");
        Ok(ActionOutcome::Changed)
    }

    /// Freezes the card and marks the free cell.
    pub fn start(&mut self) -> ActionOutcome {
        if !self.can_start() {
            log::trace!("start ignored, game already started");
            return ActionOutcome::NoChange;
        }

        self.phase = Phase::Started;
        self.marks.set(FREE_CELL_INDEX, true);
        self.reevaluate();
        log::debug!("game started");
        ActionOutcome::Changed
    }

    /// Toggles the mark on a cell, the free cell excluded.
    pub fn tap_cell(&mut self, index: CellIndex) -> Result<ActionOutcome> {
        let index = self.card.validate_index(index)?;

        if !self.can_tap(index) {
            log::trace!("tap on {} ignored", index);
            return Ok(ActionOutcome::NoChange);
        }

        let marked = self.marks.toggle(index);
        self.reevaluate();
        log::debug!(
            "cell {} {}, {} line(s) complete",
            index,
            if marked { "marked" } else { "unmarked" },
            self.line_count()
        );
        Ok(ActionOutcome::Changed)
    }

    fn reevaluate(&mut self) {
        self.completed = count_completed_lines(&self.marks);
    }
}
