use crate::core::update::revert;
use crate::core::{LevelState, MoveRecord};

/// Undo stack holding one diff per move attempt, blocked attempts included.
#[derive(Default, Debug, Clone)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        MoveHistory { records: Vec::new() }
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Restores the tiles, player cell and facing from before the latest attempt.
    pub fn undo(&mut self, level: &mut LevelState) -> Option<MoveRecord> {
        let record = self.records.pop()?;
        revert(level, &record);
        Some(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }
}
