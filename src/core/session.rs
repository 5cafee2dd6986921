use std::path::{Path, PathBuf};
use tracing::info;
use crate::core::enemies::advance_enemies;
use crate::core::history::MoveHistory;
use crate::core::update::step;
use crate::core::{Direction, GameChangeType, LevelState};
use crate::level_loader::{load_level, LevelError};

/// Where a session reloads its level from on reset.
#[derive(Clone, Debug)]
pub enum LevelSource {
    File(PathBuf),
    Inline(LevelState),
}

/// A single play-through: the live level, its undo history and its source.
pub struct GameSession {
    source: LevelSource,
    level: LevelState,
    history: MoveHistory,
}

impl GameSession {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref().to_path_buf();
        let level = load_level(&path)?;
        Ok(GameSession {
            source: LevelSource::File(path),
            level,
            history: MoveHistory::new(),
        })
    }

    pub fn from_level(level: LevelState) -> Self {
        GameSession {
            source: LevelSource::Inline(level.clone()),
            level,
            history: MoveHistory::new(),
        }
    }

    pub fn level(&self) -> &LevelState {
        &self.level
    }

    pub fn source(&self) -> &LevelSource {
        &self.source
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Every attempt is recorded, including blocked ones.
    pub fn attempt_move(&mut self, direction: Direction) -> GameChangeType {
        let record = step(&mut self.level, direction);
        let change_type = record.change_type;
        self.history.push(record);
        if change_type == GameChangeType::PlayerAndBoxMove && self.level.is_won() {
            info!(moves = self.history.len(), "level solved");
        }
        change_type
    }

    pub fn advance_enemies(&mut self) -> usize {
        let moved = advance_enemies(&mut self.level);
        if self.level.is_game_over() {
            info!(player = ?self.level.player, "player caught");
        }
        moved
    }

    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.level).is_some()
    }

    /// Reloads the level from its source and clears the history. On a
    /// reload failure the session is left untouched.
    pub fn reset(&mut self) -> Result<(), LevelError> {
        let fresh = match &self.source {
            LevelSource::File(path) => load_level(path)?,
            LevelSource::Inline(level) => level.clone(),
        };
        self.level = fresh;
        self.history.clear();
        info!("level reset");
        Ok(())
    }

    pub fn is_won(&self) -> bool {
        self.level.is_won()
    }

    pub fn is_game_over(&self) -> bool {
        self.level.is_game_over()
    }

    pub fn last_change(&self) -> Option<GameChangeType> {
        self.history.last().map(|record| record.change_type)
    }
}
