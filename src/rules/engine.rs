//! Rules engine trait.
//!
//! The host drives a game through this trait only:
//! - What actions are legal right now
//! - Applying one of them
//! - Whether the game is over, and how it ended

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::player::PlayerId;
use crate::error::{ActionError, Defeat};

/// Result of a completed game. The players win or lose together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Every disease cured.
    Victory,
    Defeat(Defeat),
}

impl GameResult {
    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, GameResult::Victory)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: recomputed from scratch on every call, empty once the
///   game is over
/// - `apply_action`: must reject anything `is_legal` rejects without
///   touching state
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Player whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// Every action that may be applied right now.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply a legal action.
    fn apply_action(&mut self, action: &Action) -> Result<(), ActionError>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Would `apply_action` accept this action?
    fn is_legal(&self, action: &Action) -> bool {
        self.legal_actions().contains(action)
    }
}
