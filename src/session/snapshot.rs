//! Binary persistence of a whole session.
//!
//! Decks store their full card order, so a restored session continues
//! exactly where the saved one stopped without any RNG state.

use super::state::Session;
use crate::error::Result;

impl Session {
    /// Encode the session with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a session written by [`Session::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ConfigError;
    use crate::rules::RulesEngine;
    use crate::session::{Session, SessionBuilder};

    #[test]
    fn test_roundtrip_mid_game() {
        let mut session = SessionBuilder::new().player_count(3).seed(5).build().unwrap();
        for _ in 0..6 {
            let action = session.legal_actions()[0].clone();
            session.apply_action(&action).unwrap();
        }

        let bytes = session.to_bytes().unwrap();
        let restored = Session::from_bytes(&bytes).unwrap();

        assert_eq!(restored, session);
        assert_eq!(restored.legal_actions(), session.legal_actions());
        assert_eq!(restored.history().len(), 6);
    }

    #[test]
    fn test_garbage_is_a_persistence_error() {
        assert!(matches!(Session::from_bytes(&[1, 2, 3]), Err(ConfigError::Persistence(_))));
    }
}
