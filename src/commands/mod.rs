//! Command implementations

pub mod play;
pub mod share;
pub mod stats;

pub use play::run_play;
pub use share::run_share;
pub use stats::run_stats;

use crate::game::{Clock, GameConfig};
use crate::persistence::PersistenceStore;
use crate::wordlists::Dictionary;

/// Everything a command needs to build sessions
pub struct GameContext<'a> {
    pub config: GameConfig,
    pub dictionary: &'a Dictionary,
    pub store: &'a dyn PersistenceStore,
    pub clock: &'a dyn Clock,
}
