use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::player::PlayerId;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Who moves first in a new game.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub enum StartingPlayer {
    #[default]
    First,
    Second,
    Random,
}

impl StartingPlayer {
    pub fn resolve<R: Rng>(self, rng: &mut R) -> PlayerId {
        match self {
            StartingPlayer::First => PlayerId::First,
            StartingPlayer::Second => PlayerId::Second,
            StartingPlayer::Random => {
                if rng.gen_bool(0.5) {
                    PlayerId::First
                } else {
                    PlayerId::Second
                }
            }
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub starting_player: StartingPlayer,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            starting_player: StartingPlayer::First,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width == 0 {
            return Err(GameError::InvalidConfig("width must be > 0".into()));
        }
        if self.height == 0 {
            return Err(GameError::InvalidConfig("height must be > 0".into()));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "board {}x{} is too large",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
