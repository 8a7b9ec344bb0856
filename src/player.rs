use serde::{Deserialize, Serialize};

/// Tag identifying which of the two competitors owns a piece.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// Numeric cell code used by the view: 1 for first, 2 for second.
    pub fn cell_id(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// A competitor. Name and color are opaque display data supplied by the view.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub color_tag: String,
}

impl Player {
    pub fn new(id: PlayerId, display_name: impl Into<String>, color_tag: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            color_tag: color_tag.into(),
        }
    }

    pub fn turn_callout(&self) -> String {
        format!("{}'s Turn", self.display_name)
    }

    pub fn win_callout(&self) -> String {
        format!("{} Wins!", self.display_name)
    }
}

/// The two players of a game and the order they move in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRegistry {
    players: [Player; 2],
    first_to_move: PlayerId,
}

impl PlayerRegistry {
    /// Slots are keyed by `Player::id`; the ids passed in are normalized so the
    /// first entry is always `PlayerId::First` and the second `PlayerId::Second`.
    pub fn new(players: [Player; 2], first_to_move: PlayerId) -> Self {
        let [mut first, mut second] = players;
        first.id = PlayerId::First;
        second.id = PlayerId::Second;
        Self {
            players: [first, second],
            first_to_move,
        }
    }

    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn first_to_move(&self) -> PlayerId {
        self.first_to_move
    }

    pub fn turn_order(&self) -> [PlayerId; 2] {
        [self.first_to_move, self.first_to_move.other()]
    }

    pub fn next_after(&self, id: PlayerId) -> PlayerId {
        let [first, second] = self.turn_order();
        if id == first { second } else { first }
    }

    pub(crate) fn with_first_to_move(&self, first_to_move: PlayerId) -> Self {
        Self {
            players: self.players.clone(),
            first_to_move,
        }
    }
}
