use serde::Serialize;

use crate::engine::{GameEngine, Phase};
use crate::player::{Player, PlayerId};

pub const DRAW_CALLOUT: &str = "Tie Game";

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AnnouncementKind {
    Turn,
    Victory,
    Draw,
}

/// Banner text shown above the board.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub kind: AnnouncementKind,
    pub text: String,
    /// Color tag of the player the banner is about; `None` for a draw.
    pub color: Option<String>,
}

impl Announcement {
    pub fn for_engine(engine: &GameEngine) -> Self {
        match engine.current_phase() {
            Phase::InProgress => {
                let player = engine.active_player();
                Self {
                    kind: AnnouncementKind::Turn,
                    text: player.turn_callout(),
                    color: Some(player.color_tag.clone()),
                }
            }
            Phase::Won(id) => {
                let player = engine.players().get(id);
                Self {
                    kind: AnnouncementKind::Victory,
                    text: player.win_callout(),
                    color: Some(player.color_tag.clone()),
                }
            }
            Phase::Drawn => Self {
                kind: AnnouncementKind::Draw,
                text: DRAW_CALLOUT.to_string(),
                color: None,
            },
        }
    }
}

/// Everything the page needs to paint one frame.
#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FrameView {
    pub width: usize,
    pub height: usize,
    /// Row-major, top row first: 0 empty, 1 first player, 2 second player.
    pub cells: Vec<u8>,
    pub phase: Phase,
    pub active_player: PlayerId,
    pub pieces_placed: usize,
    pub players: Vec<Player>,
    pub announcement: Announcement,
}

impl FrameView {
    pub fn snapshot(engine: &GameEngine) -> Self {
        let board = engine.board();
        let state = engine.state();
        Self {
            width: board.width(),
            height: board.height(),
            cells: board.cell_ids(),
            phase: state.phase,
            active_player: state.active_player,
            pieces_placed: state.pieces_placed,
            players: engine.players().players().to_vec(),
            announcement: Announcement::for_engine(engine),
        }
    }
}
