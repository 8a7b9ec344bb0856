use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod player;
pub mod view;
pub mod win;

pub use board::{Board, Cell};
pub use config::{GameConfig, StartingPlayer};
pub use engine::{GameEngine, GameState, MoveResult, Phase, RejectReason};
pub use error::GameError;
pub use player::{Player, PlayerId, PlayerRegistry};
pub use view::{Announcement, AnnouncementKind, FrameView};

#[wasm_bindgen(start)]
pub fn bootstrap() {
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Name and color as entered on the start form.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSetup {
    pub display_name: String,
    pub color_tag: String,
}

impl PlayerSetup {
    fn into_player(self, id: PlayerId) -> Player {
        Player::new(id, self.display_name, self.color_tag)
    }
}

#[wasm_bindgen]
pub struct GameClient {
    engine: GameEngine,
}

#[wasm_bindgen]
impl GameClient {
    /// `players` is a two-element array of `{ displayName, colorTag }`;
    /// `config` is optional and falls back to the standard 7x6 board.
    #[wasm_bindgen(constructor)]
    pub fn new(players: JsValue, config: JsValue) -> Result<GameClient, JsValue> {
        let [first, second]: [PlayerSetup; 2] = from_value(players)?;
        let config: GameConfig = from_value(config).unwrap_or_default();
        let engine = GameEngine::start(
            [
                first.into_player(PlayerId::First),
                second.into_player(PlayerId::Second),
            ],
            config,
        )
        .map_err(js_error)?;
        Ok(Self { engine })
    }

    #[wasm_bindgen(js_name = dropPiece)]
    pub fn drop_piece(&mut self, column: usize) -> Result<JsValue, JsValue> {
        let result = self.engine.drop_piece(column).map_err(js_error)?;
        to_value(&result).map_err(|e| e.into())
    }

    /// Starts a fresh game with the same players and returns its first frame.
    #[wasm_bindgen(js_name = reset)]
    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        self.engine.reset().map_err(js_error)?;
        self.snapshot()
    }

    #[wasm_bindgen(js_name = snapshot)]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_value(&FrameView::snapshot(&self.engine)).map_err(|e| e.into())
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&FrameView::snapshot(&self.engine)).map_err(js_error)
    }

    #[wasm_bindgen(js_name = phase)]
    pub fn phase(&self) -> Result<JsValue, JsValue> {
        to_value(&self.engine.current_phase()).map_err(|e| e.into())
    }

    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_setup_from_form_fields() {
        let [a, b]: [PlayerSetup; 2] = serde_json::from_str(
            r##"[{"displayName": "Ada", "colorTag": "#ff6b6b"},
                {"displayName": "Bob", "colorTag": "#48dbfb"}]"##,
        )
        .unwrap();
        let first = a.into_player(PlayerId::First);
        let second = b.into_player(PlayerId::Second);
        assert_eq!(first, Player::new(PlayerId::First, "Ada", "#ff6b6b"));
        assert_eq!(second.id, PlayerId::Second);
        assert_eq!(second.turn_callout(), "Bob's Turn");
    }
}
