use log::{debug, info};
use rand::Rng;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::player::{Player, PlayerId, PlayerRegistry};
use crate::win::check_win;

/// Top-level game phase. `Won` and `Drawn` are terminal until `reset`.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won(PlayerId),
    Drawn,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum RejectReason {
    ColumnFull,
    GameOver,
}

/// Outcome of a single `drop_piece` call.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MoveResult {
    Rejected {
        column: usize,
        reason: RejectReason,
    },
    Placed {
        column: usize,
        row: usize,
        #[serde(rename = "nextPlayer")]
        next_player: PlayerId,
    },
    Won {
        column: usize,
        row: usize,
        winner: PlayerId,
    },
    Drawn {
        column: usize,
        row: usize,
    },
}

impl MoveResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveResult::Rejected { .. })
    }

    /// Landing cell as (column, row) for accepted moves.
    pub fn landing(&self) -> Option<(usize, usize)> {
        match *self {
            MoveResult::Rejected { .. } => None,
            MoveResult::Placed { column, row, .. }
            | MoveResult::Won { column, row, .. }
            | MoveResult::Drawn { column, row } => Some((column, row)),
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub active_player: PlayerId,
    pub pieces_placed: usize,
    pub phase: Phase,
}

/// Owns the board, the players and the turn state of one game.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    registry: PlayerRegistry,
    board: Board,
    state: GameState,
}

impl GameEngine {
    pub fn start(players: [Player; 2], config: GameConfig) -> Result<Self, GameError> {
        Self::start_with_rng(players, config, &mut thread_rng())
    }

    /// Like `start`, drawing the starting player from `rng` when the config
    /// asks for a random one.
    pub fn start_with_rng<R: Rng>(
        players: [Player; 2],
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let first = config.starting_player.resolve(rng);
        let registry = PlayerRegistry::new(players, first);
        let board = Board::new(config.width, config.height)?;
        info!(
            "new {}x{} game: {} vs {}, {} starts",
            config.width,
            config.height,
            registry.get(PlayerId::First).display_name,
            registry.get(PlayerId::Second).display_name,
            registry.get(first).display_name,
        );
        Ok(Self {
            config,
            registry,
            board,
            state: GameState {
                active_player: first,
                pieces_placed: 0,
                phase: Phase::InProgress,
            },
        })
    }

    /// Starts over with the same players and config on an empty board.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.reset_with_rng(&mut thread_rng())
    }

    pub fn reset_with_rng<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let first = self.config.starting_player.resolve(rng);
        self.board = Board::new(self.config.width, self.config.height)?;
        self.registry = self.registry.with_first_to_move(first);
        self.state = GameState {
            active_player: first,
            pieces_placed: 0,
            phase: Phase::InProgress,
        };
        info!("game reset, {} starts", self.registry.get(first).display_name);
        Ok(())
    }

    /// Drops the active player's piece into `column`.
    ///
    /// A finished game or a full column yields `MoveResult::Rejected` and leaves
    /// everything untouched. A column outside the board is an `InvalidColumn`
    /// error while the game is still running.
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveResult, GameError> {
        if self.state.phase.is_terminal() {
            debug!("column {column} rejected: game is over");
            return Ok(MoveResult::Rejected {
                column,
                reason: RejectReason::GameOver,
            });
        }
        let Some(row) = self.board.lowest_open_row(column)? else {
            debug!("column {column} rejected: column is full");
            return Ok(MoveResult::Rejected {
                column,
                reason: RejectReason::ColumnFull,
            });
        };

        let player = self.state.active_player;
        self.board.place(column, row, player)?;
        self.state.pieces_placed += 1;
        debug!(
            "{:?} dropped into column {column}, landed on row {row} ({} pieces)",
            player, self.state.pieces_placed
        );

        if check_win(&self.board, column, row, player) {
            self.state.phase = Phase::Won(player);
            info!("{}", self.registry.get(player).win_callout());
            return Ok(MoveResult::Won {
                column,
                row,
                winner: player,
            });
        }
        if self.state.pieces_placed == self.board.capacity() {
            self.state.phase = Phase::Drawn;
            info!("board is full, game drawn");
            return Ok(MoveResult::Drawn { column, row });
        }

        let next_player = self.registry.next_after(player);
        self.state.active_player = next_player;
        Ok(MoveResult::Placed {
            column,
            row,
            next_player,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_phase(&self) -> Phase {
        self.state.phase
    }

    /// The player to move, or the winner once the game is won.
    pub fn active_player(&self) -> &Player {
        self.registry.get(self.state.active_player)
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase.is_terminal()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.state.phase {
            Phase::Won(id) => Some(self.registry.get(id)),
            _ => None,
        }
    }

    /// Columns that would accept a piece right now.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_finished() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&column| matches!(self.board.is_column_full(column), Ok(false)))
            .collect()
    }
}
