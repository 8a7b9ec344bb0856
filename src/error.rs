/// Errors raised by the game core.
///
/// All of these are programming errors on the caller's side: the view only
/// forwards coordinates taken from the board it rendered, so none of them
/// should surface during normal play. A click on a full column or a finished
/// game is not an error; see `MoveResult::Rejected`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid column (expected: 0-{}, found: {column})", .width.saturating_sub(1))]
    InvalidColumn { column: usize, width: usize },

    #[error("cell (column {column}, row {row}) is out of bounds")]
    OutOfBounds { column: usize, row: usize },

    #[error("cell (column {column}, row {row}) is not the landing cell of its column")]
    InvalidPlacement { column: usize, row: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_column_display() {
        let err = GameError::InvalidColumn { column: 9, width: 7 };
        assert_eq!(err.to_string(), "invalid column (expected: 0-6, found: 9)");
    }

    #[test]
    fn invalid_placement_display() {
        let err = GameError::InvalidPlacement { column: 2, row: 0 };
        assert_eq!(
            err.to_string(),
            "cell (column 2, row 0) is not the landing cell of its column"
        );
    }

    #[test]
    fn invalid_config_display() {
        let err = GameError::InvalidConfig("width must be > 0".to_string());
        assert_eq!(err.to_string(), "invalid config: width must be > 0");
    }
}
