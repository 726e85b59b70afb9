//! Game state types.

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No game has been dealt yet.
    Start,
    /// A game is in progress and the side on turn may act.
    Playing,
    /// The player played an eight and must declare a suit before any turn
    /// progress.
    SelectingSuit,
    /// One side has emptied its hand. Terminal.
    GameOver,
}

/// Whose move it is. Also identifies the winner once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The human player.
    Player,
    /// The computer opponent.
    Ai,
}
