//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to join before the next hand.
    WaitingForPlayers,
    /// Waiting for stick/twist decisions from active players.
    PlayerTurn,
    /// Every player has stuck or busted; the outcome can be computed.
    HandOver,
}
