//! Top-level program state

/// The host's current top-level state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramState {
    /// Main menu / title screen
    Entry,
    /// A game is being loaded or initialized
    Loading,
    /// A game is running and accepting input
    Playing,
}

/// Read-only query of the host's program state
pub trait ProgramStateSource: Send + Sync {
    fn program_state(&self) -> ProgramState;
}
