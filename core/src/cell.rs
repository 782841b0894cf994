use serde::{Deserialize, Serialize};

/// Full state of one board position, the unit of the snapshot handed to
/// presentation code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub neighboring_mines: u8,
}

impl Cell {
    /// Neither revealed nor flagged yet.
    pub const fn is_hidden(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }
}
