use serde::{Deserialize, Serialize};

/// Direction of a vote on a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Down,
    Up,
    /// Withdraw a previous vote
    Undo,
}

impl VoteType {
    /// Numeric `type` value expected by `/api/voteOnSponsorTime`
    pub fn code(&self) -> u8 {
        match self {
            VoteType::Down => 0,
            VoteType::Up => 1,
            VoteType::Undo => 20,
        }
    }
}
