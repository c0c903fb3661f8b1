use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// A registered candidate and its tally.
#[derive(
    BorshDeserialize, BorshSerialize, Serialize, Deserialize, Debug, Clone, PartialEq, Eq,
)]
pub struct Candidate {
    /// Display name, free-form.
    pub name: String,
    /// Number of ballots cast for this candidate.
    pub vote_count: u64,
}

impl Candidate {
    /// A freshly registered candidate with no votes.
    pub fn new(name: String) -> Self {
        Self {
            name,
            vote_count: 0,
        }
    }
}
