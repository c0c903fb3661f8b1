use thiserror::Error;

/// Rejections returned by the voting ledger.
///
/// Module calls surface these wrapped in [`ballot_modules_api::Error`]; use
/// [`LedgerError::from_module_error`] to recover the variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Only the authority may register candidates.
    #[error("Sender {sender} is not the authority and cannot register candidates")]
    Unauthorized {
        /// The rejected sender.
        sender: String,
    },
    /// The candidate index is not below the candidate count.
    #[error("Candidate index {index} is out of range, {count} candidates are registered")]
    InvalidCandidate {
        /// The requested index.
        index: u64,
        /// Number of registered candidates.
        count: u64,
    },
    /// The identity has already cast its ballot.
    #[error("Voter {voter} has already voted")]
    DuplicateVote {
        /// The identity that tried to vote again.
        voter: String,
    },
    /// A winner was requested before any candidate was registered.
    #[error("No candidates are registered")]
    NoCandidates,
    /// Candidate names must contain something besides whitespace.
    #[error("Candidate name must not be empty")]
    InvalidCandidateName,
    /// The tally of a candidate cannot grow any further.
    #[error("Vote count overflow for candidate {index}")]
    VoteCountOverflow {
        /// The candidate whose tally is full.
        index: u64,
    },
}

impl LedgerError {
    /// Returns the ledger rejection carried by a module error, if there is one.
    pub fn from_module_error(err: &ballot_modules_api::Error) -> Option<&Self> {
        match err {
            ballot_modules_api::Error::ModuleError(err) => err.downcast_ref::<Self>(),
        }
    }
}
