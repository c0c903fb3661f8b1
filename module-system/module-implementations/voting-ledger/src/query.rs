//! Read-only views over the ledger. None of these methods write to the working set.

use ballot_modules_api::{Context, WorkingSet};
use serde::{Deserialize, Serialize};

use super::types::Candidate;
use super::{LedgerError, VotingLedger};

/// Number of registered candidates.
#[derive(Debug, Eq, PartialEq, Deserialize, Serialize, Clone)]
pub struct CandidatesCountResponse {
    /// Candidates are indexed `0..count`.
    pub count: u64,
}

/// A single candidate and its tally.
#[derive(Debug, Eq, PartialEq, Deserialize, Serialize, Clone)]
pub struct CandidateResponse {
    /// Display name.
    pub name: String,
    /// Ballots cast so far.
    pub vote_count: u64,
}

impl From<Candidate> for CandidateResponse {
    fn from(candidate: Candidate) -> Self {
        Self {
            name: candidate.name,
            vote_count: candidate.vote_count,
        }
    }
}

/// Every candidate in index order.
#[derive(Debug, Eq, PartialEq, Deserialize, Serialize, Clone)]
pub struct AllCandidatesResponse {
    /// Position in the list is the candidate index.
    pub candidates: Vec<Candidate>,
}

/// The candidate with the most votes. Ties resolve to the lowest index.
#[derive(Debug, Eq, PartialEq, Deserialize, Serialize, Clone)]
pub struct WinnerResponse {
    /// Index of the winning candidate.
    pub winner_index: u64,
    /// Its vote count.
    pub winner_votes: u64,
}

/// The identity allowed to register candidates.
#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct AuthorityResponse<A> {
    /// `None` until genesis has run.
    pub authority: Option<A>,
}

/// Whether an identity has cast its ballot.
#[derive(Debug, Eq, PartialEq, Deserialize, Serialize, Clone)]
pub struct HasVotedResponse {
    /// `false` for identities that never voted.
    pub has_voted: bool,
}

impl<C: Context> VotingLedger<C> {
    /// Returns the number of registered candidates.
    pub fn get_candidates_count(
        &self,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> CandidatesCountResponse {
        CandidatesCountResponse {
            count: self.candidates.len(working_set) as u64,
        }
    }

    /// Returns the candidate at `index`, or `InvalidCandidate` if there is none.
    pub fn get_candidate(
        &self,
        index: u64,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> Result<CandidateResponse, LedgerError> {
        let position = self.candidate_position(index, working_set)?;
        let count = self.candidates.len(working_set) as u64;

        self.candidates
            .get(position, working_set)
            .map(CandidateResponse::from)
            .ok_or(LedgerError::InvalidCandidate { index, count })
    }

    /// Returns all candidates in index order.
    pub fn get_all_candidates(
        &self,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> AllCandidatesResponse {
        AllCandidatesResponse {
            candidates: self.candidates.iter(working_set).collect(),
        }
    }

    /// Scans the candidates once. The leader changes only on a strictly
    /// greater count, so the earliest candidate among equals wins.
    pub fn get_winner(
        &self,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> Result<WinnerResponse, LedgerError> {
        let mut winner: Option<WinnerResponse> = None;

        for (index, candidate) in self.candidates.iter(working_set).enumerate() {
            match &winner {
                Some(leader) if candidate.vote_count <= leader.winner_votes => {}
                _ => {
                    winner = Some(WinnerResponse {
                        winner_index: index as u64,
                        winner_votes: candidate.vote_count,
                    })
                }
            }
        }

        winner.ok_or(LedgerError::NoCandidates)
    }

    /// Returns the authority set at genesis.
    pub fn get_authority(
        &self,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> AuthorityResponse<C::Address> {
        AuthorityResponse {
            authority: self.authority.get(working_set),
        }
    }

    /// Returns whether `address` has already voted.
    pub fn has_voted(
        &self,
        address: &C::Address,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> HasVotedResponse {
        HasVotedResponse {
            has_voted: self.has_voted.get(address, working_set).unwrap_or_default(),
        }
    }
}
