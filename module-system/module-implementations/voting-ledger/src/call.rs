//! Call messages and their handlers.

use anyhow::Result;
use ballot_modules_api::{CallResponse, Context, WorkingSet};

use super::types::Candidate;
use super::{LedgerError, VotingLedger};

/// Call actions supported by the module.
#[derive(
    borsh::BorshDeserialize,
    borsh::BorshSerialize,
    serde::Serialize,
    serde::Deserialize,
    Debug,
    PartialEq,
    Eq,
    Clone,
)]
pub enum CallMessage {
    /// Appends a candidate to the registry. Authority only.
    RegisterCandidate {
        /// Display name of the new candidate. Must not be blank.
        name: String,
    },
    /// Casts the sender's single ballot for the candidate at `candidate_index`.
    CastBallot {
        /// Index of the chosen candidate, in registration order.
        candidate_index: u64,
    },
}

impl<C: Context> VotingLedger<C> {
    /// Registers a new candidate. Must be called by the authority.
    pub(crate) fn register_candidate(
        &self,
        name: String,
        context: &C,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> Result<CallResponse> {
        self.exit_if_not_authority(context, working_set)?;

        let index = self.push_candidate(name.clone(), working_set)?;

        working_set.add_event(
            "VotingLedger: register_candidate",
            &format!("Candidate {index} registered: {name}"),
        );

        Ok(CallResponse::default())
    }

    /// Casts the sender's ballot. Each identity votes at most once.
    pub(crate) fn cast_ballot(
        &self,
        candidate_index: u64,
        context: &C,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> Result<CallResponse> {
        let voter = context.sender();

        let index = self.candidate_position(candidate_index, working_set)?;
        self.exit_if_already_voted(voter, working_set)?;

        let mut candidate = self.candidates.get_or_err(index, working_set)?;
        candidate.vote_count = candidate
            .vote_count
            .checked_add(1)
            .ok_or(LedgerError::VoteCountOverflow {
                index: candidate_index,
            })?;

        self.candidates.set(index, &candidate, working_set)?;
        self.has_voted.set(voter, &true, working_set);

        working_set.add_event(
            "VotingLedger: cast_ballot",
            &format!("Ballot from {voter} cast for candidate {candidate_index}"),
        );

        Ok(CallResponse::default())
    }

    /// Validates `name` and appends it to the registry, returning its index.
    pub(crate) fn push_candidate(
        &self,
        name: String,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> Result<usize> {
        if name.trim().is_empty() {
            return Err(LedgerError::InvalidCandidateName.into());
        }

        Ok(self.candidates.push(&Candidate::new(name), working_set))
    }

    /// Maps an external index onto a position in the registry.
    pub(crate) fn candidate_position(
        &self,
        candidate_index: u64,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> Result<usize, LedgerError> {
        let count = self.candidates.len(working_set);

        usize::try_from(candidate_index)
            .ok()
            .filter(|index| *index < count)
            .ok_or(LedgerError::InvalidCandidate {
                index: candidate_index,
                count: count as u64,
            })
    }

    fn exit_if_not_authority(
        &self,
        context: &C,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> Result<()> {
        let authority = self.authority.get_or_err(working_set)?;

        if &authority != context.sender() {
            return Err(LedgerError::Unauthorized {
                sender: context.sender().to_string(),
            }
            .into());
        }

        Ok(())
    }

    fn exit_if_already_voted(
        &self,
        voter: &C::Address,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> Result<()> {
        if self.has_voted.get(voter, working_set).unwrap_or_default() {
            return Err(LedgerError::DuplicateVote {
                voter: voter.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
