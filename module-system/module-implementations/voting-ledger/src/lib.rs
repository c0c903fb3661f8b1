#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod call;
mod error;
pub mod genesis;
pub mod query;
mod types;

use ballot_modules_api::{
    CallResponse, Context, Error, ModuleInfo, ModulePrefix, StateMap, StateValue, StateVec,
    WorkingSet,
};
pub use call::CallMessage;
pub use error::LedgerError;
pub use query::{
    AllCandidatesResponse, AuthorityResponse, CandidateResponse, CandidatesCountResponse,
    HasVotedResponse, WinnerResponse,
};
use serde::{Deserialize, Serialize};
pub use types::Candidate;

const MODULE_NAME: &str = "VotingLedger";

/// Initial configuration of the [`VotingLedger`] module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotingLedgerConfig<C: Context> {
    /// The only identity allowed to register candidates.
    pub authority: C::Address,
    /// Candidates registered at deployment, in index order.
    #[serde(default)]
    pub candidates: Vec<String>,
}

/// A ballot ledger: authority-registered candidates and one ballot per identity.
#[derive(Clone)]
pub struct VotingLedger<C: Context> {
    /// Address of the module.
    pub address: C::Address,

    pub(crate) authority: StateValue<C::Address>,

    /// Registered candidates. The position of a candidate is its index.
    pub(crate) candidates: StateVec<Candidate>,

    /// Identities that have already cast their ballot. Absent means not voted.
    pub(crate) has_voted: StateMap<C::Address, bool>,
}

impl<C: Context> Default for VotingLedger<C> {
    fn default() -> Self {
        let module_prefix = ModulePrefix::new_module(module_path!(), MODULE_NAME);

        Self {
            address: C::Address::from(module_prefix.hash::<C>()),
            authority: StateValue::new(
                ModulePrefix::new_storage(module_path!(), MODULE_NAME, "authority").into(),
            ),
            candidates: StateVec::new(
                ModulePrefix::new_storage(module_path!(), MODULE_NAME, "candidates").into(),
            ),
            has_voted: StateMap::new(
                ModulePrefix::new_storage(module_path!(), MODULE_NAME, "has_voted").into(),
            ),
        }
    }
}

impl<C: Context> ModuleInfo for VotingLedger<C> {
    type Context = C;

    fn address(&self) -> &C::Address {
        &self.address
    }

    fn prefix(&self) -> ModulePrefix {
        ModulePrefix::new_module(module_path!(), MODULE_NAME)
    }
}

impl<C: Context> ballot_modules_api::Module for VotingLedger<C> {
    type Context = C;

    type Config = VotingLedgerConfig<C>;

    type CallMessage = CallMessage;

    fn genesis(
        &self,
        config: &Self::Config,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> Result<(), Error> {
        Ok(self.init_module(config, working_set)?)
    }

    fn call(
        &self,
        msg: Self::CallMessage,
        context: &Self::Context,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> Result<CallResponse, Error> {
        match msg {
            CallMessage::RegisterCandidate { name } => {
                Ok(self.register_candidate(name, context, working_set)?)
            }

            CallMessage::CastBallot { candidate_index } => {
                Ok(self.cast_ballot(candidate_index, context, working_set)?)
            }
        }
    }
}
