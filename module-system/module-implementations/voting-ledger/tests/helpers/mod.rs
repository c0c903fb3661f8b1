use ballot_modules_api::default_context::DefaultContext;
use ballot_modules_api::{Context, Error, InMemoryStorage, Module, Spec, WorkingSet};
use voting_ledger::{CallMessage, LedgerError, VotingLedger, VotingLedgerConfig};

pub type C = DefaultContext;

pub fn generate_address(key: &str) -> <C as Spec>::Address {
    ballot_modules_api::utils::generate_address::<C>(key)
}

#[allow(dead_code)]
/// A ledger after genesis, owned by the identity derived from `"authority"`.
pub struct TestLedger {
    pub ledger: VotingLedger<C>,
    pub authority: <C as Spec>::Address,
    pub working_set: WorkingSet<InMemoryStorage>,
}

#[allow(dead_code)]
impl TestLedger {
    pub fn new(candidates: &[&str]) -> Self {
        let authority = generate_address("authority");
        let ledger = VotingLedger::<C>::default();
        let mut working_set = WorkingSet::new(InMemoryStorage::new());

        let config = VotingLedgerConfig {
            authority,
            candidates: candidates.iter().map(|name| name.to_string()).collect(),
        };
        ledger.genesis(&config, &mut working_set).unwrap();

        Self {
            ledger,
            authority,
            working_set,
        }
    }

    pub fn register(&mut self, sender: <C as Spec>::Address, name: &str) -> Result<(), Error> {
        let message = CallMessage::RegisterCandidate {
            name: name.to_owned(),
        };
        self.ledger
            .call(message, &C::new(sender), &mut self.working_set)
            .map(|_| ())
    }

    pub fn vote(&mut self, voter: <C as Spec>::Address, candidate_index: u64) -> Result<(), Error> {
        let message = CallMessage::CastBallot { candidate_index };
        self.ledger
            .call(message, &C::new(voter), &mut self.working_set)
            .map(|_| ())
    }

    pub fn vote_counts(&mut self) -> Vec<u64> {
        self.ledger
            .get_all_candidates(&mut self.working_set)
            .candidates
            .into_iter()
            .map(|candidate| candidate.vote_count)
            .collect()
    }
}

#[allow(dead_code)]
pub fn ledger_error(err: Error) -> LedgerError {
    LedgerError::from_module_error(&err)
        .cloned()
        .unwrap_or_else(|| panic!("Expected a ledger rejection, got: {err}"))
}
