//! Initial state of the ledger.

use anyhow::{Context as _, Result};
use ballot_modules_api::{Context, WorkingSet};

use super::VotingLedger;

impl<C: Context> VotingLedger<C> {
    pub(crate) fn init_module(
        &self,
        config: &<Self as ballot_modules_api::Module>::Config,
        working_set: &mut WorkingSet<C::Storage>,
    ) -> Result<()> {
        self.authority.set(&config.authority, working_set);

        for (position, name) in config.candidates.iter().enumerate() {
            self.push_candidate(name.clone(), working_set)
                .with_context(|| format!("Invalid genesis candidate at position {position}"))?;
        }

        Ok(())
    }
}
