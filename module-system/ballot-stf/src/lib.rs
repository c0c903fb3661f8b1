#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod config;
mod logging;
#[cfg(test)]
mod tests;

use anyhow::bail;
use ballot_modules_api::{Context, Error, Event, Module, Spec, Storage, WorkingSet};
pub use config::{AppConfig, LedgerConfig, LoggingConfig};
pub use logging::init_logging;
use tracing::{debug, info};

/// The outcome of a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxEffect {
    /// The call's writes and events were committed.
    Successful,
    /// The call failed and left no trace in the state.
    Reverted,
}

/// What applying a call produced.
#[derive(Debug)]
pub struct TxReceipt {
    /// Whether the call was committed or reverted.
    pub effect: TxEffect,
    /// Events of a successful call. Always empty for a reverted one.
    pub events: Vec<Event>,
    /// The error of a reverted call.
    pub error: Option<Error>,
}

impl TxReceipt {
    /// Returns `true` if the call was committed.
    pub fn is_successful(&self) -> bool {
        self.effect == TxEffect::Successful
    }

    /// Human readable reason of a revert.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

/// Owns the storage and a module, and applies calls to it one at a time.
pub struct LedgerApp<C: Context, M> {
    storage: C::Storage,
    module: M,
}

impl<C, M> LedgerApp<C, M>
where
    C: Context,
    M: Module<Context = C>,
{
    /// Creates an application over `storage`. Genesis still has to be run
    /// with [`LedgerApp::init_chain`].
    pub fn new(storage: C::Storage, module: M) -> Self {
        Self { storage, module }
    }

    /// The module calls are dispatched to.
    pub fn module(&self) -> &M {
        &self.module
    }

    /// The live storage. Use [`Storage::snapshot`] for a pinned view.
    pub fn storage(&self) -> &C::Storage {
        &self.storage
    }

    /// Number of batches committed so far.
    pub fn version(&self) -> u64 {
        self.storage.version()
    }

    /// Runs the module's genesis and commits it. Returns the new version.
    pub fn init_chain(&mut self, config: &M::Config) -> anyhow::Result<u64> {
        if !self.storage.is_empty() {
            bail!(
                "Ledger state is already initialized at version {}",
                self.storage.version()
            );
        }

        let mut working_set = WorkingSet::new(self.storage.clone());
        self.module.genesis(config, &mut working_set)?;

        let version = working_set.checkpoint().commit()?;
        info!(version, "Ledger genesis committed");
        Ok(version)
    }

    /// Applies one call on behalf of `sender`.
    ///
    /// A rejected call is reported through the receipt. `Err` is returned
    /// only when committing a successful call fails.
    pub fn apply_call(
        &mut self,
        sender: <C as Spec>::Address,
        message: M::CallMessage,
    ) -> anyhow::Result<TxReceipt> {
        let context = C::new(sender);
        debug!(sender = %context.sender(), ?message, "Applying call");

        let mut working_set = WorkingSet::new(self.storage.clone());

        match self.module.call(message, &context, &mut working_set) {
            Ok(_) => {
                let events = working_set.take_events();

                let version = working_set.checkpoint().commit()?;
                info!(sender = %context.sender(), version, "Call applied");
                debug!("Call emitted {} events", events.len());

                Ok(TxReceipt {
                    effect: TxEffect::Successful,
                    events,
                    error: None,
                })
            }
            Err(e) => {
                working_set.revert();
                info!(sender = %context.sender(), error = %e, "Call reverted");

                Ok(TxReceipt {
                    effect: TxEffect::Reverted,
                    events: Vec::new(),
                    error: Some(e),
                })
            }
        }
    }

    /// Runs a read-only closure over a snapshot of the committed state.
    /// Anything the closure writes is discarded.
    pub fn query<R>(&self, query: impl FnOnce(&M, &mut WorkingSet<C::Storage>) -> R) -> R {
        let mut working_set = WorkingSet::new(self.storage.snapshot());
        query(&self.module, &mut working_set)
    }
}
