#![doc = include_str!("../README.md")]

mod address;
pub mod config;
pub mod default_context;
mod error;
mod prefix;
mod response;
#[cfg(test)]
mod tests;
pub mod utils;

use core::fmt::{Debug, Display};
use core::hash::Hash;

pub use address::{Address, AddressBech32, Bech32ParseError};
pub use ballot_state::{
    Event, InMemoryStorage, StateCheckpoint, StateMap, StateMapError, StateValue, StateValueError,
    StateVec, StateVecError, Storage, WorkingSet,
};
use borsh::{BorshDeserialize, BorshSerialize};
pub use error::Error;
pub use prefix::ModulePrefix;
pub use response::CallResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;
pub use sha2::Digest;

/// The minimal set of capabilities an identity type must offer to the module system.
pub trait AddressTrait:
    PartialEq
    + Eq
    + Debug
    + Display
    + Clone
    + Hash
    + AsRef<[u8]>
    + From<[u8; 32]>
    + for<'a> TryFrom<&'a [u8], Error = anyhow::Error>
    + BorshSerialize
    + BorshDeserialize
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
{
}

/// The `Spec` trait configures the key primitives used by a particular
/// deployment of the ledger.
///
/// `Spec` is almost always implemented on a [`Context`] object. Since all
/// modules are generic over a `Context`, swapping the `Context` swaps the
/// address format, the backing storage and the hash function without touching
/// any module code.
pub trait Spec {
    /// The identity type. Typically calculated as the hash of a public key.
    type Address: AddressTrait;

    /// State storage shared by all modules.
    type Storage: Storage + Send + Sync;

    /// The hasher used to derive module addresses.
    type Hasher: Digest<OutputSize = sha2::digest::typenum::U32>;
}

/// A context contains information which is passed to modules during
/// call execution. Currently, context includes the sender of the call,
/// already authenticated by whoever built the context.
pub trait Context: Spec + Clone + Debug + PartialEq {
    /// Sender of the call.
    fn sender(&self) -> &Self::Address;

    /// Constructor for the Context.
    fn new(sender: Self::Address) -> Self;
}

/// Every module has to implement this trait.
pub trait Module {
    /// Execution context.
    type Context: Context;

    /// Configuration for the genesis method.
    type Config;

    /// Module defined argument to the call method.
    type CallMessage: Debug + BorshSerialize + BorshDeserialize;

    /// Genesis is called once, when the ledger is deployed, and can be used to set
    /// initial state values in the module.
    fn genesis(
        &self,
        _config: &Self::Config,
        _working_set: &mut WorkingSet<<Self::Context as Spec>::Storage>,
    ) -> Result<(), Error> {
        Ok(())
    }

    /// Call allows interaction with the module and invokes state changes.
    /// It takes a module defined type and a context as parameters.
    fn call(
        &self,
        message: Self::CallMessage,
        context: &Self::Context,
        working_set: &mut WorkingSet<<Self::Context as Spec>::Storage>,
    ) -> Result<CallResponse, Error>;
}

/// Metadata every module exposes about itself.
pub trait ModuleInfo: Default {
    /// Execution context.
    type Context: Context;

    /// Returns address of the module.
    fn address(&self) -> &<Self::Context as Spec>::Address;

    /// Returns the prefix under which the module keeps its state.
    fn prefix(&self) -> ModulePrefix;
}
