use serde::{Deserialize, Serialize};

use crate::{Address, Context, InMemoryStorage, Spec};

/// The context used by native deployments of the ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefaultContext {
    /// The authenticated sender of the call.
    pub sender: Address,
}

impl Spec for DefaultContext {
    type Address = Address;
    type Storage = InMemoryStorage;
    type Hasher = sha2::Sha256;
}

impl Context for DefaultContext {
    fn sender(&self) -> &Self::Address {
        &self.sender
    }

    fn new(sender: Self::Address) -> Self {
        Self { sender }
    }
}
