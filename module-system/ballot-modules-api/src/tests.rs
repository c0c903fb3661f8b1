use crate::default_context::DefaultContext;
use crate::utils::generate_address;
use crate::{Address, Context, ModulePrefix};

#[test]
fn test_storage_prefix_layout() {
    let prefix = ModulePrefix::new_storage("voting_ledger", "VotingLedger", "candidates");
    let state_prefix: ballot_state::Prefix = prefix.into();
    assert_eq!(
        state_prefix.as_bytes(),
        b"voting_ledger/VotingLedger/candidates/"
    );

    let module_prefix: ballot_state::Prefix =
        ModulePrefix::new_module("voting_ledger", "VotingLedger").into();
    assert_eq!(module_prefix.as_bytes(), b"voting_ledger/VotingLedger/");
}

#[test]
fn test_prefix_hash_separates_modules() {
    let first = ModulePrefix::new_module("voting_ledger", "VotingLedger");
    let second = ModulePrefix::new_module("voting_ledger", "OtherLedger");
    assert_eq!(
        first.hash::<DefaultContext>(),
        first.hash::<DefaultContext>()
    );
    assert_ne!(
        first.hash::<DefaultContext>(),
        second.hash::<DefaultContext>()
    );
}

#[test]
fn test_generate_address_is_deterministic() {
    let alice = generate_address::<DefaultContext>("alice");
    let bob = generate_address::<DefaultContext>("bob");
    assert_eq!(alice, generate_address::<DefaultContext>("alice"));
    assert_ne!(alice, bob);
}

#[test]
fn test_context_exposes_sender() {
    let sender = Address::from([3; 32]);
    let context = DefaultContext::new(sender);
    assert_eq!(context.sender(), &sender);
}
