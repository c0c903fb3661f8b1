mod helpers;

use std::io::Write;

use ballot_modules_api::config::read_json_file;
use ballot_modules_api::{InMemoryStorage, Module, WorkingSet};
use helpers::*;
use tempfile::NamedTempFile;
use voting_ledger::{LedgerError, VotingLedger, VotingLedgerConfig};

fn write_config(content: &str) -> NamedTempFile {
    let mut config_file = NamedTempFile::new().unwrap();
    config_file.write_all(content.as_bytes()).unwrap();
    config_file
}

#[test]
fn genesis_from_json_file() {
    let authority = generate_address("authority");
    let config_file = write_config(&format!(
        r#"{{ "authority": "{authority}", "candidates": ["Alice", "Bob", "Carol"] }}"#
    ));

    let config: VotingLedgerConfig<C> = read_json_file(config_file.path()).unwrap();
    let ledger = VotingLedger::<C>::default();
    let mut working_set = WorkingSet::new(InMemoryStorage::new());
    ledger.genesis(&config, &mut working_set).unwrap();

    let all = ledger.get_all_candidates(&mut working_set);
    let names: Vec<_> = all.candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert!(all.candidates.iter().all(|c| c.vote_count == 0));

    assert_eq!(
        ledger.get_authority(&mut working_set).authority,
        Some(authority)
    );
    // Genesis registration emits no call events.
    assert!(working_set.events().is_empty());
}

#[test]
fn genesis_with_blank_candidate_fails() {
    let config = VotingLedgerConfig::<C> {
        authority: generate_address("authority"),
        candidates: vec!["Alice".to_owned(), " ".to_owned()],
    };

    let ledger = VotingLedger::<C>::default();
    let mut working_set = WorkingSet::new(InMemoryStorage::new());
    let err = ledger.genesis(&config, &mut working_set).unwrap_err();

    assert!(err
        .to_string()
        .contains("Invalid genesis candidate at position 1"));
    assert_eq!(ledger_error(err), LedgerError::InvalidCandidateName);
}

#[test]
fn genesis_rejects_malformed_authority() {
    let config_file = write_config(r#"{ "authority": "not-an-address" }"#);

    let err = read_json_file::<_, VotingLedgerConfig<C>>(config_file.path()).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Failed to parse JSON config file"));
}

#[test]
fn calls_before_genesis_fail() {
    let ledger = VotingLedger::<C>::default();
    let mut working_set = WorkingSet::new(InMemoryStorage::new());

    let response = ledger.get_authority(&mut working_set);
    assert_eq!(response.authority, None);

    let message = voting_ledger::CallMessage::RegisterCandidate {
        name: "Alice".to_owned(),
    };
    let context = <C as ballot_modules_api::Context>::new(generate_address("anyone"));
    let err = ledger.call(message, &context, &mut working_set).unwrap_err();
    assert!(voting_ledger::LedgerError::from_module_error(&err).is_none());
}
