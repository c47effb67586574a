//! End-to-end asset flows through the dispatch surface: create, query, and
//! transfer against a shared in-memory store, with authorization driven by
//! the injected identity provider.

use std::sync::Arc;

use tally_dispatch::{DispatchError, Dispatcher, Response};
use tally_ledger::{
    AssetService, CommonNameResolver, LedgerError, MemoryStore, StateStore, StaticIdentity,
    SubjectResolver,
};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// A dispatcher over `store` whose authenticated caller is `caller`.
fn dispatcher_as(store: &MemoryStore, caller: &str) -> Dispatcher {
    Dispatcher::new(AssetService::new(
        Arc::new(store.clone()),
        Arc::new(StaticIdentity::new(caller)),
        Arc::new(SubjectResolver),
    ))
}

#[test]
fn create_query_transfer_with_stale_owner_rejection() {
    let store = MemoryStore::new();
    let as_alice = dispatcher_as(&store, "alice");

    // Create and read back.
    as_alice
        .dispatch("createAsset", &args(&["ast1", "alice", "100"]))
        .expect("create should succeed");
    let response = as_alice.dispatch("queryAsset", &args(&["ast1"])).unwrap();
    assert_eq!(
        response.payload().unwrap(),
        br#"{"id":"ast1","owner":"alice","value":100}"#
    );

    // Owner transfers to bob.
    as_alice
        .dispatch("transferAsset", &args(&["ast1", "bob"]))
        .expect("owner transfer should succeed");

    // Alice is now a stale owner; her next transfer is unauthorized.
    let err = as_alice
        .dispatch("transferAsset", &args(&["ast1", "carol"]))
        .unwrap_err();
    match err {
        DispatchError::Ledger(LedgerError::Unauthorized { owner, caller, .. }) => {
            assert_eq!(owner.as_str(), "bob");
            assert_eq!(caller.as_str(), "alice");
        }
        other => panic!("expected Unauthorized, got: {other:?}"),
    }

    // The record still belongs to bob, value unchanged.
    let response = as_alice.dispatch("queryAsset", &args(&["ast1"])).unwrap();
    assert_eq!(
        response.payload().unwrap(),
        br#"{"id":"ast1","owner":"bob","value":100}"#
    );
}

#[test]
fn malformed_value_leaves_no_partial_write() {
    let store = MemoryStore::new();
    let d = dispatcher_as(&store, "a");

    let err = d
        .dispatch("createAsset", &args(&["x", "a", "not-a-number"]))
        .unwrap_err();
    assert!(matches!(err, DispatchError::InvalidArgument(_)));

    let err = d.dispatch("queryAsset", &args(&["x"])).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Ledger(LedgerError::NotFound { .. })
    ));
    assert!(store.is_empty());
}

#[test]
fn duplicate_create_preserves_first_record() {
    let store = MemoryStore::new();
    let d = dispatcher_as(&store, "alice");

    d.dispatch("createAsset", &args(&["ast1", "alice", "100"]))
        .unwrap();
    let err = d
        .dispatch("createAsset", &args(&["ast1", "bob", "999"]))
        .unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Ledger(LedgerError::AlreadyExists { .. })
    ));

    let response = d.dispatch("queryAsset", &args(&["ast1"])).unwrap();
    assert_eq!(
        response.payload().unwrap(),
        br#"{"id":"ast1","owner":"alice","value":100}"#
    );
}

#[test]
fn query_has_no_side_effects() {
    let store = MemoryStore::new();
    let d = dispatcher_as(&store, "alice");
    d.dispatch("createAsset", &args(&["ast1", "alice", "100"]))
        .unwrap();
    let before = store.get("ast1").unwrap().unwrap();

    d.dispatch("queryAsset", &args(&["ast1"])).unwrap();
    d.dispatch("queryAsset", &args(&["ast1"])).unwrap();

    assert_eq!(store.get("ast1").unwrap().unwrap(), before);
    assert_eq!(store.len(), 1);
}

#[test]
fn transfers_chain_across_callers() {
    let store = MemoryStore::new();
    dispatcher_as(&store, "alice")
        .dispatch("createAsset", &args(&["ast1", "alice", "100"]))
        .unwrap();
    dispatcher_as(&store, "alice")
        .dispatch("transferAsset", &args(&["ast1", "bob"]))
        .unwrap();
    dispatcher_as(&store, "bob")
        .dispatch("transferAsset", &args(&["ast1", "carol"]))
        .unwrap();

    let response = dispatcher_as(&store, "anyone")
        .dispatch("queryAsset", &args(&["ast1"]))
        .unwrap();
    assert_eq!(
        response.payload().unwrap(),
        br#"{"id":"ast1","owner":"carol","value":100}"#
    );
}

#[test]
fn certificate_subject_callers_resolve_through_common_name() {
    let store = MemoryStore::new();

    // A host that authenticates X.500-style subjects, configured with the
    // common-name resolution rule.
    let as_cert = |subject: &str| {
        Dispatcher::new(AssetService::new(
            Arc::new(store.clone()),
            Arc::new(StaticIdentity::new(subject)),
            Arc::new(CommonNameResolver),
        ))
    };

    store_create(&store, "ast1", "alice", 100);

    let err = as_cert("CN=mallory,O=example")
        .dispatch("transferAsset", &args(&["ast1", "mallory"]))
        .unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Ledger(LedgerError::Unauthorized { .. })
    ));

    as_cert("CN=alice,OU=clients,O=example")
        .dispatch("transferAsset", &args(&["ast1", "bob"]))
        .expect("certificate CN matching the owner should authorize");
}

/// Seed an asset directly through a subject-resolving dispatcher.
fn store_create(store: &MemoryStore, id: &str, owner: &str, value: i64) {
    dispatcher_as(store, owner)
        .dispatch(
            "createAsset",
            &args(&[id, owner, &value.to_string()]),
        )
        .expect("seed create should succeed");
}

#[test]
fn unknown_operation_and_arity_rejected_without_store_access() {
    let store = MemoryStore::new();
    let d = dispatcher_as(&store, "alice");

    assert!(matches!(
        d.dispatch("burnAsset", &args(&["ast1"])).unwrap_err(),
        DispatchError::UnknownOperation { .. }
    ));
    assert!(matches!(
        d.dispatch("transferAsset", &args(&["ast1"])).unwrap_err(),
        DispatchError::Arity { .. }
    ));
    assert!(store.is_empty());
}

#[test]
fn mutations_return_empty_responses() {
    let store = MemoryStore::new();
    let d = dispatcher_as(&store, "alice");

    let created = d
        .dispatch("createAsset", &args(&["ast1", "alice", "1"]))
        .unwrap();
    assert_eq!(created, Response::Empty);

    let transferred = d
        .dispatch("transferAsset", &args(&["ast1", "bob"]))
        .unwrap();
    assert_eq!(transferred, Response::Empty);
}
