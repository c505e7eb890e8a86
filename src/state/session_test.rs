use super::*;
use leptos::prelude::GetUntracked;

use crate::util::session_store::MemoryStore;

fn token_pair(access: &str) -> TokenPair {
    TokenPair { access: access.to_owned(), refresh: "refresh-abc".to_owned() }
}

// ============================================================================
// Restoring at startup
// ============================================================================

#[test]
fn restore_with_empty_store_is_anonymous() {
    let store = MemoryStore::new();
    let session = SessionState::restore(&store);
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn restore_with_persisted_token_is_authenticated() {
    let store = MemoryStore::with_token("tok-from-last-visit");
    let session = SessionState::restore(&store);
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok-from-last-visit"));
}

// ============================================================================
// Login transition
// ============================================================================

#[test]
fn establish_authenticates_and_persists_the_access_token() {
    let store = MemoryStore::new();
    let session = SessionState::establish(&store, &token_pair("tok-123"));
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok-123"));
    assert_eq!(store.load(), Some("tok-123".to_owned()));
}

#[test]
fn establish_drops_the_refresh_token() {
    let store = MemoryStore::new();
    let session = SessionState::establish(&store, &token_pair("tok-123"));
    assert_eq!(session.token(), Some("tok-123"));
    assert_eq!(store.load(), Some("tok-123".to_owned()));
}

#[test]
fn establish_replaces_a_stale_persisted_token() {
    let store = MemoryStore::with_token("stale");
    let session = SessionState::establish(&store, &token_pair("fresh"));
    assert_eq!(session.token(), Some("fresh"));
    assert_eq!(store.load(), Some("fresh".to_owned()));
}

// ============================================================================
// Logout transition
// ============================================================================

#[test]
fn clear_is_anonymous_and_wipes_the_store() {
    let store = MemoryStore::with_token("tok-123");
    let session = SessionState::clear(&store);
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(store.load(), None);
}

#[test]
fn login_after_logout_round_trips() {
    let store = MemoryStore::new();
    let _ = SessionState::establish(&store, &token_pair("first"));
    let _ = SessionState::clear(&store);
    let session = SessionState::restore(&store);
    assert!(!session.is_authenticated());

    let session = SessionState::establish(&store, &token_pair("second"));
    assert!(session.is_authenticated());
    assert_eq!(store.load(), Some("second".to_owned()));
}

// ============================================================================
// Store and state never diverge
// ============================================================================

#[test]
fn every_transition_leaves_state_and_store_in_agreement() {
    let store = MemoryStore::new();

    let session = SessionState::restore(&store);
    assert_eq!(session.token().map(str::to_owned), store.load());

    let session = SessionState::establish(&store, &token_pair("tok-123"));
    assert_eq!(session.token().map(str::to_owned), store.load());

    let session = SessionState::clear(&store);
    assert_eq!(session.token().map(str::to_owned), store.load());
}

// ============================================================================
// Forced expiry on 401
// ============================================================================

#[test]
fn unauthorized_failure_tears_the_session_down() {
    let store = MemoryStore::new();
    let session = RwSignal::new(SessionState::establish(&store, &token_pair("tok-123")));

    assert!(expire_on_unauthorized(session, &ApiError::Unauthorized));
    assert!(!session.get_untracked().is_authenticated());
    assert_eq!(session.get_untracked().token(), None);
}

#[test]
fn other_failures_leave_the_session_alone() {
    let store = MemoryStore::new();
    let session = RwSignal::new(SessionState::establish(&store, &token_pair("tok-123")));

    let failures = [
        ApiError::Network("sem conexão".to_owned()),
        ApiError::Rejected { status: 500, message: None },
        ApiError::Malformed("EOF".to_owned()),
    ];
    for failure in &failures {
        assert!(!expire_on_unauthorized(session, failure));
        assert_eq!(session.get_untracked().token(), Some("tok-123"));
    }
}
