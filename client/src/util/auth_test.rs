use super::*;
use crate::state::session::{Credentials, StaticCredentials};

#[test]
fn guard_redirects_without_session() {
    let store = SessionStore::init();
    assert_eq!(evaluate_guard(&store), Guard::Redirect(Navigation::to_entry()));
}

#[test]
fn guard_allows_authenticated_session() {
    let mut store = SessionStore::init();
    store
        .authenticate(&StaticCredentials::default(), &Credentials::new("admin", "admin123"))
        .unwrap();
    assert_eq!(evaluate_guard(&store), Guard::Allow);
}

#[test]
fn guard_redirects_again_after_terminate() {
    let mut store = SessionStore::init();
    store
        .authenticate(&StaticCredentials::default(), &Credentials::new("admin", "admin123"))
        .unwrap();
    store.terminate();
    assert_eq!(evaluate_guard(&store), Guard::Redirect(Navigation::to_entry()));
    assert_eq!(evaluate_guard(&store), Guard::Redirect(Navigation::to_entry()));
}

#[test]
fn navigation_targets_replace_history() {
    assert_eq!(Navigation::to_entry().path, "/");
    assert_eq!(Navigation::to_dashboard().path, "/dashboard");
    assert!(Navigation::to_entry().replace);
    assert!(Navigation::to_dashboard().replace);
    assert!(Navigation::to_entry().options().replace);
}
