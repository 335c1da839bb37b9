use super::*;
use crate::state::session::StaticCredentials;

#[test]
fn valid_credentials_navigate_to_dashboard() {
    let mut store = SessionStore::init();
    let nav = submit_credentials(
        &mut store,
        &StaticCredentials::default(),
        &Credentials::new("admin", "admin123"),
    );
    assert_eq!(nav, Ok(Navigation::to_dashboard()));
    assert!(nav.unwrap().replace);
    assert!(store.is_authenticated());
}

#[test]
fn invalid_credentials_surface_failure_without_navigation() {
    let mut store = SessionStore::init();
    let result = submit_credentials(&mut store, &StaticCredentials::default(), &Credentials::new("admin", "wrong"));
    assert_eq!(result, Err(AuthFailure));
    assert!(!store.is_authenticated());
}

#[test]
fn input_is_not_trimmed() {
    let mut store = SessionStore::init();
    let result = submit_credentials(
        &mut store,
        &StaticCredentials::default(),
        &Credentials::new("admin ", "admin123"),
    );
    assert!(result.is_err());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn notify_failure_is_noop_outside_browser() {
    notify_failure("Invalid credentials!");
}
