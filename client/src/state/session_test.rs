use std::sync::Mutex;

use super::*;

// =============================================================
// Captured log output
// =============================================================

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        CAPTURED.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn captured_lines() -> Vec<String> {
    CAPTURED.lock().unwrap().clone()
}

fn install_capture() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);
}

// =============================================================
// StaticCredentials
// =============================================================

#[test]
fn default_credentials_accept_admin_pair() {
    let creds = StaticCredentials::default();
    assert_eq!(creds.verify(&Credentials::new("admin", "admin123")), Ok(()));
}

#[test]
fn default_credentials_reject_wrong_secret() {
    let creds = StaticCredentials::default();
    assert_eq!(creds.verify(&Credentials::new("admin", "wrong")), Err(AuthFailure));
}

#[test]
fn comparison_is_exact() {
    let creds = StaticCredentials::default();
    assert!(creds.verify(&Credentials::new("Admin", "admin123")).is_err());
    assert!(creds.verify(&Credentials::new(" admin", "admin123")).is_err());
    assert!(creds.verify(&Credentials::new("", "")).is_err());
}

#[test]
fn custom_set_accepts_every_listed_pair() {
    let creds = StaticCredentials::new(vec![
        Credentials::new("ops", "k1"),
        Credentials::new("audit", "k2"),
    ]);
    assert!(creds.verify(&Credentials::new("ops", "k1")).is_ok());
    assert!(creds.verify(&Credentials::new("audit", "k2")).is_ok());
    assert!(creds.verify(&Credentials::new("admin", "admin123")).is_err());
}

#[test]
fn debug_output_redacts_secret() {
    let rendered = format!("{:?}", Credentials::new("admin", "admin123"));
    assert!(rendered.contains("admin"));
    assert!(!rendered.contains("admin123"));
}

#[test]
fn auth_failure_message_matches_login_notification() {
    assert_eq!(
        AuthFailure.to_string(),
        "Invalid credentials! Please use correct admin username and access key."
    );
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_starts_unauthenticated() {
    let store = SessionStore::init();
    assert!(!store.is_authenticated());
    assert!(store.session().is_none());
}

#[test]
fn successful_authenticate_marks_store_authenticated() {
    let mut store = SessionStore::init();
    let auth = StaticCredentials::default();
    let session = store.authenticate(&auth, &Credentials::new("admin", "admin123")).unwrap();
    assert!(store.is_authenticated());
    assert_eq!(session.username, "admin");
    assert_eq!(store.session(), Some(&session));
}

#[test]
fn failed_authenticate_leaves_store_untouched() {
    let mut store = SessionStore::init();
    let auth = StaticCredentials::default();
    assert_eq!(store.authenticate(&auth, &Credentials::new("admin", "wrong")), Err(AuthFailure));
    assert!(!store.is_authenticated());
}

#[test]
fn failed_attempt_does_not_revoke_existing_session() {
    let mut store = SessionStore::init();
    let auth = StaticCredentials::default();
    store.authenticate(&auth, &Credentials::new("admin", "admin123")).unwrap();
    assert!(store.authenticate(&auth, &Credentials::new("admin", "nope")).is_err());
    assert!(store.is_authenticated());
}

#[test]
fn unlimited_retries_are_allowed() {
    let mut store = SessionStore::init();
    let auth = StaticCredentials::default();
    for _ in 0..20 {
        assert!(store.authenticate(&auth, &Credentials::new("admin", "bad")).is_err());
    }
    assert!(store.authenticate(&auth, &Credentials::new("admin", "admin123")).is_ok());
}

#[test]
fn each_login_mints_a_new_session_id() {
    let mut store = SessionStore::init();
    let auth = StaticCredentials::default();
    let creds = Credentials::new("admin", "admin123");
    let first = store.authenticate(&auth, &creds).unwrap();
    store.terminate();
    let second = store.authenticate(&auth, &creds).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn terminate_is_idempotent() {
    let mut store = SessionStore::init();
    let auth = StaticCredentials::default();
    store.authenticate(&auth, &Credentials::new("admin", "admin123")).unwrap();
    store.terminate();
    assert!(!store.is_authenticated());
    store.terminate();
    assert!(!store.is_authenticated());
}

#[test]
fn handle_delegates_to_wrapped_authenticator() {
    struct DenyAll;
    impl Authenticator for DenyAll {
        fn verify(&self, _: &Credentials) -> Result<(), AuthFailure> {
            Err(AuthFailure)
        }
    }

    let handle = AuthenticatorHandle::new(DenyAll);
    let mut store = SessionStore::init();
    assert!(store.authenticate(handle.get(), &Credentials::new("admin", "admin123")).is_err());
    assert!(AuthenticatorHandle::default().get().verify(&Credentials::new("admin", "admin123")).is_ok());
}

#[test]
fn login_outcomes_never_log_the_username() {
    install_capture();
    let typed_key = "key-typed-into-username-7731";
    let auth = StaticCredentials::new(vec![Credentials::new(typed_key, "pw-4418")]);
    let mut store = SessionStore::init();

    assert!(store.authenticate(&auth, &Credentials::new(typed_key, "nope")).is_err());
    let session = store.authenticate(&auth, &Credentials::new(typed_key, "pw-4418")).unwrap();
    store.terminate();

    let lines = captured_lines();
    assert!(lines.iter().any(|l| l == "login rejected"));
    assert!(lines.iter().any(|l| l.contains(&session.id.to_string())));
    assert!(lines.iter().all(|l| !l.contains(typed_key) && !l.contains("pw-4418")));
}
