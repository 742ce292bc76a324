use alumnexus_core::{AuthError, AuthPhase, AuthService, NewRegistration, UserPatch, UserRole};
use std::time::Duration;

fn service() -> AuthService {
    AuthService::with_latency(Duration::ZERO)
}

#[test]
fn login_with_known_good_credentials_authenticates() {
    let mut auth = service();
    assert_eq!(auth.phase(), AuthPhase::Anonymous);

    let user = auth.login("john@alumni.com", "password123").unwrap();
    assert_eq!(user.name, "John Smith");
    assert_eq!(user.role, UserRole::Alumni);
    assert!(auth.is_authenticated());
    assert_eq!(auth.phase(), AuthPhase::Authenticated);
    assert_eq!(auth.current_user().unwrap().id, user.id);
}

#[test]
fn admin_login_returns_admin_role() {
    let mut auth = service();
    let user = auth.login("admin@alumnexus.com", "admin123").unwrap();
    assert_eq!(user.role, UserRole::Admin);
}

#[test]
fn wrong_password_is_rejected_and_leaves_session_anonymous() {
    let mut auth = service();
    let err = auth.login("john@alumni.com", "wrong").unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(!auth.is_authenticated());
    assert_eq!(auth.phase(), AuthPhase::Anonymous);
}

#[test]
fn credential_match_is_case_sensitive() {
    let mut auth = service();
    assert!(auth.login("John@alumni.com", "password123").is_err());
    assert!(auth.login("john@alumni.com", "Password123").is_err());
}

#[test]
fn failed_login_keeps_the_previous_user() {
    let mut auth = service();
    auth.login("john@alumni.com", "password123").unwrap();

    assert!(auth.login("sarah@alumni.com", "wrong").is_err());
    assert_eq!(auth.current_user().unwrap().email, "john@alumni.com");
    assert_eq!(auth.phase(), AuthPhase::Authenticated);
}

#[test]
fn later_login_wins_over_earlier_session() {
    // Overlapping logins are last-write-wins by design; sequential calls
    // model the accepted race's final state.
    let mut auth = service();
    auth.login("john@alumni.com", "password123").unwrap();
    auth.login("sarah@alumni.com", "password123").unwrap();
    assert_eq!(auth.current_user().unwrap().email, "sarah@alumni.com");
}

#[test]
fn begun_login_keeps_the_session_authenticating_until_resolved() {
    let mut auth = service();
    let pending = auth.begin_login("john@alumni.com", "password123");

    assert_eq!(auth.phase(), AuthPhase::Authenticating);
    assert!(!auth.is_authenticated());

    auth.resolve_login(pending).unwrap();
    assert_eq!(auth.phase(), AuthPhase::Authenticated);
}

#[test]
fn failed_pending_login_falls_back_to_anonymous() {
    let mut auth = service();
    let pending = auth.begin_login("john@alumni.com", "wrong");
    assert_eq!(auth.phase(), AuthPhase::Authenticating);

    assert!(auth.resolve_login(pending).is_err());
    assert_eq!(auth.phase(), AuthPhase::Anonymous);
}

#[test]
fn overlapping_pending_logins_resolve_last_write_wins() {
    let mut auth = service();
    let first = auth.begin_login("john@alumni.com", "password123");
    let second = auth.begin_login("sarah@alumni.com", "password123");

    auth.resolve_login(first).unwrap();
    // One attempt is still outstanding.
    assert_eq!(auth.phase(), AuthPhase::Authenticating);

    auth.resolve_login(second).unwrap();
    assert_eq!(auth.phase(), AuthPhase::Authenticated);
    assert_eq!(auth.current_user().unwrap().email, "sarah@alumni.com");
}

#[test]
fn begun_registration_is_observable_as_authenticating() {
    let mut auth = service();
    let pending = auth.begin_register(NewRegistration {
        email: "pending@alumni.com".to_string(),
        password: "secret".to_string(),
        name: "Pending Grad".to_string(),
        ..NewRegistration::default()
    });

    assert_eq!(auth.phase(), AuthPhase::Authenticating);

    auth.resolve_register(pending).unwrap();
    // Registration never logs the user in.
    assert_eq!(auth.phase(), AuthPhase::Anonymous);
}

#[test]
fn register_with_taken_email_is_rejected() {
    let mut auth = service();
    let err = auth
        .register(NewRegistration {
            email: "john@alumni.com".to_string(),
            password: "whatever".to_string(),
            name: "Imposter".to_string(),
            ..NewRegistration::default()
        })
        .unwrap_err();
    assert_eq!(err, AuthError::EmailAlreadyRegistered);
    assert_eq!(err.to_string(), "Email already registered");
}

#[test]
fn register_creates_unverified_alumni_without_logging_in() {
    let mut auth = service();
    let user = auth
        .register(NewRegistration {
            email: "new@alumni.com".to_string(),
            password: "secret".to_string(),
            name: "New Grad".to_string(),
            batch: Some("2024".to_string()),
            department: Some("Computer Science".to_string()),
            ..NewRegistration::default()
        })
        .unwrap();

    assert_eq!(user.role, UserRole::Alumni);
    assert_eq!(user.is_verified, Some(false));
    assert_eq!(user.id, "4");
    assert!(!user.created_at.is_empty());
    assert!(!auth.is_authenticated());

    // The recorded credential is immediately usable.
    let logged_in = auth.login("new@alumni.com", "secret").unwrap();
    assert_eq!(logged_in.name, "New Grad");
}

#[test]
fn registering_the_same_email_twice_fails_the_second_time() {
    let mut auth = service();
    let registration = NewRegistration {
        email: "twice@alumni.com".to_string(),
        password: "secret".to_string(),
        name: "Once".to_string(),
        ..NewRegistration::default()
    };
    auth.register(registration.clone()).unwrap();
    assert_eq!(
        auth.register(registration).unwrap_err(),
        AuthError::EmailAlreadyRegistered
    );
}

#[test]
fn logout_clears_session_and_is_idempotent() {
    let mut auth = service();
    auth.login("john@alumni.com", "password123").unwrap();

    auth.logout();
    assert!(!auth.is_authenticated());
    assert_eq!(auth.phase(), AuthPhase::Anonymous);

    auth.logout();
    assert!(!auth.is_authenticated());
}

#[test]
fn update_user_shallow_merges_into_current_user() {
    let mut auth = service();
    auth.login("john@alumni.com", "password123").unwrap();

    auth.update_user(&UserPatch {
        company: Some("Anthropic".to_string()),
        bio: Some("New bio".to_string()),
        ..UserPatch::default()
    });

    let user = auth.current_user().unwrap();
    assert_eq!(user.company.as_deref(), Some("Anthropic"));
    assert_eq!(user.bio.as_deref(), Some("New bio"));
    // Untouched fields survive the merge.
    assert_eq!(user.designation.as_deref(), Some("Software Engineer"));
    assert_eq!(user.role, UserRole::Alumni);
}

#[test]
fn update_user_is_noop_when_anonymous() {
    let mut auth = service();
    auth.update_user(&UserPatch {
        name: Some("Ghost".to_string()),
        ..UserPatch::default()
    });
    assert!(auth.current_user().is_none());
}
