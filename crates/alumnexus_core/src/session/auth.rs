//! Mocked authentication service.
//!
//! # Responsibility
//! - Resolve login/register against an in-memory credential store.
//! - Expose current-user state and the derived authentication phase.
//!
//! # Invariants
//! - Credential matching is exact and case-sensitive on email and password.
//! - `is_authenticated() == current_user().is_some()`.
//! - A failed login leaves the current user untouched.
//! - `phase()` reports `Authenticating` exactly while at least one begun
//!   login/register awaits resolution.
//! - Overlapping login/register resolutions are last-write-wins; this is
//!   accepted looseness for a single-user session, not a guarantee to
//!   strengthen.

use chrono::Utc;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::thread;
use std::time::Duration;

use crate::model::user::{User, UserPatch, UserRole};

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Domain errors surfaced as result values, never panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No credential matches the email/password pair.
    InvalidCredentials,
    /// The email already exists in the credential store.
    EmailAlreadyRegistered,
    /// Reserved for a real backend: transport failures surface through the
    /// same result shape as the two domain errors.
    Transport(String),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "Invalid email or password"),
            Self::EmailAlreadyRegistered => write!(f, "Email already registered"),
            Self::Transport(message) => write!(f, "{message}"),
        }
    }
}

impl Error for AuthError {}

/// Derived authentication state machine position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// One credential-store entry. The password stays inside this module.
#[derive(Debug, Clone)]
struct Credential {
    user: User,
    password: String,
}

/// Registration request for a new alumni account.
#[derive(Debug, Clone, Default)]
pub struct NewRegistration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub batch: Option<String>,
    pub department: Option<String>,
    pub company: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub roll_number: Option<String>,
    pub graduation_year: Option<String>,
    pub degree: Option<String>,
    pub skills: Vec<String>,
}

/// Login attempt begun but not yet resolved.
///
/// The session reports `AuthPhase::Authenticating` while one of these is
/// outstanding; every begun attempt must be passed back to
/// [`AuthService::resolve_login`].
#[derive(Debug)]
pub struct PendingLogin {
    email: String,
    password: String,
}

/// Registration begun but not yet resolved.
#[derive(Debug)]
pub struct PendingRegistration {
    registration: NewRegistration,
}

/// Session-scoped authentication service over an in-memory credential store.
pub struct AuthService {
    credentials: Vec<Credential>,
    current: Option<User>,
    in_flight: u32,
    latency: Duration,
}

impl AuthService {
    /// Creates a service over the demo credential store with simulated
    /// network latency on login/register.
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(1000))
    }

    /// Creates a service with explicit latency; tests pass zero.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            credentials: demo_credentials(),
            current: None,
            in_flight: 0,
            latency,
        }
    }

    /// Current user, when authenticated.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Derived: true exactly when a current user exists.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Position in the Anonymous/Authenticating/Authenticated machine.
    ///
    /// Derived from (outstanding attempts, current user) so a failed login
    /// falls back to the prior state instead of forcing a logout.
    pub fn phase(&self) -> AuthPhase {
        if self.in_flight > 0 {
            AuthPhase::Authenticating
        } else if self.current.is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Anonymous
        }
    }

    /// Begins a login attempt without blocking.
    ///
    /// The session enters `Authenticating` immediately; the caller stays
    /// free to interact with the rest of the model until it resolves the
    /// attempt via [`resolve_login`](Self::resolve_login).
    pub fn begin_login(&mut self, email: &str, password: &str) -> PendingLogin {
        self.in_flight += 1;
        PendingLogin {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Resolves a begun login with exact case-sensitive email+password match.
    ///
    /// Success sets the current user (overwriting any previous one:
    /// last-write-wins) and returns the matched user with no password
    /// attached. Failure leaves session state untouched. Simulated network
    /// latency is paid here, not in `begin_login`.
    ///
    /// # Errors
    /// - `AuthError::InvalidCredentials` when no credential matches.
    pub fn resolve_login(&mut self, pending: PendingLogin) -> AuthResult<User> {
        self.simulate_latency();

        let matched = self
            .credentials
            .iter()
            .find(|credential| {
                credential.user.email == pending.email
                    && credential.password == pending.password
            })
            .map(|credential| credential.user.clone());

        self.in_flight = self.in_flight.saturating_sub(1);
        match matched {
            Some(user) => {
                info!(
                    "event=login module=session status=ok user_id={} role={:?}",
                    user.id, user.role
                );
                self.current = Some(user.clone());
                Ok(user)
            }
            None => {
                info!("event=login module=session status=rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Begins and immediately resolves a login attempt.
    ///
    /// Convenience for callers that do not need to observe the pending
    /// window; see [`begin_login`](Self::begin_login) for the split form.
    ///
    /// # Errors
    /// - `AuthError::InvalidCredentials` when no credential matches.
    pub fn login(&mut self, email: &str, password: &str) -> AuthResult<User> {
        let pending = self.begin_login(email, password);
        self.resolve_login(pending)
    }

    /// Begins a registration without blocking; see
    /// [`begin_login`](Self::begin_login) for the pending-window contract.
    pub fn begin_register(&mut self, registration: NewRegistration) -> PendingRegistration {
        self.in_flight += 1;
        PendingRegistration { registration }
    }

    /// Resolves a begun registration.
    ///
    /// Success synthesizes a user with the next sequential id,
    /// `role = Alumni`, `is_verified = false`, `created_at = now`, records
    /// the credential, and does NOT log the new user in.
    ///
    /// # Errors
    /// - `AuthError::EmailAlreadyRegistered` on exact email collision.
    pub fn resolve_register(&mut self, pending: PendingRegistration) -> AuthResult<User> {
        self.simulate_latency();

        let registration = pending.registration;
        self.in_flight = self.in_flight.saturating_sub(1);
        if self
            .credentials
            .iter()
            .any(|credential| credential.user.email == registration.email)
        {
            info!("event=register module=session status=rejected reason=email_taken");
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let id = (self.credentials.len() + 1).to_string();
        let mut user = User::new(
            id,
            registration.email,
            registration.name,
            UserRole::Alumni,
            Utc::now().to_rfc3339(),
        );
        user.batch = registration.batch;
        user.department = registration.department;
        user.company = registration.company;
        user.designation = registration.designation;
        user.phone = registration.phone;
        user.roll_number = registration.roll_number;
        user.graduation_year = registration.graduation_year;
        user.degree = registration.degree;
        user.skills = registration.skills;
        user.is_verified = Some(false);

        self.credentials.push(Credential {
            user: user.clone(),
            password: registration.password,
        });
        info!(
            "event=register module=session status=ok user_id={}",
            user.id
        );
        Ok(user)
    }

    /// Begins and immediately resolves a registration.
    ///
    /// # Errors
    /// - `AuthError::EmailAlreadyRegistered` on exact email collision.
    pub fn register(&mut self, registration: NewRegistration) -> AuthResult<User> {
        let pending = self.begin_register(registration);
        self.resolve_register(pending)
    }

    /// Clears the current user unconditionally. Idempotent.
    pub fn logout(&mut self) {
        if self.current.take().is_some() {
            info!("event=logout module=session status=ok");
        }
    }

    /// Shallow-merges profile fields into the current user.
    ///
    /// No-op when anonymous. `role` and identity fields are not patchable.
    pub fn update_user(&mut self, patch: &UserPatch) {
        if let Some(user) = self.current.as_mut() {
            user.apply_patch(patch);
            info!(
                "event=profile_update module=session status=ok user_id={}",
                user.id
            );
        }
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

/// Demo credential store mirroring the portal's seeded accounts.
fn demo_credentials() -> Vec<Credential> {
    let mut admin = User::new(
        "1",
        "admin@alumnexus.com",
        "Admin User",
        UserRole::Admin,
        "2024-01-01",
    );
    admin.avatar = Some(String::new());

    let mut john = User::new("2", "john@alumni.com", "John Smith", UserRole::Alumni, "2024-01-15");
    john.batch = Some("2020".to_string());
    john.department = Some("Computer Science".to_string());
    john.company = Some("Google".to_string());
    john.designation = Some("Software Engineer".to_string());
    john.phone = Some("+1234567890".to_string());
    john.roll_number = Some("CS2020001".to_string());
    john.graduation_year = Some("2020".to_string());
    john.degree = Some("B.Tech".to_string());
    john.skills = vec![
        "React".to_string(),
        "Node.js".to_string(),
        "Python".to_string(),
        "Machine Learning".to_string(),
    ];
    john.bio = Some(
        "Passionate software engineer with 4 years of experience in building scalable applications."
            .to_string(),
    );
    john.location = Some("San Francisco, CA".to_string());
    john.linkedin = Some("linkedin.com/in/johnsmith".to_string());
    john.github = Some("github.com/johnsmith".to_string());
    john.is_verified = Some(true);

    let mut sarah = User::new(
        "3",
        "sarah@alumni.com",
        "Sarah Johnson",
        UserRole::Alumni,
        "2024-02-01",
    );
    sarah.batch = Some("2019".to_string());
    sarah.department = Some("Electrical Engineering".to_string());
    sarah.company = Some("Tesla".to_string());
    sarah.designation = Some("Product Manager".to_string());
    sarah.phone = Some("+1234567891".to_string());
    sarah.roll_number = Some("EE2019001".to_string());
    sarah.graduation_year = Some("2019".to_string());
    sarah.degree = Some("B.Tech".to_string());
    sarah.skills = vec![
        "Product Management".to_string(),
        "Agile".to_string(),
        "Data Analysis".to_string(),
    ];
    sarah.bio = Some("Product manager focused on electric vehicle innovation.".to_string());
    sarah.location = Some("Austin, TX".to_string());
    sarah.is_verified = Some(true);

    vec![
        Credential {
            user: admin,
            password: "admin123".to_string(),
        },
        Credential {
            user: john,
            password: "password123".to_string(),
        },
        Credential {
            user: sarah,
            password: "password123".to_string(),
        },
    ]
}
