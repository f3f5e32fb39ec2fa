//! Login, logout and registration against the remote directory, with an
//! offline fallback onto the local cache.

use crate::{AuthError, AuthResult, SessionManager};

use ud_client::RemoteDirectory;
use ud_core::{RegistrationForm, SessionState, UserRecord};
use ud_db::UserRepository;

use std::sync::Arc;

use log::{debug, info, warn};

const SIGN_IN_FAILED: &str = "Unable to sign in";
const REGISTRATION_FAILED: &str = "Registration failed";

/// Page of the remote directory consulted during login.
const LOGIN_DIRECTORY_PAGE: u32 = 1;

pub struct Authenticator {
    users: UserRepository,
    remote: Arc<dyn RemoteDirectory>,
    session: Arc<SessionManager>,
}

impl Authenticator {
    pub fn new(
        users: UserRepository,
        remote: Arc<dyn RemoteDirectory>,
        session: Arc<SessionManager>,
    ) -> Self {
        Self {
            users,
            remote,
            session,
        }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Sign in, preferring the remote directory.
    ///
    /// Any failure of the online path falls back to the cached record for
    /// `email`, which yields an offline session. Without a cached record the
    /// remote's message (or a generic one) is returned.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<SessionState> {
        let email = email.trim();

        let online_failure = match self.login_online(email, password).await {
            Ok(state) => {
                self.session.establish(state.clone())?;
                info!("Signed in {} online", email);
                return Ok(state);
            }
            Err(e @ AuthError::Session { .. }) => return Err(e),
            Err(e) => e,
        };

        warn!("Online sign-in failed for {}: {}", email, online_failure);

        match self.users.find_by_email(email).await {
            Ok(Some(cached)) => {
                let state = SessionState::offline(cached.email.clone(), cached.profile_summary());
                self.session.establish(state.clone())?;
                info!("Signed in {} offline from cache", email);
                Ok(state)
            }
            Ok(None) => Err(AuthError::authentication(Self::sign_in_message(
                &online_failure,
            ))),
            Err(e) => {
                warn!("Cache lookup failed for {}: {}", email, e);
                Err(AuthError::authentication(Self::sign_in_message(
                    &online_failure,
                )))
            }
        }
    }

    fn sign_in_message(failure: &AuthError) -> String {
        match failure {
            AuthError::Remote { message, .. } => message.clone(),
            _ => SIGN_IN_FAILED.to_string(),
        }
    }

    /// Token, directory merge and local lookup. Does not touch the session.
    async fn login_online(&self, email: &str, password: &str) -> AuthResult<SessionState> {
        let login = self
            .remote
            .login(email, password)
            .await
            .map_err(|e| AuthError::remote(e, SIGN_IN_FAILED))?;

        let page = self
            .remote
            .list_users(LOGIN_DIRECTORY_PAGE)
            .await
            .map_err(|e| AuthError::remote(e, SIGN_IN_FAILED))?;

        let mut merged = 0;
        for remote_user in &page.data {
            if self
                .users
                .insert_if_email_absent(&remote_user.to_record())
                .await?
            {
                merged += 1;
            }
        }
        debug!("Merged {} new users during sign-in", merged);

        if !page.data.iter().any(|u| u.email == email) {
            return Err(AuthError::authentication(format!(
                "{} is not listed in the remote directory",
                email
            )));
        }

        let record = self.users.find_by_email(email).await?.ok_or_else(|| {
            AuthError::authentication(format!("{} is not in the local store", email))
        })?;

        Ok(SessionState::new(
            login.token,
            record.email.clone(),
            record.profile_summary(),
        ))
    }

    pub fn logout(&self) -> AuthResult<()> {
        self.session.clear()?;
        info!("Signed out");
        Ok(())
    }

    /// Create an account remotely and cache it under the remote-assigned id.
    ///
    /// Validation and the duplicate check both run before any network call.
    /// The duplicate check is not atomic with the insert.
    pub async fn register(&self, form: &RegistrationForm) -> AuthResult<UserRecord> {
        form.validate()?;

        let email = form.email.trim();
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::duplicate_email(email));
        }

        let response = self
            .remote
            .register(email, &form.password)
            .await
            .map_err(|e| AuthError::remote(e, REGISTRATION_FAILED))?;

        let record = form.to_record(response.id);
        self.users.upsert(&record).await?;
        info!("Registered {} as user {}", email, response.id);

        Ok(record)
    }
}
