use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::domain::{AuthSession, AuthUser, LoginInput};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Signing secret; without one, login succeeds but no token is issued.
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self { Self { jwt_secret: None, token_ttl_hours: 12 } }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    uid: i32,
    exp: usize,
}

/// Hash a password into an argon2 PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(e.to_string()))?
        .to_string())
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Authenticate a user and optionally issue a token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{hash_password, service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::LoginInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// repo.insert_user("admin", hash_password("Passw0rd").unwrap(), Default::default()).unwrap();
    /// let svc = AuthService::new(repo.clone(), AuthConfig { jwt_secret: Some("secret".into()), ..Default::default() });
    /// let session = tokio_test::block_on(svc.login(LoginInput { username: "admin".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.user.username, "admin");
    /// assert!(session.token.is_some());
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let user = self.repo
            .find_user_by_username(&input.username)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let cred = self.repo
            .get_credentials(user.id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed = match PasswordHash::new(&cred.password_hash) {
            Ok(p) => p,
            Err(e) => {
                warn!(user_id = user.id, error = %e, "stored password is not a valid hash");
                return Err(AuthError::Unauthorized);
            }
        };
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::Unauthorized);
        }

        let token = match &self.cfg.jwt_secret {
            Some(secret) => Some(self.issue_token(&user, secret)?),
            None => None,
        };
        info!(user_id = user.id, "user_logged_in");
        Ok(AuthSession { user, token })
    }

    /// Resolve a session token to its user.
    ///
    /// Missing, malformed, expired, or orphaned tokens all yield `None`.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(MockAuthRepository::default()), AuthConfig { jwt_secret: Some("secret".into()), ..Default::default() });
    /// assert!(tokio_test::block_on(svc.validate_session(None)).is_none());
    /// assert!(tokio_test::block_on(svc.validate_session(Some("not-a-token"))).is_none());
    /// ```
    #[instrument(skip_all)]
    pub async fn validate_session(&self, token: Option<&str>) -> Option<AuthUser> {
        let token = token.filter(|t| !t.is_empty())?;
        let secret = self.cfg.jwt_secret.as_ref()?;
        let key = DecodingKey::from_secret(secret.as_bytes());
        let claims = match decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256)) {
            Ok(data) => data.claims,
            Err(e) => {
                debug!(error = %e, "session token rejected");
                return None;
            }
        };
        match self.repo.find_user_by_id(claims.uid).await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "session lookup failed");
                None
            }
        }
    }

    fn issue_token(&self, user: &AuthUser, secret: &str) -> Result<String, AuthError> {
        let exp = (chrono::Utc::now() + chrono::Duration::hours(self.cfg.token_ttl_hours)).timestamp() as usize;
        let claims = Claims { sub: user.username.clone(), uid: user.id, exp };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }
}
