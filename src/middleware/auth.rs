//! Bearer token authentication and role-based authorization.
//!
//! Authentication and authorization are deliberately split. The
//! [`authenticate`] middleware only proves who the caller is: it validates
//! the bearer token issued by the external identity provider and stores the
//! verified [`Claims`] in request extensions. What the caller may do is
//! decided per handler by [`AuthGuard`], which loads the person and their
//! roles from the database. Tokens never carry roles; revoking a role takes
//! effect on the next request without waiting for token expiry.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::{
    data::person::PersonRepository,
    error::{auth::AuthError, AppError},
    model::person::{Person, Role},
};

/// Claims carried by a bearer token from the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Object id of the subject in the identity provider.
    pub sub: String,
    pub name: String,
    pub email: String,
    pub exp: i64,
    pub iss: String,
}

/// Validates HS256 bearer tokens against the configured secret and issuer.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str, issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token, returning its claims.
    ///
    /// Signature, expiry, and issuer are all checked; any failure is an
    /// [`AuthError::InvalidToken`].
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

/// Axum middleware that authenticates every request under `/api`.
///
/// Extracts the `Authorization: Bearer` header, verifies the token, and
/// inserts the resulting [`Claims`] into request extensions for downstream
/// handlers. Requests without a valid token are rejected with 401 before
/// reaching any handler.
pub async fn authenticate(
    State(state): State<crate::state::AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)?;

    let claims = state.token_verifier.verify(token)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

pub enum Permission {
    Admin,
    Mentor,
}

/// Per-handler authorization check backed by the person store.
///
/// Roles are read from the database on every check, never from the token.
/// Holding the admin role satisfies any permission requirement.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    claims: &'a Claims,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, claims: &'a Claims) -> Self {
        Self { db, claims }
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<Person, AppError> {
        let person_repo = PersonRepository::new(self.db);

        let Some(person) = person_repo.find_by_external_id(&self.claims.sub).await? else {
            return Err(AuthError::PersonNotProvisioned(self.claims.sub.clone()).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !person.has_role(Role::Admin) {
                        return Err(AuthError::AccessDenied(
                            person.id,
                            "Person attempted an administrative operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Mentor => {
                    if !person.has_role(Role::Mentor) && !person.has_role(Role::Admin) {
                        return Err(AuthError::AccessDenied(
                            person.id,
                            "Person attempted a mentor operation without the mentor or admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(person)
    }
}
