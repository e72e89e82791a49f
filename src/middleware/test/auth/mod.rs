use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Claims, Permission},
};
use test_utils::{builder::TestBuilder, factory};

mod require;

/// Builds claims matching a person provisioned with the given external id.
fn claims_for(external_id: &str) -> Claims {
    Claims {
        sub: external_id.to_string(),
        name: "Test Person".to_string(),
        email: "test@example.com".to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp(),
        iss: "https://idp.example.com".to_string(),
    }
}
