//! Shared application state handed to every request handler.

use sea_orm::DatabaseConnection;

use crate::directory::DirectoryClient;
use crate::middleware::auth::TokenVerifier;

/// Dependencies shared across requests.
///
/// Built once at startup and cloned per request by axum's state extraction.
/// Every field is cheap to clone: the database connection is a pooled
/// handle, the verifier holds a key and validation rules, and the directory
/// client wraps a `reqwest::Client` (internally reference counted).
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Validates bearer tokens issued by the external identity provider.
    pub token_verifier: TokenVerifier,

    /// Client for the external directory service, used for admin
    /// invitations and group membership lookups.
    pub directory: DirectoryClient,

    /// Directory group whose members receive the admin role on sync.
    pub directory_admin_group: String,

    /// Directory group whose members receive the mentor role on sync.
    pub directory_mentor_group: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        token_verifier: TokenVerifier,
        directory: DirectoryClient,
        directory_admin_group: String,
        directory_mentor_group: String,
    ) -> Self {
        Self {
            db,
            token_verifier,
            directory,
            directory_admin_group,
            directory_mentor_group,
        }
    }
}
