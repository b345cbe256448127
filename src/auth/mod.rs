pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// Payload for a user login request.
///
/// Both fields must be present and non-empty; beyond that no format is
/// imposed so that any registered credential pair can authenticate.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

/// Payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username. Must be non-empty and unique across all users.
    #[validate(length(min = 1, max = 64, message = "Username and password are required"))]
    pub username: String,
    /// Password for the new account; stored only as a bcrypt hash.
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

/// Response body after successful registration or login.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    /// The unique identifier of the authenticated user.
    pub user_id: i64,
    /// The signed bearer token for subsequent requests.
    pub token: String,
}
