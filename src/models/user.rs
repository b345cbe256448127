use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// A registered user as stored in the `users` table.
///
/// Created on registration and immutable thereafter; no exposed operation
/// deletes users. The password hash never leaves the server.
#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            created_at: NaiveDateTime::default(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$10$secret"));
        assert!(json.contains("alice"));
    }
}
