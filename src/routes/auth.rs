use crate::{
    auth::{
        generate_token, hash_password, verify_password, AuthResponse, LoginRequest,
        RegisterRequest,
    },
    error::AppError,
    models::User,
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::SqlitePool;
use validator::Validate;

/// Register a new user
///
/// Creates a new account with a bcrypt-hashed password and returns an issued
/// token. Fails with 409 when the username is already taken.
#[post("/register")]
pub async fn register(
    pool: web::Data<SqlitePool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let existing_user = sqlx::query_as::<_, (i64,)>("SELECT id FROM users WHERE username = ?")
        .bind(&register_data.username)
        .fetch_optional(&**pool)
        .await?;

    if existing_user.is_some() {
        return Err(AppError::Conflict("Username already exists".into()));
    }

    let password_hash = hash_password(&register_data.password)?;

    let (user_id,) = sqlx::query_as::<_, (i64,)>(
        "INSERT INTO users (username, password_hash) VALUES (?, ?) RETURNING id",
    )
    .bind(&register_data.username)
    .bind(&password_hash)
    .fetch_one(&**pool)
    .await?;

    let token = generate_token(user_id, &register_data.username)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        message: "User registered successfully".into(),
        user_id,
        token,
    }))
}

/// Login user
///
/// Authenticates a credential pair and returns an issued token. Unknown
/// usernames and wrong passwords produce the same generic 401 so that
/// accounts cannot be enumerated.
#[post("/login")]
pub async fn login(
    pool: web::Data<SqlitePool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
    )
    .bind(&login_data.username)
    .fetch_optional(&**pool)
    .await?;

    match user {
        Some(user) => {
            if verify_password(&login_data.password, &user.password_hash)? {
                let token = generate_token(user.id, &user.username)?;
                Ok(HttpResponse::Ok().json(AuthResponse {
                    message: "Login successful".into(),
                    user_id: user.id,
                    token,
                }))
            } else {
                Err(AppError::Unauthorized("Invalid username or password".into()))
            }
        }
        None => Err(AppError::Unauthorized("Invalid username or password".into())),
    }
}
