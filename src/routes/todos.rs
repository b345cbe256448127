use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{Todo, TodoInput},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

const TODO_COLUMNS: &str =
    "id, user_id, title, description, status, priority, due_date, created_at";

/// Creates a new todo for the authenticated user.
///
/// ## Request Body:
/// A JSON object matching `TodoInput`:
/// - `title`: required, non-empty.
/// - `description` (optional).
/// - `status` (optional): `pending` | `in-progress` | `completed`, defaults to `pending`.
/// - `priority` (optional): `low` | `medium` | `high`, defaults to `medium`.
/// - `due_date` (optional): ISO date.
///
/// ## Responses:
/// - `201 Created`: the newly created `Todo`.
/// - `400 Bad Request`: title missing or empty.
/// - `401/403`: missing or invalid token.
#[post("")]
pub async fn create_todo(
    pool: web::Data<SqlitePool>,
    todo_data: web::Json<TodoInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    todo_data.validate()?;

    let todo = sqlx::query_as::<_, Todo>(&format!(
        "INSERT INTO todos (user_id, title, description, status, priority, due_date)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING {TODO_COLUMNS}"
    ))
    .bind(user.id)
    .bind(&todo_data.title)
    .bind(&todo_data.description)
    .bind(&todo_data.status)
    .bind(&todo_data.priority)
    .bind(todo_data.due_date)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(todo))
}

/// Lists all todos owned by the authenticated user, newest first.
#[get("")]
pub async fn list_todos(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let todos = sqlx::query_as::<_, Todo>(&format!(
        "SELECT {TODO_COLUMNS} FROM todos
         WHERE user_id = ?
         ORDER BY created_at DESC, id DESC"
    ))
    .bind(user.id)
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(todos))
}

/// Retrieves a single todo by id.
///
/// The lookup is owner-scoped: a todo belonging to another user yields the
/// same 404 as a todo that does not exist at all.
#[get("/{id}")]
pub async fn get_todo(
    pool: web::Data<SqlitePool>,
    todo_id: web::Path<i64>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let todo = sqlx::query_as::<_, Todo>(&format!(
        "SELECT {TODO_COLUMNS} FROM todos WHERE id = ? AND user_id = ?"
    ))
    .bind(todo_id.into_inner())
    .bind(user.id)
    .fetch_optional(&**pool)
    .await?;

    match todo {
        Some(todo) => Ok(HttpResponse::Ok().json(todo)),
        None => Err(AppError::NotFound("Todo not found".into())),
    }
}

/// Updates a todo owned by the authenticated user.
///
/// A single owner-scoped UPDATE statement; zero matched rows (nonexistent id
/// or another user's todo) yields 404.
///
/// ## Responses:
/// - `200 OK`: the updated `Todo`.
/// - `400 Bad Request`: title missing or empty.
/// - `404 Not Found`: no owned row matched.
/// - `401/403`: missing or invalid token.
#[put("/{id}")]
pub async fn update_todo(
    pool: web::Data<SqlitePool>,
    todo_id: web::Path<i64>,
    todo_data: web::Json<TodoInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    todo_data.validate()?;

    let updated = sqlx::query_as::<_, Todo>(&format!(
        "UPDATE todos
         SET title = ?, description = ?, status = ?, priority = ?, due_date = ?
         WHERE id = ? AND user_id = ?
         RETURNING {TODO_COLUMNS}"
    ))
    .bind(&todo_data.title)
    .bind(&todo_data.description)
    .bind(&todo_data.status)
    .bind(&todo_data.priority)
    .bind(todo_data.due_date)
    .bind(todo_id.into_inner())
    .bind(user.id)
    .fetch_optional(&**pool)
    .await?;

    match updated {
        Some(todo) => Ok(HttpResponse::Ok().json(todo)),
        None => Err(AppError::NotFound("Todo not found or unauthorized".into())),
    }
}

/// Deletes a todo owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: `{"message": "Todo deleted successfully"}`.
/// - `404 Not Found`: no owned row matched.
/// - `401/403`: missing or invalid token.
#[delete("/{id}")]
pub async fn delete_todo(
    pool: web::Data<SqlitePool>,
    todo_id: web::Path<i64>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ? AND user_id = ?")
        .bind(todo_id.into_inner())
        .bind(user.id)
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Todo not found or unauthorized".into()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Todo deleted successfully"
    })))
}
