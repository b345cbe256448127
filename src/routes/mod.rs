pub mod auth;
pub mod health;
pub mod todos;

use actix_web::web;

/// Wires the API routes. Mounted under the `/api` scope in `main`, giving
/// `/api/register`, `/api/login`, and `/api/todos[/{id}]`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::register).service(auth::login).service(
        web::scope("/todos")
            .service(todos::list_todos)
            .service(todos::create_todo)
            .service(todos::get_todo)
            .service(todos::update_todo)
            .service(todos::delete_todo),
    );
}
