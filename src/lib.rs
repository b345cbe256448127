#![doc = "The `todo_api` library crate."]
#![doc = ""]
#![doc = "Contains the domain models, authentication mechanisms, routing configuration,"]
#![doc = "database setup, and error handling for the todo list API. The main binary"]
#![doc = "(`main.rs`) uses it to construct and run the application."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
