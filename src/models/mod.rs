pub mod todo;
pub mod user;

pub use todo::{Todo, TodoInput, TodoPriority, TodoStatus};
pub use user::User;
