// src/application/commands/users/mod.rs
mod delete;
mod register;
mod service;

pub use delete::DeleteAuthorCommand;
pub use register::RegisterAuthorCommand;
pub use service::UserCommandService;
