// src/application/dto/mod.rs
pub mod pagination;
pub mod posts;
pub mod users;

pub use pagination::PageRequest;
pub use posts::{PostDto, PostPageDto};
pub use users::{AuthorRemovalDto, UserDto};
