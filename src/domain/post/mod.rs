pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewPost, Post, PostDraft, PostUpdate};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use services::{PostSlugService, SlugPolicy};
pub use value_objects::{PostContent, PostId, PostSlug, PostTitle};
