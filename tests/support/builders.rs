// tests/support/builders.rs
use inkpost_core::application::commands::posts::CreatePostCommand;
use inkpost_core::domain::post::*;
use inkpost_core::domain::user::UserId;

use super::mocks::fixed_now;

pub fn create_command(title: &str, author_id: i64) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(title)
        .content(format!("Body of {title}"))
        .author_id(author_id)
        .build()
        .unwrap()
}

pub struct PostBuilder {
    id: i64,
    slug: String,
    title: String,
    content: String,
    author_id: i64,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            slug: "test-post".into(),
            title: "Test Post".into(),
            content: "Test content".into(),
            author_id: 1,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId::new(self.id).unwrap(),
            slug: PostSlug::new(self.slug).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            content: PostContent::new(self.content),
            author_id: UserId::new(self.author_id).unwrap(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
