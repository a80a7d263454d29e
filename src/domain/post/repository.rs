use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostSlug};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Persist a new post. A duplicate slug must surface as
    /// `DomainError::SlugTaken` and an unknown author as `DomainError::NotFound`.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    async fn slug_exists(&self, slug: &PostSlug) -> DomainResult<bool>;
    /// Newest first. Returns the requested page and the total number of posts.
    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Post>, u64)>;
    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>>;
}
