// tests/support/mocks/post_repos.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Barrier;

use inkpost_core::domain::errors::{DomainError, DomainResult};
use inkpost_core::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostSlug, PostUpdate, PostWriteRepository,
};
use inkpost_core::domain::user::UserId;
use inkpost_core::infrastructure::repositories::InMemoryStore;

/* -------------------------------- PostWriteRepository -------------------------------- */

/// Simulates a concurrent writer: for the first `races` inserts, a rival post
/// claims the same slug right before the real insert reaches the store.
pub struct RacingWrite {
    inner: Arc<InMemoryStore>,
    rival_author: UserId,
    races: AtomicU32,
}

impl RacingWrite {
    pub fn new(inner: Arc<InMemoryStore>, rival_author: UserId, races: u32) -> Self {
        Self {
            inner,
            rival_author,
            races: AtomicU32::new(races),
        }
    }
}

#[async_trait]
impl PostWriteRepository for RacingWrite {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let remaining = self.races.load(Ordering::SeqCst);
        if remaining > 0 {
            self.races.store(remaining - 1, Ordering::SeqCst);
            let mut rival = post.clone();
            rival.author_id = self.rival_author;
            self.inner.insert(rival).await?;
        }
        self.inner.insert(post).await
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        self.inner.update(update).await
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        PostWriteRepository::delete(&*self.inner, id).await
    }
}

/// Rejects every insert as a slug collision and counts the attempts.
#[derive(Default)]
pub struct AlwaysTakenWrite {
    pub attempts: AtomicU32,
}

#[async_trait]
impl PostWriteRepository for AlwaysTakenWrite {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::SlugTaken(post.slug.into_inner()))
    }

    async fn update(&self, _update: PostUpdate) -> DomainResult<Post> {
        Err(DomainError::NotFound("not implemented".into()))
    }

    async fn delete(&self, _id: PostId) -> DomainResult<()> {
        Ok(())
    }
}

/* -------------------------------- PostReadRepository -------------------------------- */

/// Holds the first `gated` slug lookups at a barrier until all of them have
/// observed the store, forcing concurrent creations to see the same state.
pub struct GatedSlugRead {
    inner: Arc<InMemoryStore>,
    barrier: Barrier,
    gated: usize,
    calls: AtomicUsize,
}

impl GatedSlugRead {
    pub fn new(inner: Arc<InMemoryStore>, gated: usize) -> Self {
        Self {
            inner,
            barrier: Barrier::new(gated),
            gated,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PostReadRepository for GatedSlugRead {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        PostReadRepository::find_by_id(&*self.inner, id).await
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        self.inner.find_by_slug(slug).await
    }

    async fn slug_exists(&self, slug: &PostSlug) -> DomainResult<bool> {
        let exists = self.inner.slug_exists(slug).await?;
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.gated {
            self.barrier.wait().await;
        }
        Ok(exists)
    }

    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Post>, u64)> {
        self.inner.list(page, page_size).await
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>> {
        self.inner.list_by_author(author_id).await
    }
}
