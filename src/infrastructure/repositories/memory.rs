use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostSlug, PostUpdate, PostWriteRepository,
};
use crate::domain::user::{NewUser, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local storage for users and posts.
///
/// Every operation runs under one mutex, so the slug uniqueness check and the
/// insert are atomic, and deleting a user removes their posts in the same
/// critical section.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

#[derive(Default)]
struct StoreState {
    users: BTreeMap<UserId, User>,
    posts: BTreeMap<PostId, Post>,
    last_user_id: i64,
    last_post_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Persistence("in-memory store lock poisoned".into()))
    }
}

fn newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl PostWriteRepository for InMemoryStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.lock()?;

        if !state.users.contains_key(&post.author_id) {
            return Err(DomainError::NotFound("author not found".into()));
        }
        if state.posts.values().any(|existing| existing.slug == post.slug) {
            return Err(DomainError::SlugTaken(post.slug.into_inner()));
        }

        state.last_post_id += 1;
        let id = PostId::new(state.last_post_id)?;
        let stored = Post {
            id,
            slug: post.slug,
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        state.posts.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.lock()?;
        let post = state
            .posts
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.set_title(title, update.updated_at);
        }
        if let Some(content) = update.content {
            post.set_content(content, update.updated_at);
        }
        post.updated_at = update.updated_at;

        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut state = self.lock()?;
        state
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.lock()?.posts.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let state = self.lock()?;
        Ok(state.posts.values().find(|post| &post.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &PostSlug) -> DomainResult<bool> {
        let state = self.lock()?;
        Ok(state.posts.values().any(|post| &post.slug == slug))
    }

    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Post>, u64)> {
        let state = self.lock()?;
        let mut posts: Vec<Post> = state.posts.values().cloned().collect();
        drop(state);

        newest_first(&mut posts);
        let total = posts.len() as u64;
        let page_size = page_size.max(1) as usize;
        let skip = (page.max(1) as usize - 1) * page_size;
        let items = posts.into_iter().skip(skip).take(page_size).collect();
        Ok((items, total))
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>> {
        let state = self.lock()?;
        let mut posts: Vec<Post> = state
            .posts
            .values()
            .filter(|post| post.author_id == author_id)
            .cloned()
            .collect();
        drop(state);

        newest_first(&mut posts);
        Ok(posts)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.lock()?;
        if state
            .users
            .values()
            .any(|user| user.username == new_user.username)
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }

        state.last_user_id += 1;
        let id = UserId::new(state.last_user_id)?;
        let user = User {
            id,
            username: new_user.username,
            created_at: new_user.created_at,
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.lock()?;
        Ok(state
            .users
            .values()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn delete(&self, id: UserId) -> DomainResult<u64> {
        let mut state = self.lock()?;
        if state.users.remove(&id).is_none() {
            return Err(DomainError::NotFound("user not found".into()));
        }

        let before = state.posts.len();
        state.posts.retain(|_, post| post.author_id != id);
        Ok((before - state.posts.len()) as u64)
    }
}
