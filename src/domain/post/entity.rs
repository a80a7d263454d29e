// src/domain/post/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::{PostContent, PostId, PostSlug, PostTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub slug: PostSlug,
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn set_title(&mut self, title: PostTitle, now: DateTime<Utc>) {
        self.title = title;
        self.updated_at = now;
    }

    pub fn set_content(&mut self, content: PostContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title.as_str())
    }
}

/// A post that has not been persisted yet. The slug stays `None` until the
/// caller supplies one or the slug service assigns it.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
    pub slug: Option<PostSlug>,
}

impl PostDraft {
    pub fn new(title: PostTitle, content: PostContent, author_id: UserId) -> Self {
        Self {
            title,
            content,
            author_id,
            slug: None,
        }
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn has_slug(&self) -> bool {
        self.slug.is_some()
    }

    pub fn to_new_post(&self, now: DateTime<Utc>) -> DomainResult<NewPost> {
        let slug = self.slug.clone().ok_or_else(|| {
            DomainError::Validation("slug must be assigned before the post is stored".into())
        })?;

        Ok(NewPost {
            slug,
            title: self.title.clone(),
            content: self.content.clone(),
            author_id: self.author_id,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub slug: PostSlug,
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a stored post. Slugs are fixed at creation and cannot
/// be changed here.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub content: Option<PostContent>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_post() -> Post {
        let now = Utc::now();
        Post {
            id: PostId::new(1).unwrap(),
            slug: PostSlug::new("first-post").unwrap(),
            title: PostTitle::new("First post").unwrap(),
            content: PostContent::new("hello"),
            author_id: UserId::new(1).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn set_title_refreshes_updated_at_and_keeps_slug() {
        let mut post = sample_post();
        let created = post.created_at;
        let later = created + Duration::seconds(30);
        post.set_title(PostTitle::new("Renamed").unwrap(), later);
        assert_eq!(post.title.as_str(), "Renamed");
        assert_eq!(post.slug.as_str(), "first-post");
        assert_eq!(post.updated_at, later);
        assert_eq!(post.created_at, created);
    }

    #[test]
    fn set_content_refreshes_updated_at() {
        let mut post = sample_post();
        let later = post.updated_at + Duration::seconds(5);
        post.set_content(PostContent::new("changed"), later);
        assert_eq!(post.content.as_str(), "changed");
        assert_eq!(post.updated_at, later);
    }

    #[test]
    fn display_renders_title() {
        assert_eq!(sample_post().to_string(), "First post");
    }

    #[test]
    fn draft_without_slug_cannot_become_new_post() {
        let draft = PostDraft::new(
            PostTitle::new("Draft").unwrap(),
            PostContent::default(),
            UserId::new(2).unwrap(),
        );
        assert!(!draft.has_slug());
        assert!(matches!(
            draft.to_new_post(Utc::now()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn draft_with_slug_stamps_both_timestamps() {
        let now = Utc::now();
        let new_post = PostDraft::new(
            PostTitle::new("Draft").unwrap(),
            PostContent::default(),
            UserId::new(2).unwrap(),
        )
        .with_slug(PostSlug::new("draft").unwrap())
        .to_new_post(now)
        .unwrap();
        assert_eq!(new_post.created_at, now);
        assert_eq!(new_post.updated_at, now);
        assert_eq!(new_post.slug.as_str(), "draft");
    }
}
