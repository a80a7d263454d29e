// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        post::{PostContent, PostDraft, PostSlug, PostTitle},
        user::UserId,
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub author_id: i64,
    /// Explicit slug; when absent one is derived from the title.
    pub slug: Option<String>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    author_id: Option<i64>,
    slug: Option<String>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.unwrap_or_default(),
            author_id: self.author_id.ok_or("author_id is required")?,
            slug: self.slug,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content);
        let author_id = UserId::new(command.author_id)?;

        if self.user_repo.find_by_id(author_id).await?.is_none() {
            return Err(ApplicationError::not_found("author not found"));
        }

        let mut draft = PostDraft::new(title, content, author_id);
        if let Some(raw) = command.slug {
            draft = draft.with_slug(self.validate_requested_slug(raw)?);
        }
        let caller_supplied = draft.has_slug();

        for attempt in 1..=self.max_create_attempts {
            let slug = self.slug_service.ensure_slug(&mut draft).await?;
            let new_post = draft.to_new_post(self.clock.now())?;

            match self.write_repo.insert(new_post).await {
                Ok(created) => {
                    tracing::info!(post_id = %created.id, slug = %created.slug, author_id = %created.author_id, "post created");
                    return Ok(created.into());
                }
                Err(DomainError::SlugTaken(_)) if caller_supplied => {
                    return Err(ApplicationError::conflict(format!(
                        "slug '{slug}' already exists"
                    )));
                }
                Err(DomainError::SlugTaken(_)) => {
                    tracing::warn!(attempt, slug = %slug, "slug claimed by a concurrent writer, reassigning");
                    draft.slug = None;
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ApplicationError::SlugContention {
            attempts: self.max_create_attempts,
        })
    }

    fn validate_requested_slug(&self, raw: String) -> ApplicationResult<PostSlug> {
        let slug = PostSlug::new(raw)?;
        let max_length = self.slug_service.policy().max_length();
        if slug.len() > max_length {
            return Err(ApplicationError::validation(format!(
                "slug cannot exceed {max_length} characters"
            )));
        }
        Ok(slug)
    }
}
