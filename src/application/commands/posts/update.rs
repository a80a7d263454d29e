use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostContent, PostId, PostTitle, PostUpdate},
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostCommandService {
    /// Applies title/content changes. The slug is left untouched even when the
    /// title changes.
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let UpdatePostCommand { id, title, content } = command;
        let id = PostId::new(id)?;
        let title = title.map(PostTitle::new).transpose()?;
        let content = content.map(PostContent::new);

        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if title.is_none() && content.is_none() {
            return Ok(post.into());
        }

        let now = self.clock.now();
        let mut update = PostUpdate::new(id, now);
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::debug!(post_id = %updated.id, "post updated");
        Ok(updated.into())
    }
}
