use super::UserCommandService;
use crate::{
    application::{dto::AuthorRemovalDto, error::ApplicationResult},
    domain::user::UserId,
};

pub struct DeleteAuthorCommand {
    pub id: i64,
}

impl UserCommandService {
    /// Deletes the author; storage cascades the removal to their posts.
    pub async fn delete_author(
        &self,
        command: DeleteAuthorCommand,
    ) -> ApplicationResult<AuthorRemovalDto> {
        let id = UserId::new(command.id)?;
        let posts_removed = self.user_repo.delete(id).await?;
        tracing::info!(user_id = %id, posts_removed, "author deleted");
        Ok(AuthorRemovalDto {
            user_id: id.into(),
            posts_removed,
        })
    }
}
