use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, Username},
};

pub struct RegisterAuthorCommand {
    pub username: String,
}

impl UserCommandService {
    pub async fn register_author(&self, command: RegisterAuthorCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let user = self
            .user_repo
            .insert(NewUser::new(username, self.clock.now()))
            .await?;
        tracing::info!(user_id = %user.id, username = %user.username, "author registered");
        Ok(user.into())
    }
}
