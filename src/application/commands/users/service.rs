use std::sync::Arc;

use crate::application::ports::ClockPort;
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl UserCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<ClockPort>) -> Self {
        Self { user_repo, clock }
    }
}
