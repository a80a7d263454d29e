// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::ClockPort,
    domain::{
        post::{PostReadRepository, PostSlugService, PostWriteRepository},
        user::UserRepository,
    },
};

pub const DEFAULT_CREATE_MAX_ATTEMPTS: u32 = 3;

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) clock: Arc<ClockPort>,
    pub(super) max_create_attempts: u32,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_service: Arc<PostSlugService>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            slug_service,
            clock,
            max_create_attempts: DEFAULT_CREATE_MAX_ATTEMPTS,
        }
    }

    /// How many times an auto-assigned slug is re-derived after storage
    /// reports it as taken. Values below 1 are raised to 1.
    pub fn with_max_create_attempts(mut self, attempts: u32) -> Self {
        self.max_create_attempts = attempts.max(1);
        self
    }
}
