// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{posts::PostCommandService, users::UserCommandService},
        ports::{ClockPort, SlugGeneratorPort},
        queries::posts::PostQueryService,
    },
    domain::{
        post::{PostReadRepository, PostSlugService, PostWriteRepository, SlugPolicy},
        user::UserRepository,
    },
};

/// Tunables threaded into the services at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSettings {
    pub slug_policy: SlugPolicy,
    pub create_max_attempts: u32,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            slug_policy: SlugPolicy::default(),
            create_max_attempts: crate::application::commands::posts::DEFAULT_CREATE_MAX_ATTEMPTS,
        }
    }
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    slug_service: Arc<PostSlugService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        settings: ServiceSettings,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
            settings.slug_policy,
        ));

        let post_commands = Arc::new(
            PostCommandService::new(
                Arc::clone(&post_write_repo),
                Arc::clone(&post_read_repo),
                Arc::clone(&user_repo),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )
            .with_max_create_attempts(settings.create_max_attempts),
        );

        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        Self {
            user_commands,
            post_commands,
            post_queries,
            slug_service,
        }
    }

    pub fn slug_service(&self) -> Arc<PostSlugService> {
        Arc::clone(&self.slug_service)
    }
}
