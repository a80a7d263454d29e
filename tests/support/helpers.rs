// tests/support/helpers.rs
use std::sync::Arc;

use chrono::Utc;
use inkpost_core::application::ports::{ClockPort, SlugGeneratorPort};
use inkpost_core::application::services::{ApplicationServices, ServiceSettings};
use inkpost_core::domain::post::{PostReadRepository, PostWriteRepository};
use inkpost_core::domain::user::{NewUser, User, UserRepository, Username};
use inkpost_core::infrastructure::repositories::InMemoryStore;
use inkpost_core::infrastructure::util::DefaultSlugGenerator;

use super::mocks::SteppingClock;

/// Services over a fresh in-memory store, with a stepping clock and the real
/// slug generator.
pub fn in_memory_services() -> (Arc<InMemoryStore>, ApplicationServices) {
    let store = Arc::new(InMemoryStore::new());
    let services = services_over(
        Arc::clone(&store),
        Arc::clone(&store) as Arc<dyn PostWriteRepository>,
        Arc::clone(&store) as Arc<dyn PostReadRepository>,
        ServiceSettings::default(),
    );
    (store, services)
}

/// Services over `store` for users, with custom post repositories.
pub fn services_over(
    store: Arc<InMemoryStore>,
    write: Arc<dyn PostWriteRepository>,
    read: Arc<dyn PostReadRepository>,
    settings: ServiceSettings,
) -> ApplicationServices {
    let clock: Arc<ClockPort> = Arc::new(SteppingClock::new());
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(store, write, read, clock, slugger, settings)
}

pub async fn seed_author(store: &InMemoryStore, name: &str) -> User {
    UserRepository::insert(store, NewUser::new(Username::new(name).unwrap(), Utc::now()))
        .await
        .unwrap()
}
