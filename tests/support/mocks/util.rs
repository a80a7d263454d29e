// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use inkpost_core::application::ports::{time::Clock, util::SlugGenerator};

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Passes input through untouched, for tests that want full control over the
/// base slug.
#[derive(Clone)]
pub struct IdentitySlug;

impl SlugGenerator for IdentitySlug {
    fn slugify(&self, s: &str) -> String {
        s.to_string()
    }
}
