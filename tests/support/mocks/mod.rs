// tests/support/mocks/mod.rs
pub mod post_repos;
pub mod time;
pub mod util;

pub use post_repos::{AlwaysTakenWrite, GatedSlugRead, RacingWrite};
pub use time::{SteppingClock, fixed_now};
pub use util::{DummyClock, IdentitySlug};
