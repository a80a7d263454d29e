// src/domain/post/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::entity::PostDraft;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostSlug, PostTitle};

pub const DEFAULT_SLUG_MAX_LENGTH: usize = 50;
pub const DEFAULT_SLUG_MAX_PROBES: u32 = 1000;

/// Length cap and probe budget used when deriving slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugPolicy {
    max_length: usize,
    max_probes: u32,
}

impl SlugPolicy {
    pub const MIN_LENGTH: usize = 8;

    pub fn new(max_length: usize, max_probes: u32) -> DomainResult<Self> {
        if max_length < Self::MIN_LENGTH {
            return Err(DomainError::Validation(format!(
                "slug max length must be at least {}",
                Self::MIN_LENGTH
            )));
        }
        if max_probes == 0 {
            return Err(DomainError::Validation(
                "slug probe budget must be at least 1".into(),
            ));
        }
        Ok(Self {
            max_length,
            max_probes,
        })
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Number of suffixed candidates (`-2`, `-3`, ...) tried after the base slug.
    pub fn max_probes(&self) -> u32 {
        self.max_probes
    }
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_SLUG_MAX_LENGTH,
            max_probes: DEFAULT_SLUG_MAX_PROBES,
        }
    }
}

/// Domain service responsible for producing unique slugs for posts.
///
/// The service only reads existing slugs; persisting the chosen value is the
/// caller's job. Storage must still enforce uniqueness, since two callers can
/// observe the same free slug before either inserts.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    policy: SlugPolicy,
}

impl PostSlugService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        policy: SlugPolicy,
    ) -> Self {
        Self {
            read_repo,
            generator,
            policy,
        }
    }

    pub fn policy(&self) -> SlugPolicy {
        self.policy
    }

    /// Normalised, length-capped slug for `title`, without any uniqueness check.
    pub fn base_slug(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let normalized = self.generator.slugify(title.as_str());
        let stem = truncate_stem(&normalized, self.policy.max_length);
        if stem.is_empty() {
            return Err(DomainError::UnsluggableTitle(title.as_str().to_string()));
        }
        PostSlug::new(stem)
    }

    /// First free slug among `base`, `base-2`, `base-3`, ...
    pub async fn assign(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let base = self.base_slug(title)?;
        if !self.read_repo.slug_exists(&base).await? {
            return Ok(base);
        }

        let last = self.policy.max_probes.saturating_add(1);
        for suffix in 2..=last {
            let candidate = self.suffixed(&base, suffix)?;
            tracing::debug!(base = %base, candidate = %candidate, "slug taken, probing next suffix");
            if !self.read_repo.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        tracing::warn!(base = %base, probes = self.policy.max_probes, "slug probe budget exhausted");
        Err(DomainError::SlugSpaceExhausted {
            base: base.into_inner(),
            probes: self.policy.max_probes,
        })
    }

    /// Assigns a slug to `draft` unless it already carries one.
    pub async fn ensure_slug(&self, draft: &mut PostDraft) -> DomainResult<PostSlug> {
        if let Some(existing) = &draft.slug {
            return Ok(existing.clone());
        }
        let slug = self.assign(&draft.title).await?;
        draft.slug = Some(slug.clone());
        Ok(slug)
    }

    fn suffixed(&self, base: &PostSlug, suffix: u32) -> DomainResult<PostSlug> {
        let suffix = format!("-{suffix}");
        let room = self.policy.max_length.saturating_sub(suffix.len());
        let stem = truncate_stem(base.as_str(), room);
        if stem.is_empty() {
            return Err(DomainError::SlugSpaceExhausted {
                base: base.as_str().to_string(),
                probes: self.policy.max_probes,
            });
        }
        PostSlug::new(format!("{stem}{suffix}"))
    }
}

fn truncate_stem(slug: &str, max_len: usize) -> &str {
    let mut end = max_len.min(slug.len());
    while !slug.is_char_boundary(end) {
        end -= 1;
    }
    slug[..end].trim_matches('-')
}
