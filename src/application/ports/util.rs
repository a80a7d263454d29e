// src/application/ports/util.rs
/// Turns free text into a URL-safe form: lowercase ASCII alphanumerics
/// separated by single hyphens, with no leading or trailing hyphen. May
/// return an empty string when nothing usable remains.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
