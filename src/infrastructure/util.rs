use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Slug generator backed by the `slug` crate: transliterates to ASCII,
/// lowercases and joins alphanumeric runs with single hyphens.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
