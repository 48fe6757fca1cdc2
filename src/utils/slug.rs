//! URL slug generation with deterministic duplicate suffixes.

use crate::domain::options::{ApostrophePolicy, NormalizerOptions, SuffixStart};
use regex::Regex;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Anything that is not a word character or whitespace.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Marker inserted between a slug and its duplicate counter.
pub const DUPLICATE_SUFFIX: &str = "-atwgp";

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Lowercases `name` and joins its words with hyphens.
///
/// Punctuation becomes a word break. Apostrophes follow `apostrophes`:
/// a word break under [`ApostrophePolicy::Space`], nothing under
/// [`ApostrophePolicy::Strip`].
pub fn slugify(name: &str, apostrophes: ApostrophePolicy) -> String {
    let mut lowered = name.to_lowercase();
    if apostrophes == ApostrophePolicy::Strip {
        lowered = lowered.replace(APOSTROPHES, "");
    }

    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Appends the duplicate suffix for `occurrence_index > 0`.
pub fn suffixed_slug(base: &str, occurrence_index: usize) -> String {
    if occurrence_index == 0 {
        base.to_string()
    } else {
        format!("{base}{DUPLICATE_SUFFIX}{occurrence_index}")
    }
}

/// Builds the slug for `name` at a given occurrence, with default apostrophe
/// handling.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(generate_slug("Absolutely No Problem!", 0), "absolutely-no-problem");
/// assert_eq!(generate_slug("Hello, World!!", 1), "hello-world-atwgp1");
/// ```
pub fn generate_slug(name: &str, occurrence_index: usize) -> String {
    suffixed_slug(&slugify(name, ApostrophePolicy::default()), occurrence_index)
}

/// Returns true when `name` produces a non-empty slug.
pub fn has_slug_text(name: &str, apostrophes: ApostrophePolicy) -> bool {
    !slugify(name, apostrophes).is_empty()
}

/// Hands out batch-unique slugs.
///
/// Tracks how many times each base slug has been seen. The first occurrence
/// gets the bare slug; later ones get `-atwgp{N}` where `N` counts up from
/// [`SuffixStart::initial_count`] + 1. Every slug handed out is remembered,
/// so a name that literally spells an earlier suffixed slug gets the next
/// free counter instead.
#[derive(Debug)]
pub struct SlugAllocator {
    apostrophes: ApostrophePolicy,
    suffix_start: SuffixStart,
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl SlugAllocator {
    pub fn new(apostrophes: ApostrophePolicy, suffix_start: SuffixStart) -> Self {
        Self {
            apostrophes,
            suffix_start,
            counts: HashMap::new(),
            issued: HashSet::new(),
        }
    }

    pub fn from_options(options: &NormalizerOptions) -> Self {
        Self::new(options.apostrophes, options.suffix_start)
    }

    /// Returns the next slug for `name`, or `None` when `name` has no word
    /// characters to build a slug from.
    pub fn allocate(&mut self, name: &str) -> Option<String> {
        let base = slugify(name, self.apostrophes);
        if base.is_empty() {
            return None;
        }

        let count = match self.counts.entry(base.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let count = entry.insert(self.suffix_start.initial_count());
                if self.issued.insert(base.clone()) {
                    return Some(base);
                }
                count
            }
        };

        loop {
            *count += 1;
            let candidate = suffixed_slug(&base, *count);
            if self.issued.insert(candidate.clone()) {
                return Some(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocate_all(allocator: &mut SlugAllocator, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .map(|name| allocator.allocate(name).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_generate_slug_basic() {
        assert_eq!(generate_slug("Absolutely No Problem!", 0), "absolutely-no-problem");
    }

    #[test]
    fn test_generate_slug_with_occurrence() {
        assert_eq!(generate_slug("Hello World", 3), "hello-world-atwgp3");
    }

    #[test]
    fn test_slugify_collapses_whitespace_and_punctuation() {
        assert_eq!(
            slugify("  Sunset --- over   the  Sea!! ", ApostrophePolicy::Space),
            "sunset-over-the-sea"
        );
    }

    #[test]
    fn test_slugify_keeps_underscores_and_digits() {
        assert_eq!(slugify("Art_Print 2024", ApostrophePolicy::Space), "art_print-2024");
    }

    #[test]
    fn test_slugify_apostrophe_as_space() {
        assert_eq!(slugify("Can't Stop", ApostrophePolicy::Space), "can-t-stop");
        assert_eq!(slugify("Can\u{2019}t Stop", ApostrophePolicy::Space), "can-t-stop");
    }

    #[test]
    fn test_slugify_apostrophe_stripped() {
        assert_eq!(slugify("Can't Stop", ApostrophePolicy::Strip), "cant-stop");
        assert_eq!(slugify("Can\u{2019}t Stop", ApostrophePolicy::Strip), "cant-stop");
    }

    #[test]
    fn test_slugify_only_punctuation() {
        assert_eq!(slugify("!!! ???", ApostrophePolicy::Space), "");
    }

    #[test]
    fn test_allocator_zero_start() {
        let mut allocator = SlugAllocator::new(ApostrophePolicy::Space, SuffixStart::Zero);
        let slugs = allocate_all(&mut allocator, &["Hello World", "Hello, World!!"]);
        assert_eq!(slugs, ["hello-world", "hello-world-atwgp1"]);
    }

    #[test]
    fn test_allocator_zero_start_many_repeats() {
        let mut allocator = SlugAllocator::new(ApostrophePolicy::Space, SuffixStart::Zero);
        let slugs = allocate_all(&mut allocator, &["a b", "A-B", "a.b", "other", "a  b"]);
        assert_eq!(
            slugs,
            ["a-b", "a-b-atwgp1", "a-b-atwgp2", "other", "a-b-atwgp3"]
        );
    }

    #[test]
    fn test_allocator_one_start() {
        let mut allocator = SlugAllocator::new(ApostrophePolicy::Space, SuffixStart::One);
        let slugs = allocate_all(&mut allocator, &["Hello World", "hello world", "HELLO WORLD"]);
        assert_eq!(slugs, ["hello-world", "hello-world-atwgp2", "hello-world-atwgp3"]);
    }

    #[test]
    fn test_allocator_apostrophe_policy_changes_collisions() {
        let mut spaced = SlugAllocator::new(ApostrophePolicy::Space, SuffixStart::Zero);
        assert_eq!(allocate_all(&mut spaced, &["can't", "can t"]), ["can-t", "can-t-atwgp1"]);

        let mut stripped = SlugAllocator::new(ApostrophePolicy::Strip, SuffixStart::Zero);
        assert_eq!(allocate_all(&mut stripped, &["can't", "can t"]), ["cant", "can-t"]);
    }

    #[test]
    fn test_allocator_rejects_names_without_word_characters() {
        let mut allocator = SlugAllocator::new(ApostrophePolicy::Space, SuffixStart::Zero);
        assert_eq!(allocator.allocate("!!!"), None);
        assert_eq!(allocator.allocate("???"), None);
        assert_eq!(allocator.allocate("ok"), Some("ok".to_string()));
    }

    #[test]
    fn test_has_slug_text() {
        assert!(has_slug_text("Sun!", ApostrophePolicy::Space));
        assert!(!has_slug_text("!!! ???", ApostrophePolicy::Space));
        assert!(!has_slug_text("''", ApostrophePolicy::Strip));
    }

    #[test]
    fn test_allocator_skips_literal_suffixed_names() {
        let mut allocator = SlugAllocator::new(ApostrophePolicy::Space, SuffixStart::Zero);
        let slugs = allocate_all(&mut allocator, &["Sun", "Sun", "Sun atwgp1", "Sun"]);
        assert_eq!(slugs, ["sun", "sun-atwgp1", "sun-atwgp1-atwgp1", "sun-atwgp2"]);
    }

    #[test]
    fn test_allocator_counter_steps_over_literal_slug() {
        let mut allocator = SlugAllocator::new(ApostrophePolicy::Space, SuffixStart::One);
        let slugs = allocate_all(&mut allocator, &["Moon atwgp2", "Moon", "Moon"]);
        assert_eq!(slugs, ["moon-atwgp2", "moon", "moon-atwgp3"]);
    }

    #[test]
    fn test_allocator_from_options() {
        let options = NormalizerOptions {
            apostrophes: ApostrophePolicy::Strip,
            suffix_start: SuffixStart::One,
            keyword_substitutions: false,
        };
        let mut allocator = SlugAllocator::from_options(&options);
        assert_eq!(allocate_all(&mut allocator, &["it's", "its"]), ["its", "its-atwgp2"]);
    }
}
