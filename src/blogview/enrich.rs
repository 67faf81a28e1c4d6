//! # Enrichment
//!
//! Raw posts are enriched exactly once, when they are fetched. Each enriched post
//! gains a set of tags, an estimated read time and a creation date. The author is
//! attached later, in a separate join pass, because authors come from a second
//! endpoint.
//!
//! Both sources of variation are injectable:
//! - [`TagAssigner`] decides which tags a post gets. The default,
//!   [`VocabularyTags`], is a pure function of the post id, so the same post
//!   always gets the same tags.
//! - [`Clock`] supplies "now", which creation dates are offset from.

use crate::error::{BlogError, Result};
use crate::helpers::{calculate_read_time, DEFAULT_WORDS_PER_MINUTE};
use crate::model::{Author, EnrichedPost, Post};
use chrono::{DateTime, Duration, Utc};

pub const TAG_VOCABULARY: [&str; 8] = [
    "React",
    "TypeScript",
    "JavaScript",
    "Web Dev",
    "Tutorial",
    "Best Practices",
    "Testing",
    "Performance",
];

/// Creation dates are spread over this many days back from now.
pub const DATE_SPREAD_DAYS: u64 = 30;

// Coprime with the default vocabulary size, so neighbouring ids start far apart.
const TAG_STRIDE: u64 = 5;

pub trait TagAssigner {
    /// Returns the tags for `post`. Must never be empty.
    fn assign(&self, post: &Post) -> Vec<String>;
}

/// Picks `id mod 3 + 1` consecutive tags from a vocabulary, starting at
/// `(id * 5) mod len` and wrapping around.
#[derive(Debug, Clone)]
pub struct VocabularyTags {
    vocabulary: Vec<String>,
}

impl Default for VocabularyTags {
    fn default() -> Self {
        Self {
            vocabulary: TAG_VOCABULARY.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl VocabularyTags {
    pub fn with_vocabulary(vocabulary: Vec<String>) -> Result<Self> {
        if vocabulary.is_empty() {
            return Err(BlogError::Config(
                "tag vocabulary must not be empty".to_string(),
            ));
        }
        Ok(Self { vocabulary })
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

impl TagAssigner for VocabularyTags {
    fn assign(&self, post: &Post) -> Vec<String> {
        let len = self.vocabulary.len() as u64;
        let count = (post.id % 3 + 1).min(len);
        let start = post.id.wrapping_mul(TAG_STRIDE) % len;
        (0..count)
            .map(|i| self.vocabulary[((start + i) % len) as usize].clone())
            .collect()
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub struct Enricher {
    tags: Box<dyn TagAssigner>,
    clock: Box<dyn Clock>,
    words_per_minute: u32,
}

impl Default for Enricher {
    fn default() -> Self {
        Self {
            tags: Box::new(VocabularyTags::default()),
            clock: Box::new(SystemClock),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl Enricher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, tags: impl TagAssigner + 'static) -> Self {
        self.tags = Box::new(tags);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    /// The instant enrichment dates are offset from.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn enrich(&self, post: Post) -> EnrichedPost {
        self.enrich_at(post, self.clock.now())
    }

    /// Enriches a whole batch against a single reference instant.
    pub fn enrich_all(&self, posts: Vec<Post>) -> Vec<EnrichedPost> {
        let now = self.clock.now();
        posts
            .into_iter()
            .map(|post| self.enrich_at(post, now))
            .collect()
    }

    fn enrich_at(&self, post: Post, now: DateTime<Utc>) -> EnrichedPost {
        let tags = self.tags.assign(&post);
        let read_time = calculate_read_time(&post.body, self.words_per_minute);
        let created_at = offset_date(now, post.id);
        EnrichedPost {
            post,
            author: None,
            tags,
            read_time,
            created_at,
        }
    }
}

fn offset_date(now: DateTime<Utc>, id: u64) -> DateTime<Utc> {
    let days_ago = (id % DATE_SPREAD_DAYS) as i64;
    now - Duration::days(days_ago)
}

/// Re-derives every post's author by `author_id`. Unmatched posts lose their author.
pub fn attach_authors(posts: &mut [EnrichedPost], authors: &[Author]) {
    for post in posts.iter_mut() {
        post.author = authors
            .iter()
            .find(|a| a.id == post.post.author_id)
            .cloned();
    }
}
