use crate::model::EnrichedPost;
use std::collections::BTreeSet;

/// Free-text search combined with an optional tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub search_query: String,
    pub selected_tag: Option<String>,
}

impl PostFilter {
    pub fn new(search_query: impl Into<String>, selected_tag: Option<String>) -> Self {
        Self {
            search_query: search_query.into(),
            selected_tag,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty() && self.selected_tag.is_none()
    }

    pub fn matches(&self, post: &EnrichedPost) -> bool {
        self.matches_search(post) && self.matches_tag(post)
    }

    /// Posts matching the filter, in their original order.
    pub fn apply(&self, posts: &[EnrichedPost]) -> Vec<EnrichedPost> {
        if self.is_empty() {
            return posts.to_vec();
        }
        posts.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    fn matches_search(&self, post: &EnrichedPost) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let needle = self.search_query.to_lowercase();
        post.title().to_lowercase().contains(&needle)
            || post.body().to_lowercase().contains(&needle)
    }

    fn matches_tag(&self, post: &EnrichedPost) -> bool {
        match &self.selected_tag {
            Some(tag) => post.has_tag(tag),
            None => true,
        }
    }
}

/// Every tag carried by `posts`, sorted and de-duplicated.
pub fn collect_tags(posts: &[EnrichedPost]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Post;
    use chrono::Utc;

    fn enriched(id: u64, title: &str, body: &str, tags: &[&str]) -> EnrichedPost {
        EnrichedPost {
            post: Post::new(id, 1, title, body),
            author: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            read_time: 1,
            created_at: Utc::now(),
        }
    }

    fn posts() -> Vec<EnrichedPost> {
        vec![
            enriched(1, "React Tutorial", "Learn React", &["React"]),
            enriched(2, "TypeScript Guide", "Learn TypeScript", &["TypeScript"]),
            enriched(3, "Hooks in depth", "react hooks", &["React", "Tutorial"]),
        ]
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let filtered = PostFilter::default().apply(&posts());
        let ids: Vec<_> = filtered.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn search_matches_title_or_body_case_insensitively() {
        let filter = PostFilter::new("REACT", None);
        let ids: Vec<_> = filter.apply(&posts()).iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn search_inclusion_is_exactly_substring_membership() {
        let all = posts();
        for query in ["learn", "guide", "x", "in depth", "e"] {
            let filter = PostFilter::new(query, None);
            let filtered = filter.apply(&all);
            for post in &all {
                let expected = post.title().to_lowercase().contains(query)
                    || post.body().to_lowercase().contains(query);
                assert_eq!(filtered.iter().any(|p| p.id() == post.id()), expected);
            }
        }
    }

    #[test]
    fn tag_filter_requires_membership() {
        let filter = PostFilter::new("", Some("Tutorial".to_string()));
        let filtered = filter.apply(&posts());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), 3);
    }

    #[test]
    fn tag_match_is_exact() {
        let filter = PostFilter::new("", Some("react".to_string()));
        assert!(filter.apply(&posts()).is_empty());
    }

    #[test]
    fn search_and_tag_combine() {
        let filter = PostFilter::new("hooks", Some("React".to_string()));
        let filtered = filter.apply(&posts());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title(), "Hooks in depth");
    }

    #[test]
    fn collects_sorted_unique_tags() {
        assert_eq!(
            collect_tags(&posts()),
            vec!["React", "Tutorial", "TypeScript"]
        );
        assert!(collect_tags(&[]).is_empty());
    }
}
