//! Post filtering and search. Results always keep insertion order; nothing
//! here re-sorts by relevance or recency.

use back2me_types::models::Post;

/// Status value that disables status filtering.
pub const ALL_STATUSES: &str = "all";

/// Listing filters. `status` is an exact match unless it is `"all"` or
/// absent; `item_name` and `location` are case-insensitive substrings.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub status: Option<String>,
    pub item_name: Option<String>,
    pub location: Option<String>,
}

impl PostFilter {
    pub fn status(status: Option<&str>) -> Self {
        Self {
            status: status.map(str::to_string),
            ..Self::default()
        }
    }

    pub(crate) fn matches(&self, post: &Post) -> bool {
        matches_status(post, self.status.as_deref())
            && non_empty(&self.item_name).is_none_or(|q| contains_ci(&post.item_name, q))
            && non_empty(&self.location).is_none_or(|q| contains_ci(&post.location, q))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub(crate) fn matches_status(post: &Post, status: Option<&str>) -> bool {
    match status {
        None | Some(ALL_STATUSES) => true,
        Some(wanted) => post.status.as_str() == wanted,
    }
}

/// A post matches when the lowercased query is a substring of its item
/// name, location, or description. The empty query matches everything.
pub(crate) fn matches_search(post: &Post, query_lower: &str) -> bool {
    post.item_name.to_lowercase().contains(query_lower)
        || post.location.to_lowercase().contains(query_lower)
        || post.description.to_lowercase().contains(query_lower)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use back2me_types::models::PostStatus;
    use chrono::Utc;

    use super::*;

    fn post(status: PostStatus, item_name: &str, location: &str, description: &str) -> Post {
        Post {
            id: 1,
            user_id: 1,
            status,
            item_name: item_name.into(),
            location: location.into(),
            place: "Near Study Table 12".into(),
            description: description.into(),
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn status_filter() {
        let p = post(PostStatus::Lost, "Backpack", "Library", "");
        assert!(matches_status(&p, None));
        assert!(matches_status(&p, Some("all")));
        assert!(matches_status(&p, Some("lost")));
        assert!(!matches_status(&p, Some("found")));
        assert!(!matches_status(&p, Some("LOST")));
    }

    #[test]
    fn search_covers_name_location_description_only() {
        let p = post(PostStatus::Lost, "Blue Nike Backpack", "Library", "laptop inside");
        assert!(matches_search(&p, "nike"));
        assert!(matches_search(&p, "library"));
        assert!(matches_search(&p, "laptop"));
        assert!(matches_search(&p, ""));
        // `place` is not searched.
        assert!(!matches_search(&p, "study table"));
    }

    #[test]
    fn substring_filters_ignore_case_and_empty_values() {
        let p = post(PostStatus::Found, "iPhone 13 Pro", "Student Cafeteria", "");
        let filter = PostFilter {
            status: Some("found".into()),
            item_name: Some("IPHONE".into()),
            location: Some(String::new()),
        };
        assert!(filter.matches(&p));

        let filter = PostFilter {
            location: Some("library".into()),
            ..PostFilter::default()
        };
        assert!(!filter.matches(&p));
    }
}
