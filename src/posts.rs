use std::{borrow::Borrow, cmp::Ordering};

use crate::content::BlogEntry;

/// Newest first, by publication date or, failing that, creation date.
pub(crate) fn sort_post<T: Borrow<BlogEntry>>(a: &T, b: &T) -> Ordering {
    b.borrow()
        .data
        .sort_date()
        .cmp(&a.borrow().data.sort_date())
}

/// Posts of one locale, with the locale directory stripped from their ids.
pub(crate) fn get_localized_blog_posts(posts: &[BlogEntry], locale: &str) -> Vec<BlogEntry> {
    let prefix = format!("{locale}/");
    let mut localized: Vec<BlogEntry> = posts
        .iter()
        .filter(|post| post.id.starts_with(locale))
        .map(|post| BlogEntry {
            id: post.id.replacen(&prefix, "", 1),
            ..post.clone()
        })
        .collect();
    localized.sort_by(sort_post);
    localized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::BlogPostData;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn post(id: &str, created_at: &str, published_at: Option<&str>) -> BlogEntry {
        BlogEntry {
            id: id.to_string(),
            data: BlogPostData {
                title: format!("title of {id}"),
                description: "description".to_string(),
                created_at: date(created_at),
                updated_at: None,
                published_at: published_at.map(date),
                hero_image: None,
            },
            body: String::new(),
        }
    }

    fn ids(posts: &[BlogEntry]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn filters_strips_and_sorts_by_published_date() {
        let posts = vec![
            post("ko/post-1", "2024-03-10", Some("2024-03-15")),
            post("ko/post-2", "2024-03-18", Some("2024-03-20")),
            post("en/post-3", "2024-04-01", None),
        ];
        assert_eq!(ids(&get_localized_blog_posts(&posts, "ko")), ["post-2", "post-1"]);
    }

    #[test]
    fn falls_back_to_created_date() {
        let posts = vec![
            post("ko/post-1", "2024-03-10", None),
            post("ko/post-2", "2024-03-18", None),
        ];
        assert_eq!(ids(&get_localized_blog_posts(&posts, "ko")), ["post-2", "post-1"]);
    }

    #[test]
    fn published_date_wins_over_later_creation() {
        let posts = vec![
            post("en/old", "2024-05-01", Some("2024-01-01")),
            post("en/new", "2024-02-01", None),
        ];
        assert_eq!(ids(&get_localized_blog_posts(&posts, "en")), ["new", "old"]);
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let posts = vec![
            post("en/b", "2024-03-10", None),
            post("en/a", "2024-03-10", None),
        ];
        assert_eq!(ids(&get_localized_blog_posts(&posts, "en")), ["b", "a"]);
    }

    #[test]
    fn unknown_locale_is_empty() {
        let posts = vec![post("ko/post-1", "2024-03-10", None)];
        assert!(get_localized_blog_posts(&posts, "fr").is_empty());
        assert!(get_localized_blog_posts(&[], "ko").is_empty());
    }
}
