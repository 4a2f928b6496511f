//! Query evaluation over loaded posts.

use std::cmp::Reverse;

use shortcode_core::{PostQuery, QueryPage};

use crate::post::FilePost;

/// True when `post` passes the type, status and search filters of `query`.
pub(crate) fn matches(post: &FilePost, query: &PostQuery) -> bool {
    let type_ok = match &query.post_type {
        Some(filter) => filter.matches(&post.post_type),
        None => post.post_type == "post",
    };

    let status_ok = match &query.post_status {
        Some(filter) => filter.matches(&post.post_status),
        None => post.post_status == "publish",
    };

    type_ok && status_ok && matches_search(post, query.s.as_deref())
}

/// Every whitespace-separated term must appear in the title or content.
fn matches_search(post: &FilePost, search: Option<&str>) -> bool {
    let Some(search) = search else {
        return true;
    };

    let title = post.title.to_lowercase();
    let content = post.content.to_lowercase();

    search
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|term| title.contains(&term) || content.contains(&term))
}

/// Normalize a requested page size the way the host's query engine does.
///
/// `-1` means unlimited, other negatives flip sign, zero becomes one.
pub(crate) fn effective_page_size(requested: Option<i64>, default: i64) -> i64 {
    match requested.unwrap_or(default) {
        n if n < -1 => n.saturating_abs(),
        0 => 1,
        n => n,
    }
}

/// Filter, order newest first and cut out the requested page.
pub(crate) fn run(mut posts: Vec<FilePost>, query: &PostQuery, default_page_size: i64) -> QueryPage {
    posts.retain(|post| matches(post, query));
    posts.sort_by_key(|post| Reverse((post.date, post.id)));

    let found_posts = posts.len() as u64;
    let posts_per_page = effective_page_size(query.posts_per_page, default_page_size);

    let ids = if posts_per_page == -1 {
        posts.iter().map(|post| post.id).collect()
    } else {
        let page = query.paged.unwrap_or(1).max(1);
        let per_page = posts_per_page as u64;
        let skip = (page - 1).saturating_mul(per_page);
        posts
            .iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(per_page).unwrap_or(usize::MAX))
            .map(|post| post.id)
            .collect()
    };

    QueryPage {
        ids,
        found_posts,
        posts_per_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shortcode_core::ValueFilter;

    fn post(id: u64, title: &str, post_type: &str, status: &str, day: u32) -> FilePost {
        FilePost {
            id,
            title: title.to_string(),
            content: String::new(),
            post_type: post_type.to_string(),
            post_status: status.to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
        }
    }

    fn sample() -> Vec<FilePost> {
        vec![
            post(1, "Hello World", "post", "publish", 1),
            post(2, "About Us", "page", "publish", 2),
            post(3, "Draft Notes", "post", "draft", 3),
            post(4, "World News", "post", "publish", 4),
            post(5, "Contact", "page", "publish", 5),
        ]
    }

    #[test]
    fn defaults_to_published_posts_newest_first() {
        let page = run(sample(), &PostQuery::default(), 10);
        assert_eq!(page.ids, vec![4, 1]);
        assert_eq!(page.found_posts, 2);
        assert_eq!(page.posts_per_page, 10);
    }

    #[test]
    fn post_type_filter_and_any() {
        let pages = run(sample(), &PostQuery::default().with_post_type("page"), 10);
        assert_eq!(pages.ids, vec![5, 2]);

        let mut everything = PostQuery::default().with_post_type("any");
        everything.post_status = Some(ValueFilter::from("any"));
        assert_eq!(run(sample(), &everything, 10).found_posts, 5);
    }

    #[test]
    fn search_is_case_insensitive_and_needs_every_term() {
        let query = PostQuery::default().with_search("world");
        assert_eq!(run(sample(), &query, 10).ids, vec![4, 1]);

        let query = PostQuery::default().with_search("WORLD news");
        assert_eq!(run(sample(), &query, 10).ids, vec![4]);
    }

    #[test]
    fn pagination_reports_total_matches() {
        let query = PostQuery::default()
            .with_post_type(ValueFilter::Many(vec!["post".into(), "page".into()]))
            .with_posts_per_page(2)
            .with_page(2);
        let page = run(sample(), &query, 10);
        assert_eq!(page.ids, vec![2, 1]);
        assert_eq!(page.found_posts, 4);
        assert_eq!(page.posts_per_page, 2);
    }

    #[test]
    fn page_zero_is_first_page_and_past_end_is_empty() {
        let query = PostQuery::default().with_posts_per_page(1).with_page(0);
        assert_eq!(run(sample(), &query, 10).ids, vec![4]);

        let query = PostQuery::default().with_posts_per_page(1).with_page(9);
        let page = run(sample(), &query, 10);
        assert!(page.ids.is_empty());
        assert_eq!(page.found_posts, 2);
    }

    #[test]
    fn unlimited_page_size() {
        let query = PostQuery::default().with_posts_per_page(-1).with_page(3);
        let page = run(sample(), &query, 10);
        assert_eq!(page.ids, vec![4, 1]);
        assert_eq!(page.posts_per_page, -1);
    }

    #[test]
    fn page_size_normalization() {
        assert_eq!(effective_page_size(None, 10), 10);
        assert_eq!(effective_page_size(Some(0), 10), 1);
        assert_eq!(effective_page_size(Some(-5), 10), 5);
        assert_eq!(effective_page_size(Some(-1), 10), -1);
    }

    #[test]
    fn extreme_page_sizes_do_not_overflow() {
        assert_eq!(effective_page_size(Some(i64::MIN), 10), i64::MAX);
        assert_eq!(effective_page_size(None, i64::MIN), i64::MAX);

        let query = PostQuery::default().with_posts_per_page(i64::MIN).with_page(u64::MAX);
        let page = run(sample(), &query, 10);
        assert!(page.ids.is_empty());
        assert_eq!(page.found_posts, 2);

        let query = PostQuery::default().with_posts_per_page(i64::MIN);
        assert_eq!(run(sample(), &query, 10).ids, vec![4, 1]);
    }
}
