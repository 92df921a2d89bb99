//! Core data types: [`Post`], the [`PostDraft`] a dashboard form submits, and
//! the derivations that turn one into the other.

use chrono::{DateTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Identity stamped on every post created through the dashboard.
pub const DEFAULT_AUTHOR: &str = "Shaan";

/// Cover image used when a draft leaves the image field empty.
pub const DEFAULT_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1499750310107-5fef28a66643";

/// Characters of stripped content that count as one minute of reading.
const CHARS_PER_MINUTE: usize = 1000;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("valid slug regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// One blog entry, as persisted.
///
/// Field names serialize in camelCase so previously stored collections keep
/// loading (`readTime`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Rich text, stored as HTML.
    pub content: String,
    /// Display date, e.g. `April 15, 2023`.
    pub date: String,
    pub author: String,
    /// Display string, e.g. `6 min read`.
    pub read_time: String,
    #[serde(default)]
    pub image: String,
    pub tags: Vec<String>,
    pub slug: String,
}

impl Post {
    /// Builds a post from a form submission.
    ///
    /// The id is the submission time in epoch milliseconds, so two drafts
    /// submitted within the same millisecond collide.
    pub fn from_draft<Tz>(
        draft: &PostDraft,
        now: &DateTime<Tz>,
        author: &str,
        fallback_image: &str,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let image = if draft.image.is_empty() {
            fallback_image.to_string()
        } else {
            draft.image.clone()
        };

        Self {
            id: now.timestamp_millis().to_string(),
            title: draft.title.clone(),
            excerpt: draft.excerpt.clone(),
            content: draft.content.clone(),
            date: format_display_date(now),
            author: author.to_string(),
            read_time: estimate_read_time(&draft.content),
            image,
            tags: parse_tags(&draft.tags),
            slug: slugify(&draft.title),
        }
    }

    /// The cover image, or `fallback` when none was stored.
    pub fn image_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.image.is_empty() {
            fallback
        } else {
            &self.image
        }
    }
}

/// The fields of the dashboard's "create post" form, before derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    /// May be empty; the configured fallback image is used then.
    pub image: String,
    /// Raw comma-separated tag list.
    pub tags: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }
}

/// Derives a URL-safe slug: lower-cased, punctuation dropped, whitespace runs
/// collapsed into single hyphens.
///
/// ```
/// assert_eq!(folio::model::slugify("Hello, World! Foo"), "hello-world-foo");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    WHITESPACE_RUN.replace_all(&stripped, "-").into_owned()
}

/// Removes every `<...>` tag, leaving the text between them.
pub fn strip_html(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}

/// `"{n} min read"`, one minute per thousand characters of visible text,
/// never less than one.
pub fn estimate_read_time(content: &str) -> String {
    let chars = strip_html(content).chars().count();
    let minutes = chars.div_ceil(CHARS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

/// Splits a comma-separated tag field, trimming each entry. Empty entries are
/// kept, so an empty field yields a single empty tag.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

fn format_display_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 12, 30, 0).unwrap()
    }

    #[test]
    fn slugify_strips_punctuation_and_collapses_whitespace() {
        assert_eq!(slugify("Hello, World! Foo"), "hello-world-foo");
        assert_eq!(slugify("Rust   and\tWASM"), "rust-and-wasm");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn slugify_keeps_edge_hyphens_from_surrounding_whitespace() {
        assert_eq!(slugify(" padded "), "-padded-");
    }

    #[test]
    fn slugify_drops_non_ascii_letters() {
        assert_eq!(slugify("Café Crème"), "caf-crme");
    }

    #[test]
    fn strip_html_removes_tags() {
        assert_eq!(strip_html("<p>Hi <b>there</b></p>"), "Hi there");
    }

    #[test]
    fn read_time_is_at_least_one_minute() {
        assert_eq!(estimate_read_time(""), "1 min read");
        assert_eq!(estimate_read_time("<p>short</p>"), "1 min read");
    }

    #[test]
    fn read_time_rounds_up_per_thousand_visible_chars() {
        let body = format!("<p>{}</p>", "a".repeat(1000));
        assert_eq!(estimate_read_time(&body), "1 min read");

        let body = format!("<p>{}</p>", "a".repeat(1001));
        assert_eq!(estimate_read_time(&body), "2 min read");
    }

    #[test]
    fn parse_tags_trims_entries() {
        assert_eq!(
            parse_tags("Rust, WASM ,  CLI"),
            vec!["Rust".to_string(), "WASM".to_string(), "CLI".to_string()]
        );
        assert_eq!(parse_tags(""), vec![String::new()]);
    }

    #[test]
    fn from_draft_derives_all_fields() {
        let draft = PostDraft::new("My First Post!")
            .with_excerpt("Short")
            .with_content("<p>Body</p>")
            .with_tags("Rust, Blog");
        let now = fixed_now();

        let post = Post::from_draft(&draft, &now, DEFAULT_AUTHOR, DEFAULT_FALLBACK_IMAGE);

        assert_eq!(post.id, now.timestamp_millis().to_string());
        assert_eq!(post.slug, "my-first-post");
        assert_eq!(post.date, "March 7, 2024");
        assert_eq!(post.author, "Shaan");
        assert_eq!(post.read_time, "1 min read");
        assert_eq!(post.image, DEFAULT_FALLBACK_IMAGE);
        assert_eq!(post.tags, vec!["Rust", "Blog"]);
    }

    #[test]
    fn from_draft_keeps_explicit_image() {
        let draft = PostDraft::new("T").with_image("https://example.com/a.png");
        let post = Post::from_draft(&draft, &fixed_now(), "me", DEFAULT_FALLBACK_IMAGE);
        assert_eq!(post.image, "https://example.com/a.png");
    }

    #[test]
    fn image_or_falls_back_when_empty() {
        let mut post = Post::from_draft(&PostDraft::new("T"), &fixed_now(), "me", "fallback");
        post.image.clear();
        assert_eq!(post.image_or("other"), "other");
    }

    #[test]
    fn serializes_read_time_in_camel_case() {
        let post = Post::from_draft(&PostDraft::new("T"), &fixed_now(), "me", "img");
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["readTime"], "1 min read");
        assert!(json.get("read_time").is_none());
    }
}
