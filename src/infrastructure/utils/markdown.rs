use std::fmt;

use ammonia::{Builder, UrlRelative};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;
use serde::Serialize;

use crate::constants::WORDS_PER_MINUTE;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</?[^>]+(>|$)").expect("HTML tag pattern is valid")
});

/// Converts Markdown content to sanitized HTML to prevent XSS attacks.
pub fn safe_markdown_to_html(markdown: &str) -> String {
    let options = Options::all();
    let parser = Parser::new_ext(markdown, options);

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    sanitize_html(&raw_html)
}

/// Removes unsafe HTML, forces `rel` on links and drops relative URLs.
pub fn sanitize_html(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::Deny)
        .clean(content)
        .to_string()
}

/// Drops anything that looks like an HTML tag, keeping the text between tags.
pub fn strip_html_tags(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

pub fn word_count(text: &str) -> usize {
    strip_html_tags(text).split_whitespace().count()
}

/// How long a piece of content takes to read, in whole minutes (at least one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadingTime {
    pub minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingLength {
    Short,
    Medium,
    Long,
}

impl ReadingTime {
    pub fn estimate(content: &str) -> Self {
        Self::estimate_with_rate(content, WORDS_PER_MINUTE)
    }

    pub fn estimate_with_rate(content: &str, words_per_minute: usize) -> Self {
        let words = word_count(content);
        let minutes = words.div_ceil(words_per_minute.max(1)).max(1);
        ReadingTime { minutes: u32::try_from(minutes).unwrap_or(u32::MAX) }
    }

    pub fn length(&self) -> ReadingLength {
        match self.minutes {
            0..=3 => ReadingLength::Short,
            4..=7 => ReadingLength::Medium,
            _ => ReadingLength::Long,
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_stripped_before_counting() {
        assert_eq!(strip_html_tags("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(word_count("<p>one two</p>\n<p>three</p>"), 3);
    }

    #[test]
    fn unterminated_tag_is_stripped_to_end() {
        assert_eq!(strip_html_tags("text <img src=x"), "text ");
    }

    #[test]
    fn reading_time_rounds_up_and_never_drops_below_one() {
        assert_eq!(ReadingTime::estimate("").minutes, 1);
        assert_eq!(ReadingTime::estimate(&"word ".repeat(200)).minutes, 1);
        assert_eq!(ReadingTime::estimate(&"word ".repeat(201)).minutes, 2);
        assert_eq!(ReadingTime::estimate(&"word ".repeat(1500)).minutes, 8);
    }

    #[test]
    fn reading_time_label_and_length() {
        let short = ReadingTime { minutes: 3 };
        let medium = ReadingTime { minutes: 7 };
        let long = ReadingTime { minutes: 8 };

        assert_eq!(short.to_string(), "3 min read");
        assert_eq!(ReadingTime { minutes: 1 }.to_string(), "1 min read");
        assert_eq!(short.length(), ReadingLength::Short);
        assert_eq!(medium.length(), ReadingLength::Medium);
        assert_eq!(long.length(), ReadingLength::Long);
    }

    #[test]
    fn rendered_markdown_is_sanitized() {
        let html = safe_markdown_to_html("# Title\n\n[x](https://example.com)\n\n<script>alert(1)</script>");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("rel=\"nofollow noopener noreferrer\""));
    }
}
