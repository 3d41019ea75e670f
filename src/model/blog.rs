//! Blog post record and the category vocabulary.

use std::borrow::Cow;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::slug::slugify;
use super::Listable;

/// A blog post as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date_posted: Option<DateTime<Utc>>,
    /// URI of the cover image.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl BlogPost {
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            category: None,
            content: String::new(),
            date_posted: None,
            image: None,
            slug: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// The stored slug, or one derived from the title when absent.
    pub fn slug(&self) -> Cow<'_, str> {
        match self.slug.as_deref() {
            Some(s) if !s.is_empty() => Cow::Borrowed(s),
            _ => Cow::Owned(slugify(&self.title)),
        }
    }
}

impl Listable for BlogPost {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "author" => Some(&self.author),
            "category" => self.category.as_deref(),
            "content" => Some(&self.content),
            "image" => self.image.as_deref(),
            "slug" => self.slug.as_deref(),
            _ => None,
        }
    }
}

/// Category names supplied by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Categories(Vec<String>);

impl Categories {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        Self(names)
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_derived_from_title() {
        let post = BlogPost::new(1, "Getting Started with Rust!", "ana");
        assert_eq!(post.slug(), "getting-started-with-rust");
    }

    #[test]
    fn test_slug_stored_wins() {
        let mut post = BlogPost::new(1, "Getting Started", "ana");
        post.slug = Some("intro".to_string());
        assert_eq!(post.slug(), "intro");

        post.slug = Some(String::new());
        assert_eq!(post.slug(), "getting-started");
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let post: BlogPost = serde_json::from_str(r#"{ "id": 7, "title": "Partial" }"#)
            .expect("Failed to parse post");
        assert_eq!(post.id, 7);
        assert_eq!(post.author, "");
        assert_eq!(post.category, None);
        assert_eq!(post.field("category"), None);
        assert_eq!(post.field("content"), Some(""));
    }

    #[test]
    fn test_deserialize_date_posted() {
        let post: BlogPost = serde_json::from_str(
            r#"{ "id": 1, "title": "Dated", "date_posted": "2024-03-01T10:00:00Z" }"#,
        )
        .expect("Failed to parse post");
        let date = post.date_posted.expect("date should be present");
        assert_eq!(date.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn test_categories_exact_match() {
        let cats = Categories::new(["Tech", "Travel"]);
        assert!(cats.contains("Tech"));
        assert!(!cats.contains("tech"));
        assert_eq!(cats.len(), 2);
    }

    #[test]
    fn test_categories_dedup_keeps_first_order() {
        let cats = Categories::new(["Tech", "Travel", "Tech", "Food", "Travel"]);
        let names: Vec<&str> = cats.iter().collect();
        assert_eq!(names, vec!["Tech", "Travel", "Food"]);
    }
}
