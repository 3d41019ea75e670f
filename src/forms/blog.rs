//! Create/edit form of the blog editor.

use serde::{Deserialize, Serialize};

use super::{required, FormError};
use crate::model::{is_valid_slug, slugify, Categories};

/// Raw editor input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BlogForm {
    pub title: String,
    pub author: String,
    pub category: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub slug: String,
}

/// Validated payload ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPostDraft {
    pub title: String,
    pub author: String,
    pub category: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub slug: String,
}

impl BlogForm {
    pub fn validate(&self, categories: &Categories) -> Result<BlogPostDraft, FormError> {
        let title = required(&self.title, "title")?;
        let author = required(&self.author, "author")?;
        let content = required(&self.content, "content")?;

        let category = required(&self.category, "category")?;
        if !categories.contains(&category) {
            return Err(FormError::UnknownCategory(category));
        }

        let slug = match self.slug.trim() {
            "" => slugify(&title),
            explicit if is_valid_slug(explicit) => explicit.to_string(),
            explicit => return Err(FormError::InvalidSlug(explicit.to_string())),
        };
        if slug.is_empty() {
            return Err(FormError::InvalidSlug(title));
        }

        let image = self
            .image
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(str::to_string);

        Ok(BlogPostDraft {
            title,
            author,
            category,
            content,
            image,
            slug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Categories {
        Categories::new(["Tech", "Travel"])
    }

    fn form() -> BlogForm {
        BlogForm {
            title: "  Hello, World  ".to_string(),
            author: "ana".to_string(),
            category: "Tech".to_string(),
            content: "Body".to_string(),
            image: Some("   ".to_string()),
            slug: String::new(),
        }
    }

    #[test]
    fn test_valid_form_derives_slug() {
        let draft = form().validate(&categories()).unwrap();
        assert_eq!(draft.title, "Hello, World");
        assert_eq!(draft.slug, "hello-world");
        assert_eq!(draft.image, None);
    }

    #[test]
    fn test_explicit_slug_kept() {
        let mut f = form();
        f.slug = "custom-slug".to_string();
        assert_eq!(f.validate(&categories()).unwrap().slug, "custom-slug");
    }

    #[test]
    fn test_invalid_slug() {
        let mut f = form();
        f.slug = "Not A Slug".to_string();
        assert_eq!(
            f.validate(&categories()),
            Err(FormError::InvalidSlug("Not A Slug".to_string()))
        );
    }

    #[test]
    fn test_title_without_alphanumerics() {
        let mut f = form();
        f.title = "???".to_string();
        assert!(matches!(f.validate(&categories()), Err(FormError::InvalidSlug(_))));
    }

    #[test]
    fn test_required_fields() {
        let mut f = form();
        f.content = "  ".to_string();
        assert_eq!(f.validate(&categories()), Err(FormError::Required("content")));

        let mut f = form();
        f.title = String::new();
        assert_eq!(f.validate(&categories()), Err(FormError::Required("title")));
    }

    #[test]
    fn test_unknown_category() {
        let mut f = form();
        f.category = "Food".to_string();
        assert_eq!(
            f.validate(&categories()),
            Err(FormError::UnknownCategory("Food".to_string()))
        );
    }

    #[test]
    fn test_draft_serializes_without_image() {
        let draft = form().validate(&categories()).unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("image").is_none());
        assert_eq!(json["slug"], "hello-world");
    }
}
