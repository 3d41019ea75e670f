//! Reader comments attached to blog posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Listable;

/// A comment. Created by readers, only ever deleted from the admin side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    /// Id of the post the comment belongs to.
    pub blog_id: u64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listable for Comment {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "text" => Some(&self.text),
            "author" => Some(&self.author),
            "email" => self.email.as_deref(),
            _ => None,
        }
    }
}

/// Comments belonging to the post with id `blog_id`, in their original order.
///
/// Joined on the post id; titles are neither unique nor stable.
pub fn comments_for(comments: &[Comment], blog_id: u64) -> Vec<&Comment> {
    comments.iter().filter(|c| c.blog_id == blog_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: u64, blog_id: u64, text: &str) -> Comment {
        Comment {
            id,
            blog_id,
            text: text.to_string(),
            author: "reader".to_string(),
            email: None,
            created_at: None,
        }
    }

    #[test]
    fn test_comments_for_joins_by_id() {
        let comments = vec![
            comment(1, 10, "first"),
            comment(2, 11, "other post"),
            comment(3, 10, "second"),
        ];
        let ids: Vec<u64> = comments_for(&comments, 10).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_comments_for_unknown_post() {
        let comments = vec![comment(1, 10, "first")];
        assert!(comments_for(&comments, 99).is_empty());
    }
}
