//! Records shown on the administration screens.
//!
//! Every record exposes its text fields by name through [`Listable`], so the
//! list view engine can filter blog posts, comments and raw JSON objects the
//! same way.

mod blog;
mod comment;
mod slug;

use std::collections::BTreeSet;

use serde_json::{Map, Value};

pub use blog::{BlogPost, Categories};
pub use comment::{comments_for, Comment};
pub use slug::{is_valid_slug, slugify};

/// A record whose text fields can be looked up by name.
///
/// Missing fields return `None`; callers treat them as empty text.
pub trait Listable {
    fn field(&self, name: &str) -> Option<&str>;
}

impl Listable for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

impl<T: Listable + ?Sized> Listable for &T {
    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }
}

/// Returns the unique non-empty values of `field` across `records`, sorted.
pub fn distinct_values<R: Listable>(records: &[R], field: &str) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|r| r.field(field))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Author vocabulary for the author filter selector.
pub fn distinct_authors<R: Listable>(records: &[R]) -> BTreeSet<String> {
    distinct_values(records, "author")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_json_map_string_fields() {
        let rec = object(json!({ "title": "Hello", "views": 12 }));
        assert_eq!(rec.field("title"), Some("Hello"));
        // non-string values are treated as missing
        assert_eq!(rec.field("views"), None);
        assert_eq!(rec.field("author"), None);
    }

    #[test]
    fn test_distinct_authors() {
        let records = vec![
            object(json!({ "author": "ana" })),
            object(json!({ "author": "bo" })),
            object(json!({ "author": "ana" })),
            object(json!({ "title": "no author" })),
            object(json!({ "author": "" })),
        ];
        let authors: Vec<_> = distinct_authors(&records).into_iter().collect();
        assert_eq!(authors, vec!["ana".to_string(), "bo".to_string()]);
    }

    #[test]
    fn test_distinct_authors_empty() {
        let records: Vec<Map<String, Value>> = Vec::new();
        assert!(distinct_authors(&records).is_empty());
    }
}
