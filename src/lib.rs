//! Client-side logic for blog administration screens
//!
//! This library filters and pages already-fetched records, scores candidate
//! passwords, validates editor and password forms, and persists the
//! signed-in session.
//!
//! # Features
//!
//! - `async` (default): Enables debounced password scoring with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `ADMIN_SESSION_PATH`: Session file location
//!   (default: `./.admin-session.json`)
//! - `PWD_MIN_SCORE`: Minimum password score for submission (default: 3)
//! - `ADMIN_PAGE_SIZE`: Rows per page on list screens (default: 10)
//!
//! # Example
//!
//! ```rust
//! use blog_admin_core::{
//!     score_password, BlogPost, CheckSet, FilterCriteria, ListViewEngine, Page,
//!     StrengthLabel, SubmissionPolicy,
//! };
//! use secrecy::SecretString;
//!
//! let posts = vec![
//!     BlogPost::new(1, "Hello World", "ana").with_category("Tech"),
//!     BlogPost::new(2, "Packing list", "bo").with_category("Travel"),
//! ];
//! let engine = ListViewEngine::blog();
//! let page = Page::first(10).unwrap();
//! let view = engine.view(&posts, &FilterCriteria::new().search("hello"), page);
//! assert_eq!(view.total_matching, 1);
//!
//! let password = SecretString::new("Abcdef1".to_string().into());
//! let result = score_password(&password, &CheckSet::default());
//! assert_eq!(result.label(), StrengthLabel::Good);
//! assert!(SubmissionPolicy::default().is_submittable(&result));
//! ```

pub mod forms;
pub mod listing;
pub mod model;
pub mod password;
pub mod session;

// Public API
pub use forms::{BlogForm, BlogPostDraft, FormError, PasswordChangeForm, PasswordResetForm};
pub use listing::{FilterCriteria, ListView, ListViewEngine, ListViewState, Page, PageError};
pub use model::{
    comments_for, distinct_authors, distinct_values, slugify, BlogPost, Categories, Comment,
    Listable,
};
pub use password::{
    score_password, Check, CheckSet, ConfigError, PasswordStrengthResult, Severity,
    StrengthLabel, SubmissionPolicy,
};
pub use session::{
    FileSessionStore, MemorySessionStore, Session, SessionError, SessionStore, SessionUser,
};

#[cfg(feature = "async")]
pub use password::score_password_tx;
