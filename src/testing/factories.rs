//! Test factories for creating test data with sensible defaults.
//!
//! Use `*_with()` variants to customize specific fields.
//!
//! # Example
//! ```ignore
//! use crate::testing::factories::{thread, thread_with};
//!
//! let t = thread();
//! let t = thread_with(|t| {
//!     t.path = "src/lib.rs".to_string();
//!     t.line = 42;
//! });
//! ```

use crate::threads::models::{Comment, CommentsNode, ReviewThread};

/// Create a Comment with the given body.
pub fn comment(body: &str) -> Comment {
    Comment {
        body: body.to_string(),
    }
}

/// Create a ReviewThread with a single comment.
pub fn thread() -> ReviewThread {
    ReviewThread {
        id: "PRRT_test".to_string(),
        path: "src/main.rs".to_string(),
        line: 1,
        comments: CommentsNode {
            nodes: vec![comment("Test comment")],
        },
    }
}

/// Create a ReviewThread with customizations applied via closure.
pub fn thread_with(f: impl FnOnce(&mut ReviewThread)) -> ReviewThread {
    let mut t = thread();
    f(&mut t);
    t
}
