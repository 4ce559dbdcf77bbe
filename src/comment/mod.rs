//! Session-local comment thread for the task detail panel.
//!
//! The thread is a local echo list: messages live only in memory for the
//! current session, are never persisted, and carry no cross-user
//! semantics. It shares no state with the task core; the presentation
//! layer mounts it alongside the edit view and feeds it directly.

/// A single posted comment, keyed by posting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    ordinal: usize,
    body: String,
}

impl Comment {
    /// Returns the zero-based posting ordinal.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Returns the comment text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Append-only comment thread.
#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    comments: Vec<Comment>,
}

impl CommentThread {
    /// Creates an empty thread.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            comments: Vec::new(),
        }
    }

    /// Posts a comment, trimming surrounding whitespace.
    ///
    /// Blank input is dropped without being appended; returns whether the
    /// comment was accepted.
    pub fn post(&mut self, body: impl Into<String>) -> bool {
        let text = body.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.comments.push(Comment {
            ordinal: self.comments.len(),
            body: trimmed.to_owned(),
        });
        true
    }

    /// Returns the comments in posting order.
    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter()
    }

    /// Returns the number of posted comments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Returns whether the thread has no comments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
