use crate::api::{Comment, CommentId};

/// The ordered sequence of top-level comment trees, as last returned by the
/// server. The server is the single source of truth: every mutation answers
/// with the full forest, and `replace_with` swaps the whole thing out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Forest {
    pub roots: Vec<Comment>,
}

impl Forest {
    pub fn stub() -> Forest {
        Forest { roots: Vec::new() }
    }

    /// Discards the current in-memory tree in favor of what the server sent
    /// back. No merging: stale nodes, counts and orderings all go away.
    pub fn replace_with(&mut self, roots: Vec<Comment>) {
        self.roots = roots;
    }

    pub fn find(&self, id: CommentId) -> Option<&Comment> {
        find_in(&self.roots, id)
    }

    pub fn find_mut(&mut self, id: CommentId) -> Option<&mut Comment> {
        find_in_mut(&mut self.roots, id)
    }

    /// Total number of comments, replies included.
    pub fn node_count(&self) -> usize {
        self.preorder().count()
    }

    /// Walks the forest in display order: depth-first, each node followed
    /// immediately by its replies, sibling order preserved at every level.
    pub fn preorder(&self) -> Preorder<'_> {
        let mut stack: Vec<&Comment> = self.roots.iter().collect();
        stack.reverse();
        Preorder { stack }
    }
}

fn find_in(comments: &[Comment], id: CommentId) -> Option<&Comment> {
    for c in comments {
        if c.id == id {
            return Some(c);
        }
        if let Some(res) = find_in(&c.replies, id) {
            return Some(res);
        }
    }
    None
}

fn find_in_mut(comments: &mut Vec<Comment>, id: CommentId) -> Option<&mut Comment> {
    for c in comments.iter_mut() {
        if c.id == id {
            return Some(c);
        }
        if let Some(res) = find_in_mut(&mut c.replies, id) {
            return Some(res);
        }
    }
    None
}

pub struct Preorder<'a> {
    stack: Vec<&'a Comment>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Comment;

    fn next(&mut self) -> Option<&'a Comment> {
        let next = self.stack.pop()?;
        self.stack.extend(next.replies.iter().rev());
        Some(next)
    }
}
