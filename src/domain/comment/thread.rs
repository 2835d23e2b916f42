//! Reply tree construction.
//!
//! Comments are held in an arena and linked through index tables, so a
//! thread can be patched in place when a new reply arrives instead of being
//! rebuilt from nested copies.

use super::entity::{Comment, CommentNode, ModerationStatus};
use serde::Serialize;
use std::collections::HashMap;

pub const HIDDEN_BY_ADMIN_NOTICE: &str = "Comment deleted by Admin";
pub const HIDDEN_BY_MODERATION_NOTICE: &str = "Comment hidden by Auto Moderation";

/// Deepest level at which the public view still offers a reply action.
pub const MAX_REPLY_DEPTH: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    nodes: Vec<Comment>,
    index: HashMap<i64, usize>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
}

impl CommentThread {
    /// Builds the thread from flat rows.
    ///
    /// Roots keep the input order. Replies under each parent are ordered by
    /// `created_at` ascending, ties keeping input order. A reply whose
    /// parent is absent is promoted to the root list, and so is any reply
    /// that can never reach a root because its parent chain loops.
    pub fn build(comments: Vec<Comment>) -> Self {
        let mut thread = Self {
            index: HashMap::with_capacity(comments.len()),
            children: vec![Vec::new(); comments.len()],
            nodes: comments,
            roots: Vec::new(),
        };

        for (idx, comment) in thread.nodes.iter().enumerate() {
            thread.index.entry(comment.id).or_insert(idx);
        }

        let mut replies = Vec::new();
        for (idx, comment) in thread.nodes.iter().enumerate() {
            match comment.parent_id {
                None => thread.roots.push(idx),
                Some(_) => replies.push(idx),
            }
        }

        let nodes = &thread.nodes;
        replies.sort_by_key(|&idx| nodes[idx].created_at);

        for idx in replies {
            match thread.parent_index(idx) {
                Some(parent) => thread.children[parent].push(idx),
                None => thread.roots.push(idx),
            }
        }

        thread.promote_unreachable();
        thread
    }

    /// Adds a freshly stored comment without rebuilding.
    ///
    /// New roots go first, matching newest-first root order. New replies go
    /// last under their parent, matching oldest-first reply order.
    pub fn insert(&mut self, comment: Comment) {
        let idx = self.nodes.len();
        self.index.entry(comment.id).or_insert(idx);
        self.nodes.push(comment);
        self.children.push(Vec::new());

        match self.parent_index(idx) {
            Some(parent) => self.children[parent].push(idx),
            None if self.nodes[idx].parent_id.is_none() => self.roots.insert(0, idx),
            None => self.roots.push(idx),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Comment> {
        self.index.get(&id).map(|&idx| &self.nodes[idx])
    }

    pub fn roots(&self) -> impl Iterator<Item = &Comment> {
        self.roots.iter().map(|&idx| &self.nodes[idx])
    }

    pub fn replies(&self, id: i64) -> impl Iterator<Item = &Comment> {
        self.index
            .get(&id)
            .map(|&idx| self.children[idx].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.nodes[idx])
    }

    pub fn into_nodes(self) -> Vec<CommentNode> {
        let order = self.preorder();
        let mut slots: Vec<Option<Comment>> = self.nodes.into_iter().map(Some).collect();
        let mut built: Vec<Option<CommentNode>> = (0..slots.len()).map(|_| None).collect();

        // Reverse pre-order visits every child before its parent.
        for &(idx, _) in order.iter().rev() {
            let Some(comment) = slots[idx].take() else {
                continue;
            };
            let children = self.children[idx]
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            built[idx] = Some(CommentNode { comment, children });
        }

        self.roots
            .iter()
            .filter_map(|&idx| built[idx].take())
            .collect()
    }

    /// Public read view with suppressed messages replaced by a notice.
    pub fn public_view(&self) -> Vec<PublicComment> {
        let order = self.preorder();
        let mut built: Vec<Option<PublicComment>> = (0..self.nodes.len()).map(|_| None).collect();

        for &(idx, depth) in order.iter().rev() {
            let children = self.children[idx]
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            built[idx] = Some(self.public_node(idx, depth, children));
        }

        self.roots
            .iter()
            .filter_map(|&idx| built[idx].take())
            .collect()
    }

    /// Every reachable node once, parents before children, with its depth.
    /// Iterative so arbitrarily deep chains cannot exhaust the stack.
    fn preorder(&self) -> Vec<(usize, usize)> {
        let mut visited = vec![false; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, usize)> = self.roots.iter().rev().map(|&idx| (idx, 0)).collect();

        while let Some((idx, depth)) = stack.pop() {
            if std::mem::replace(&mut visited[idx], true) {
                continue;
            }
            order.push((idx, depth));
            stack.extend(self.children[idx].iter().rev().map(|&child| (child, depth + 1)));
        }
        order
    }

    fn parent_index(&self, idx: usize) -> Option<usize> {
        let parent_id = self.nodes[idx].parent_id?;
        self.index
            .get(&parent_id)
            .copied()
            .filter(|&parent| parent != idx)
    }

    fn promote_unreachable(&mut self) {
        let mut reachable = vec![false; self.nodes.len()];
        let mut stack: Vec<usize> = self.roots.clone();
        Self::mark(&mut reachable, &mut stack, &self.children);

        for idx in 0..self.nodes.len() {
            if reachable[idx] {
                continue;
            }
            if let Some(parent) = self.parent_index(idx) {
                self.children[parent].retain(|&child| child != idx);
            }
            self.roots.push(idx);
            stack.push(idx);
            Self::mark(&mut reachable, &mut stack, &self.children);
        }
    }

    fn mark(reachable: &mut [bool], stack: &mut Vec<usize>, children: &[Vec<usize>]) {
        while let Some(idx) = stack.pop() {
            if reachable[idx] {
                continue;
            }
            reachable[idx] = true;
            stack.extend(children[idx].iter().copied());
        }
    }

    fn public_node(&self, idx: usize, depth: usize, children: Vec<PublicComment>) -> PublicComment {
        let comment = &self.nodes[idx];
        let notice = if comment.hide_publicity {
            Some(HIDDEN_BY_ADMIN_NOTICE)
        } else if comment.moderation_status == ModerationStatus::Dangerous {
            Some(HIDDEN_BY_MODERATION_NOTICE)
        } else {
            None
        };

        PublicComment {
            id: comment.id,
            alias: comment.alias.clone(),
            message: match notice {
                Some(_) => None,
                None => Some(comment.message.clone()),
            },
            notice,
            parent_id: comment.parent_id,
            created_at: comment.created_at,
            moderation_status: comment.moderation_status,
            depth,
            can_reply: notice.is_none() && depth < MAX_REPLY_DEPTH,
            children,
        }
    }
}

/// Flat rows to reply tree. See [`CommentThread::build`] for ordering.
pub fn build_tree(comments: Vec<Comment>) -> Vec<CommentNode> {
    CommentThread::build(comments).into_nodes()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicComment {
    pub id: i64,
    pub alias: String,
    pub message: Option<String>,
    pub notice: Option<&'static str>,
    pub parent_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub moderation_status: ModerationStatus,
    pub depth: usize,
    pub can_reply: bool,
    pub children: Vec<PublicComment>,
}
