use serde::{Deserialize, Serialize};

/// One crawled address and the pages first discovered from it.
///
/// Children are owned by their parent, so the crawl result is always a tree
/// even when the pages themselves link in cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    pub url: String,
    pub children: Vec<PageNode>,
}

impl PageNode {
    pub fn leaf(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            children: Vec::new(),
        }
    }

    /// Appends a fully expanded child, keeping discovery order.
    pub fn attach(&mut self, child: PageNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(PageNode::node_count).sum::<usize>()
    }

    /// Edge count of the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Addresses in depth-first pre-order.
    pub fn urls(&self) -> Vec<&str> {
        let mut urls = Vec::with_capacity(self.node_count());
        self.walk(0, &mut |node, _| urls.push(node.url.as_str()));
        urls
    }

    /// Visits every node depth-first, parent before children, with its depth
    /// below this node.
    pub fn walk<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a PageNode, usize)) {
        visit(self, depth);
        for child in &self.children {
            child.walk(depth + 1, visit);
        }
    }
}
