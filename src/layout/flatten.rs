use crate::model::{ExtensionNode, RecordNode, Usage};

/// The element a flattened row was produced from.
#[derive(Debug, Clone, Copy)]
pub enum RowSource<'a> {
    Node(&'a RecordNode),
    Extension(&'a ExtensionNode),
}

impl<'a> RowSource<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            RowSource::Node(node) => &node.name,
            RowSource::Extension(ext) => &ext.name,
        }
    }

    pub fn flags(&self) -> &'a [String] {
        match self {
            RowSource::Node(node) => &node.flags,
            RowSource::Extension(_) => &[],
        }
    }

    pub fn cardinality(&self) -> &'a str {
        match self {
            RowSource::Node(node) => &node.cardinality,
            RowSource::Extension(ext) => &ext.cardinality,
        }
    }

    pub fn type_name(&self) -> &'a str {
        match self {
            RowSource::Node(node) => &node.type_name,
            RowSource::Extension(ext) => &ext.type_name,
        }
    }

    pub fn type_ref(&self) -> Option<&'a str> {
        match self {
            RowSource::Node(node) => node.type_ref.as_deref().filter(|url| !url.is_empty()),
            RowSource::Extension(_) => None,
        }
    }

    pub fn description(&self) -> &'a str {
        match self {
            RowSource::Node(node) => &node.description,
            RowSource::Extension(ext) => &ext.description,
        }
    }

    pub fn usage(&self) -> Usage {
        match self {
            RowSource::Node(node) => node.usage,
            RowSource::Extension(_) => Usage::Used,
        }
    }

    pub fn notes(&self) -> &'a str {
        match self {
            RowSource::Node(node) => &node.notes,
            RowSource::Extension(_) => "",
        }
    }

    pub fn has_children(&self) -> bool {
        match self {
            RowSource::Node(node) => node.has_children(),
            RowSource::Extension(_) => false,
        }
    }
}

/// One entry of the pre-order traversal.
///
/// `ancestors[i]` records whether the ancestor at depth `i + 1` was the last
/// entry at its level; a `false` keeps that ancestor's vertical line running
/// through this row.
#[derive(Debug, Clone)]
pub struct FlatRow<'a> {
    pub source: RowSource<'a>,
    pub depth: usize,
    pub is_last: bool,
    pub ancestors: Vec<bool>,
    pub path: String,
}

/// Linearizes the tree depth-first: each node, then its children, then its
/// extensions as leaf rows one level deeper. A node that owns extensions is
/// never the last entry at its level; its last extension inherits the node's
/// own sibling position instead.
///
/// Uses an explicit stack, so deep trees cannot overflow the call stack.
pub fn flatten(root: &RecordNode) -> Vec<FlatRow<'_>> {
    let mut rows = Vec::with_capacity(root.row_count());
    // Each entry carries whether the row is the last among its sibling nodes,
    // which is what the row's own extensions inherit.
    let mut stack = vec![(
        FlatRow {
            source: RowSource::Node(root),
            depth: 0,
            is_last: !root.has_children() && root.extensions.is_empty(),
            ancestors: Vec::new(),
            path: root.name.clone(),
        },
        true,
    )];

    while let Some((row, sibling_last)) = stack.pop() {
        if let RowSource::Node(node) = row.source {
            let child_ancestors = if row.depth == 0 {
                Vec::new()
            } else {
                let mut extended = row.ancestors.clone();
                extended.push(row.is_last);
                extended
            };
            let extension_ancestors = if row.depth == 0 {
                vec![!node.has_children()]
            } else {
                child_ancestors.clone()
            };

            let extension_count = node.extensions.len();
            for (idx, ext) in node.extensions.iter().enumerate().rev() {
                let is_last = idx + 1 == extension_count && sibling_last;
                stack.push((
                    FlatRow {
                        source: RowSource::Extension(ext),
                        depth: row.depth + 1,
                        is_last,
                        ancestors: extension_ancestors.clone(),
                        path: format!("{}.{}", row.path, ext.name),
                    },
                    is_last,
                ));
            }

            let child_count = node.elements.len();
            for (idx, child) in node.elements.iter().enumerate().rev() {
                let child_sibling_last = idx + 1 == child_count;
                stack.push((
                    FlatRow {
                        source: RowSource::Node(child),
                        depth: row.depth + 1,
                        is_last: child_sibling_last && child.extensions.is_empty(),
                        ancestors: child_ancestors.clone(),
                        path: format!("{}.{}", row.path, child.name),
                    },
                    child_sibling_last,
                ));
            }
        }
        rows.push(row);
    }

    rows
}
