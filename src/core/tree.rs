//! Static file-tree model and its render transform.
//!
//! A [`TreeNode`] forest is turned into a [`RenderedTree`] by a pre-order
//! descent that keeps sibling order exactly as declared. Every rendered node
//! carries its pre-order ordinal, which the explorer uses to key open/closed
//! flags without re-running the transform. Paths are descriptive only: a
//! name may itself contain `/`, so two nodes can share one.

use serde::Deserialize;

use crate::core::error::TreeError;

/// Icon hint used on every folder label row.
pub const FOLDER_ICON: &str = "bi-folder";

/// One entry of a static hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode {
    Folder { name: String, children: Vec<TreeNode> },
    /// `icon` is an opaque styling tag with no behavioral effect.
    File { name: String, icon: String },
}

impl TreeNode {
    pub fn folder(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self::Folder {
            name: name.into(),
            children,
        }
    }

    pub fn file(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self::File {
            name: name.into(),
            icon: icon.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } | Self::File { name, .. } => name,
        }
    }
}

// =============================================================================
// Rendered Output
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    File,
}

/// Label row of a rendered unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelRow {
    pub name: String,
    pub kind: NodeKind,
    pub icon: String,
}

/// Render-ready form of one [`TreeNode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedNode {
    /// Pre-order position in the forest, unique per rendering.
    pub id: usize,
    /// Slash-joined names from the root, e.g. `src/components`.
    pub path: String,
    /// Zero for root-level nodes.
    pub depth: usize,
    pub label: LabelRow,
    /// Nested block for folders (possibly empty), `None` for files.
    pub contents: Option<Vec<RenderedNode>>,
}

impl RenderedNode {
    pub fn is_folder(&self) -> bool {
        self.label.kind == NodeKind::Folder
    }
}

/// Rendered forest, root-level units in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedTree {
    pub roots: Vec<RenderedNode>,
}

impl RenderedTree {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Pre-order walk over every rendered unit.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.roots.iter().rev().collect(),
        }
    }
}

/// Iterator returned by [`RenderedTree::iter`].
pub struct PreOrder<'a> {
    stack: Vec<&'a RenderedNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a RenderedNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = &node.contents {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

// =============================================================================
// Transform
// =============================================================================

/// Render a forest into nested label rows and content blocks.
///
/// Pure and total: the same forest always yields an equal rendering, and an
/// empty forest yields an empty tree.
pub fn render_tree(forest: &[TreeNode]) -> RenderedTree {
    let mut next_id = 0;
    RenderedTree {
        roots: forest
            .iter()
            .map(|node| render_node(node, "", 0, &mut next_id))
            .collect(),
    }
}

fn render_node(node: &TreeNode, parent: &str, depth: usize, next_id: &mut usize) -> RenderedNode {
    let id = *next_id;
    *next_id += 1;

    let path = if parent.is_empty() {
        node.name().to_string()
    } else {
        format!("{}/{}", parent, node.name())
    };

    match node {
        TreeNode::Folder { name, children } => {
            let contents = children
                .iter()
                .map(|child| render_node(child, &path, depth + 1, next_id))
                .collect();
            RenderedNode {
                label: LabelRow {
                    name: name.clone(),
                    kind: NodeKind::Folder,
                    icon: FOLDER_ICON.to_string(),
                },
                id,
                path,
                depth,
                contents: Some(contents),
            }
        }
        TreeNode::File { name, icon } => RenderedNode {
            label: LabelRow {
                name: name.clone(),
                kind: NodeKind::File,
                icon: icon.clone(),
            },
            id,
            path,
            depth,
            contents: None,
        },
    }
}

// =============================================================================
// JSON Description
// =============================================================================

/// Node shape as written in a JSON tree description.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawNode {
    Folder {
        name: String,
        #[serde(default)]
        children: Vec<RawNode>,
    },
    File {
        name: String,
        #[serde(default)]
        icon: String,
    },
    #[serde(other)]
    Unknown,
}

impl RawNode {
    /// Nodes whose `type` is neither folder nor file are dropped.
    fn into_node(self) -> Option<TreeNode> {
        match self {
            Self::Folder { name, children } => Some(TreeNode::Folder {
                name,
                children: children.into_iter().filter_map(Self::into_node).collect(),
            }),
            Self::File { name, icon } => Some(TreeNode::File { name, icon }),
            Self::Unknown => None,
        }
    }
}

/// Decode a forest from a JSON array of tagged nodes.
pub fn parse_forest(json: &str) -> Result<Vec<TreeNode>, TreeError> {
    let raw: Vec<RawNode> = serde_json::from_str(json)?;
    Ok(raw.into_iter().filter_map(RawNode::into_node).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PROJECT_TREE;

    fn sample() -> Vec<TreeNode> {
        vec![
            TreeNode::folder(
                "src",
                vec![
                    TreeNode::file("main.rs", "code"),
                    TreeNode::folder("core", vec![TreeNode::file("mod.rs", "code")]),
                    TreeNode::file("lib.rs", "code"),
                ],
            ),
            TreeNode::file("README.md", "text"),
            TreeNode::folder("empty", vec![]),
        ]
    }

    #[test]
    fn test_empty_forest() {
        let tree = render_tree(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn test_preorder_visits_each_node_once_in_declared_order() {
        let tree = render_tree(&sample());
        let paths: Vec<&str> = tree.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "src",
                "src/main.rs",
                "src/core",
                "src/core/mod.rs",
                "src/lib.rs",
                "README.md",
                "empty",
            ]
        );
    }

    #[test]
    fn test_files_and_folders_interleave_unsorted() {
        let tree = render_tree(&sample());
        let src = &tree.roots[0];
        let names: Vec<&str> = src
            .contents
            .as_ref()
            .unwrap()
            .iter()
            .map(|n| n.label.name.as_str())
            .collect();
        assert_eq!(names, vec!["main.rs", "core", "lib.rs"]);
    }

    #[test]
    fn test_label_rows() {
        let tree = render_tree(&sample());
        let readme = &tree.roots[1];
        assert_eq!(readme.label.kind, NodeKind::File);
        assert_eq!(readme.label.icon, "text");
        assert!(readme.contents.is_none());

        let empty = &tree.roots[2];
        assert_eq!(empty.label.kind, NodeKind::Folder);
        assert_eq!(empty.label.icon, FOLDER_ICON);
        assert_eq!(empty.contents, Some(vec![]));
    }

    #[test]
    fn test_depth() {
        let tree = render_tree(&sample());
        let depths: Vec<usize> = tree.iter().map(|n| n.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 2, 1, 0, 0]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let forest = sample();
        assert_eq!(render_tree(&forest), render_tree(&forest));
    }

    fn folder_paths(tree: &RenderedTree) -> Vec<&str> {
        tree.iter()
            .filter(|node| node.is_folder())
            .map(|node| node.path.as_str())
            .collect()
    }

    #[test]
    fn test_ids_follow_preorder() {
        let tree = render_tree(&sample());
        let ids: Vec<usize> = tree.iter().map(|n| n.id).collect();
        assert_eq!(ids, (0..7).collect::<Vec<_>>());
        assert_eq!(folder_paths(&tree), vec!["src", "src/core", "empty"]);
    }

    #[test]
    fn test_slash_in_name_keeps_folder_keys_distinct() {
        let forest = vec![
            TreeNode::folder("a/b", vec![]),
            TreeNode::folder("a", vec![TreeNode::folder("b", vec![])]),
        ];
        let tree = render_tree(&forest);

        // paths collide, ids do not
        assert_eq!(folder_paths(&tree), vec!["a/b", "a", "a/b"]);
        let ids: Vec<usize> = tree.iter().filter(|n| n.is_folder()).map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_ne!(tree.roots[0].id, tree.roots[1].contents.as_ref().unwrap()[0].id);
    }

    #[test]
    fn test_parse_forest_drops_unknown_kinds() {
        let json = r#"[
            {"type": "folder", "name": "a", "children": [
                {"type": "symlink", "name": "ghost", "target": "/dev/null"},
                {"type": "file", "name": "b.txt", "icon": "bi-file-earmark-text"}
            ]},
            {"type": "device", "name": "tty0"},
            {"type": "file", "name": "c.txt"}
        ]"#;
        let forest = parse_forest(json).unwrap();
        assert_eq!(
            forest,
            vec![
                TreeNode::folder("a", vec![TreeNode::file("b.txt", "bi-file-earmark-text")]),
                TreeNode::file("c.txt", ""),
            ]
        );
    }

    #[test]
    fn test_parse_forest_rejects_invalid_json() {
        assert!(parse_forest("{not json").is_err());
        assert!(parse_forest(r#"{"type": "file"}"#).is_err());
    }

    #[test]
    fn test_bundled_project_tree() {
        let forest = parse_forest(PROJECT_TREE).unwrap();
        let roots: Vec<&str> = forest.iter().map(TreeNode::name).collect();
        assert_eq!(roots, vec!["src", "public", "package.json", "README.md"]);

        let tree = render_tree(&forest);
        assert_eq!(tree.iter().count(), 19);
        assert_eq!(
            folder_paths(&tree),
            vec!["src", "src/components", "src/pages", "public", "public/styles"]
        );
    }
}
