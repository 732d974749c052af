//! Static menu tree definition and validation
//!
//! The sidebar menu is a two-level forest: top-level groups with leaf
//! entries, plus the standalone settings entry. It is built once, validated,
//! and shared read-only for the lifetime of the shell.

use once_cell::sync::Lazy;
use thiserror::Error;

use super::classifier::canonical_keys;

/// A single menu entry. Group nodes carry children, leaf nodes are
/// navigation targets whose `key` doubles as the destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn leaf(key: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self {
            key,
            label,
            icon,
            children: Vec::new(),
        }
    }

    pub fn group(
        key: &'static str,
        label: &'static str,
        icon: &'static str,
        children: Vec<MenuNode>,
    ) -> Self {
        Self {
            key,
            label,
            icon,
            children,
        }
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("duplicate menu key: {0}")]
    DuplicateKey(String),

    #[error("menu nesting deeper than two levels under group: {0}")]
    TooDeep(String),

    #[error("classifier target has no menu entry: {0}")]
    MissingTarget(String),
}

/// Validated, immutable menu forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
}

impl MenuTree {
    /// Build a tree, running the startup integrity checks: unique keys,
    /// two-level depth, and a menu entry for every classifier target.
    pub fn new(nodes: Vec<MenuNode>) -> Result<Self, MenuError> {
        let mut seen = std::collections::BTreeSet::new();
        for node in &nodes {
            if !seen.insert(node.key) {
                return Err(MenuError::DuplicateKey(node.key.to_string()));
            }
            for child in &node.children {
                if !child.children.is_empty() {
                    return Err(MenuError::TooDeep(node.key.to_string()));
                }
                if !seen.insert(child.key) {
                    return Err(MenuError::DuplicateKey(child.key.to_string()));
                }
            }
        }

        let tree = Self { nodes };
        for key in canonical_keys() {
            if tree.find(key).is_none() {
                return Err(MenuError::MissingTarget(key.to_string()));
            }
        }
        Ok(tree)
    }

    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    /// Look a node up by key, at either level.
    pub fn find(&self, key: &str) -> Option<&MenuNode> {
        for node in &self.nodes {
            if node.key == key {
                return Some(node);
            }
            if let Some(child) = node.children.iter().find(|child| child.key == key) {
                return Some(child);
            }
        }
        None
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Key of the top-level group holding `key`, if it sits inside one.
    /// Top-level leaves and unknown keys have no enclosing group.
    pub fn group_of(&self, key: &str) -> Option<&'static str> {
        self.nodes
            .iter()
            .find(|node| node.children.iter().any(|child| child.key == key))
            .map(|node| node.key)
    }
}

static MENU: Lazy<MenuTree> = Lazy::new(|| {
    let nodes = vec![
        MenuNode::group(
            "studio",
            "Studio",
            "🧩",
            vec![
                MenuNode::leaf("/build", "App Builder", "🏗️"),
                MenuNode::leaf("/app", "Applications", "📦"),
                MenuNode::leaf("/mcp", "MCP", "🔌"),
                MenuNode::leaf("/component", "Components", "🧰"),
                MenuNode::leaf("/knowledge", "Knowledge Base", "📚"),
            ],
        ),
        MenuNode::group(
            "prompt",
            "Prompt Engineering",
            "💡",
            vec![
                MenuNode::leaf("/admin/prompts", "Prompts", "📋"),
                MenuNode::leaf("/admin/playground", "Playground", "▶️"),
            ],
        ),
        MenuNode::group(
            "evaluation",
            "Evaluation",
            "🧪",
            vec![
                MenuNode::leaf("/admin/evaluation/gather", "Datasets", "🗂️"),
                MenuNode::leaf("/admin/evaluation/evaluator", "Evaluators", "📊"),
                MenuNode::leaf("/admin/evaluation/experiment", "Experiments", "⚗️"),
            ],
        ),
        MenuNode::group(
            "observability",
            "Observability",
            "📈",
            vec![MenuNode::leaf("/admin/tracing", "Tracing", "🛰️")],
        ),
        MenuNode::group(
            "developer",
            "Developer",
            "🛠️",
            vec![
                MenuNode::leaf("/debug", "Debug", "🐞"),
                MenuNode::leaf("/dify", "Dify Import", "📥"),
                MenuNode::leaf("/agent-schema", "Agent Schema", "📐"),
            ],
        ),
        MenuNode::leaf("/setting", "Settings", "⚙️"),
    ];

    match MenuTree::new(nodes) {
        Ok(tree) => tree,
        // Startup integrity check, a broken menu definition must not boot.
        Err(err) => panic!("menu tree validation failed: {err}"),
    }
});

/// The console's validated menu tree.
pub fn menu_tree() -> &'static MenuTree {
    &MENU
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tree_passes_validation() {
        let tree = menu_tree();
        assert_eq!(tree.nodes().len(), 6);
    }

    #[test]
    fn test_every_classifier_target_exists() {
        let tree = menu_tree();
        for key in canonical_keys() {
            assert!(tree.contains(key), "missing menu entry for {key}");
        }
    }

    #[test]
    fn test_group_lookup() {
        let tree = menu_tree();
        assert_eq!(tree.group_of("/build"), Some("studio"));
        assert_eq!(tree.group_of("/admin/playground"), Some("prompt"));
        assert_eq!(tree.group_of("/admin/tracing"), Some("observability"));
        assert_eq!(tree.group_of("/dify"), Some("developer"));
        // Settings is a top-level leaf, it sits in no group.
        assert_eq!(tree.group_of("/setting"), None);
        assert_eq!(tree.group_of("/not/a/key"), None);
    }

    #[test]
    fn test_find_at_both_levels() {
        let tree = menu_tree();
        assert!(tree.find("studio").is_some_and(MenuNode::is_group));
        assert!(tree.find("/knowledge").is_some_and(|n| !n.is_group()));
        assert!(tree.find("/nope").is_none());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let nodes = vec![
            MenuNode::leaf("/setting", "Settings", "⚙️"),
            MenuNode::leaf("/setting", "Settings Again", "⚙️"),
        ];
        assert!(matches!(
            MenuTree::new(nodes),
            Err(MenuError::DuplicateKey(_))
        ));
    }

    #[test]
    fn test_missing_classifier_target_rejected() {
        let nodes = vec![MenuNode::leaf("/build", "App Builder", "🏗️")];
        assert!(matches!(
            MenuTree::new(nodes),
            Err(MenuError::MissingTarget(_))
        ));
    }

    #[test]
    fn test_three_level_nesting_rejected() {
        let nested = MenuNode::group(
            "outer",
            "Outer",
            "🧩",
            vec![MenuNode::group(
                "inner",
                "Inner",
                "🧩",
                vec![MenuNode::leaf("/leaf", "Leaf", "🧩")],
            )],
        );
        assert!(matches!(
            MenuTree::new(vec![nested]),
            Err(MenuError::TooDeep(_))
        ));
    }
}
