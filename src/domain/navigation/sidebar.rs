//! Sidebar state controller
//!
//! Single owner of the collapse flag, selected menu key and open group set.
//! Every mutation happens through one of the event methods below, reacting to
//! router path changes and user clicks; the render layer only reads.

use std::collections::BTreeSet;

use super::classifier::classify;
use super::menu::MenuTree;

/// Mutable view-state of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
    pub selected_key: String,
    pub open_groups: BTreeSet<String>,
}

/// Navigation intent emitted on a menu click. The router collaborator turns
/// it into an actual path change, which then flows back in as `path_changed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: String,
}

/// Owns [`SidebarState`] and applies the event transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarController {
    tree: &'static MenuTree,
    state: SidebarState,
}

impl SidebarController {
    /// Start expanded, with the selection classified from the initial path
    /// and its enclosing group open.
    pub fn new(tree: &'static MenuTree, initial_path: &str) -> Self {
        let selected_key = classify(initial_path).to_string();
        let open_groups = open_groups_for(tree, &selected_key);
        Self {
            tree,
            state: SidebarState {
                collapsed: false,
                selected_key,
                open_groups,
            },
        }
    }

    pub fn tree(&self) -> &'static MenuTree {
        self.tree
    }

    pub fn state(&self) -> &SidebarState {
        &self.state
    }

    pub fn collapsed(&self) -> bool {
        self.state.collapsed
    }

    pub fn selected_key(&self) -> &str {
        &self.state.selected_key
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.state.selected_key == key
    }

    pub fn is_group_open(&self, key: &str) -> bool {
        self.state.open_groups.contains(key)
    }

    /// The router confirmed a new path: reclassify the selection and, unless
    /// collapsed, re-derive which group is open. A collapsed sidebar never
    /// auto-expands.
    pub fn path_changed(&mut self, path: &str) {
        let selected_key = classify(path).to_string();
        tracing::debug!(path, key = %selected_key, "sidebar selection updated");
        self.state.selected_key = selected_key;
        if !self.state.collapsed {
            self.state.open_groups = open_groups_for(self.tree, &self.state.selected_key);
        }
    }

    /// User toggled the collapse control. Collapsing hides group contents so
    /// the open set empties; expanding restores the natural expansion for the
    /// current selection.
    pub fn toggle_collapse(&mut self) {
        self.state.collapsed = !self.state.collapsed;
        if self.state.collapsed {
            self.state.open_groups.clear();
        } else {
            self.state.open_groups = open_groups_for(self.tree, &self.state.selected_key);
        }
        tracing::debug!(collapsed = self.state.collapsed, "sidebar collapse toggled");
    }

    /// User clicked a menu entry. Emits the navigation intent and nothing
    /// else; the selection only moves once the router reports the new path.
    /// Clickable keys are guaranteed to exist by menu tree validation.
    pub fn menu_clicked(&self, key: &str) -> NavigationRequest {
        debug_assert!(
            self.tree.contains(key),
            "menu click for key absent from the menu tree: {key}"
        );
        tracing::debug!(key, "menu navigation requested");
        NavigationRequest {
            target: key.to_string(),
        }
    }
}

/// Derive the open group set for a selection: the single group containing
/// the key, or empty for top-level leaves and fallback keys.
fn open_groups_for(tree: &MenuTree, selected_key: &str) -> BTreeSet<String> {
    tree.group_of(selected_key)
        .map(String::from)
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigation::menu::menu_tree;

    fn controller(initial_path: &str) -> SidebarController {
        SidebarController::new(menu_tree(), initial_path)
    }

    #[test]
    fn test_initial_state_from_path() {
        let sidebar = controller("/app/7/detail");
        assert!(!sidebar.collapsed());
        assert_eq!(sidebar.selected_key(), "/app");
        assert!(sidebar.is_group_open("studio"));
        assert_eq!(sidebar.state().open_groups.len(), 1);
    }

    #[test]
    fn test_root_path_selects_default_surface() {
        let sidebar = controller("/");
        assert_eq!(sidebar.selected_key(), "/build");
        assert!(sidebar.is_group_open("studio"));
    }

    #[test]
    fn test_path_change_moves_selection_and_open_group() {
        let mut sidebar = controller("/build");
        sidebar.path_changed("/admin/evaluation/experiment/3");
        assert_eq!(sidebar.selected_key(), "/admin/evaluation/experiment");
        assert!(sidebar.is_group_open("evaluation"));
        assert!(!sidebar.is_group_open("studio"));
    }

    #[test]
    fn test_path_change_while_collapsed_never_expands() {
        let mut sidebar = controller("/build");
        sidebar.toggle_collapse();
        sidebar.path_changed("/admin/tracing");
        assert_eq!(sidebar.selected_key(), "/admin/tracing");
        assert!(sidebar.state().open_groups.is_empty());
    }

    #[test]
    fn test_collapse_clears_and_expand_restores_open_groups() {
        let mut sidebar = controller("/app");
        let before = sidebar.state().open_groups.clone();
        assert!(sidebar.is_group_open("studio"));

        sidebar.toggle_collapse();
        assert!(sidebar.collapsed());
        assert!(sidebar.state().open_groups.is_empty());

        sidebar.toggle_collapse();
        assert!(!sidebar.collapsed());
        assert_eq!(sidebar.state().open_groups, before);
    }

    #[test]
    fn test_expand_restores_group_for_selection_made_while_collapsed() {
        let mut sidebar = controller("/app");
        sidebar.toggle_collapse();
        sidebar.path_changed("/admin/prompts");
        sidebar.toggle_collapse();
        assert!(sidebar.is_group_open("prompt"));
        assert!(!sidebar.is_group_open("studio"));
    }

    #[test]
    fn test_top_level_leaf_opens_no_group() {
        let mut sidebar = controller("/setting/model-service");
        assert_eq!(sidebar.selected_key(), "/setting");
        assert!(sidebar.state().open_groups.is_empty());

        sidebar.path_changed("/some/unlisted/page");
        assert_eq!(sidebar.selected_key(), "/some/unlisted/page");
        assert!(sidebar.state().open_groups.is_empty());
    }

    #[test]
    fn test_menu_click_emits_intent_without_mutation() {
        let sidebar = controller("/app");
        let before = sidebar.state().clone();

        let request = sidebar.menu_clicked("/mcp");
        assert_eq!(request.target, "/mcp");
        // Selection moves only on the confirming path change.
        assert_eq!(sidebar.state(), &before);
    }

    #[test]
    fn test_click_then_confirmed_path_change_moves_selection() {
        let mut sidebar = controller("/app");
        let request = sidebar.menu_clicked("/mcp");
        sidebar.path_changed(&request.target);
        assert_eq!(sidebar.selected_key(), "/mcp");
        assert!(sidebar.is_group_open("studio"));
    }
}
