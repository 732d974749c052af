// Navigation domain: path classification and sidebar state
// Pure Rust, no framework dependencies

pub mod classifier;
pub mod menu;
pub mod sidebar;

pub use classifier::{classify, ClassificationRule, Pattern, RULES};
pub use menu::{menu_tree, MenuError, MenuNode, MenuTree};
pub use sidebar::{NavigationRequest, SidebarController, SidebarState};
