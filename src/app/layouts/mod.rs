pub mod header;
pub mod pure;
pub mod side_menu;

pub use header::Header;
pub use pure::PureLayout;
pub use side_menu::SideMenu;
