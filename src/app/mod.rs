pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the console shell entry point
pub use pages::routes::App;
