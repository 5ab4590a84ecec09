pub mod app;
pub mod errors;
pub mod handlers;
pub mod message;
pub mod models;
pub mod selection;
pub mod state;
pub mod ui;

pub use app::router;
pub use selection::Selection;
pub use state::AppState;
