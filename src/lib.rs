pub mod app;
pub mod config;
pub mod day;
pub mod editor;
pub mod errors;
pub mod handlers;
pub mod modal;
pub mod models;
pub mod program;
pub mod progress;
pub mod session;
pub mod state;
pub mod storage;
pub mod timer;
pub mod tracking;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use session::Session;
pub use state::AppState;
pub use storage::{load_store, persist_store};
