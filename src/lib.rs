pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod journal;
pub mod models;
pub mod preferences;
pub mod quotes;
pub mod remote;
pub mod sentiment;
pub mod stats;
pub mod storage;
pub mod streak;
pub mod ui;
pub mod voice;
pub mod state;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_data;
