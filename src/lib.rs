pub mod app;
pub mod chart;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod soda;
pub mod state;
pub mod ui;

pub use app::router;
pub use soda::{resolve_base_url, SodaClient};
pub use state::AppState;
