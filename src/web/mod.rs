pub mod handlers;
pub mod helpers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use state::AppState;
