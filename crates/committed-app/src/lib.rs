pub mod application;
pub mod presentation;

pub use presentation::bootstrap::{build_app_state, build_app_state_with_database};
pub use presentation::routes::build_router;
pub use presentation::server::start_server;
pub use presentation::state::AppState;
