pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use error::{Result, ServerError};
pub use routes::build_router;
pub use state::build_app_state;
