pub mod router;
pub mod types;
pub mod handlers {
    pub mod codecs;
    pub mod common;
    pub mod health;
    pub mod schema;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
