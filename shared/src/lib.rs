pub mod nav;
pub mod routes;
pub mod types;

pub use nav::*;
pub use routes::*;
pub use types::*;
