pub mod candidate_handlers;
pub mod match_handlers;
pub mod system_handlers;
pub mod upload_handlers;

pub use candidate_handlers::*;
pub use match_handlers::*;
pub use system_handlers::*;
pub use upload_handlers::*;
