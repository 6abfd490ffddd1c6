pub mod error_response;
pub mod parameter_error_handler;
pub mod password;
pub mod session;

pub use error_response::storage_error_response;
pub use parameter_error_handler::{json_error_handler, path_error_handler, query_error_handler};
pub use session::{SessionIdentity, SessionRole, SessionUtils};
