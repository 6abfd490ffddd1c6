pub mod filters;
pub mod response;

pub use filters::{AcademicFilter, AcademicScope};
pub use response::{ApiResponse, ResponseStatus};
