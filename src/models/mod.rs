pub mod admins;
pub mod common;
pub mod dropdowns;
pub mod feedback;
pub mod students;

pub use common::{AcademicFilter, AcademicScope, ApiResponse, ResponseStatus};
