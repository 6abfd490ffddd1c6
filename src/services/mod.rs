pub mod admins;
pub mod dropdowns;
pub mod session;
pub mod students;

pub use admins::AdminService;
pub use dropdowns::DropdownService;
pub use session::SessionService;
pub use students::StudentService;
