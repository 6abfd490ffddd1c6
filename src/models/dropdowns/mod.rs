pub mod responses;

pub use responses::{DropdownResponse, LabeledOption, NamedOption};
