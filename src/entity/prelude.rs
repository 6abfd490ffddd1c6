//! 预导入模块，方便使用

pub use super::academic_years::{Entity as AcademicYears, Model as AcademicYearModel};
pub use super::admins::{ActiveModel as AdminActiveModel, Entity as Admins, Model as AdminModel};
pub use super::branches::{Entity as Branches, Model as BranchModel};
pub use super::semesters::{Entity as Semesters, Model as SemesterModel};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
