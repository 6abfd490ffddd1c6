//! SeaORM 实体定义
//!
//! 这些实体只映射本服务直接读写的外部表，表结构与存储过程由数据库侧维护。
//! Storage 层使用这些实体进行查询，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod academic_years;
pub mod admins;
pub mod branches;
pub mod semesters;
pub mod students;
