use super::{SeaOrmStorage, map_db_err};
use crate::entity::admins::{ActiveModel, Column, Entity as Admins};
use crate::errors::Result;
use crate::models::{
    AcademicScope,
    admins::{
        entities::{Admin, TeacherOverview},
        requests::CreateAdminRequest,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, Set, Statement,
};

/// 指定专业/学年/学期下的授课安排及教师统计
const TEACHER_OVERVIEW_SQL: &str = r#"
SELECT t.teacher_id,
       TRIM(CONCAT(t.first_name, ' ', COALESCE(t.last_name, ''))) AS teacher_name,
       s.subject_id,
       s.name AS subject_name,
       ts.avg_overall_rating,
       ts.total_feedbacks
FROM teacher_assignments ta
JOIN teachers t ON t.teacher_id = ta.teacher_id
JOIN subjects s ON s.subject_id = ta.subject_id
LEFT JOIN teacher_stats ts ON ts.teacher_id = t.teacher_id
WHERE ta.branch_id = ? AND ta.year_id = ? AND ta.semester_id = ?
ORDER BY teacher_name, s.name"#;

impl SeaOrmStorage {
    /// 通过用户名获取管理员
    pub async fn get_admin_by_username_impl(&self, username: &str) -> Result<Option<Admin>> {
        let result = Admins::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(map_db_err("查询管理员失败"))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 创建管理员，用户名重复时返回 ConstraintViolation
    pub async fn create_admin_impl(&self, req: CreateAdminRequest) -> Result<Admin> {
        let model = ActiveModel {
            username: Set(req.username),
            password_hash: Set(req.password_hash),
            full_name: Set(req.full_name),
            email: Set(req.email),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(map_db_err("创建管理员失败"))?;

        Ok(result.into_admin())
    }

    /// 管理面板：教师与科目概览
    pub async fn list_teacher_overview_impl(
        &self,
        scope: AcademicScope,
    ) -> Result<Vec<TeacherOverview>> {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            TEACHER_OVERVIEW_SQL,
            [
                scope.branch_id.into(),
                scope.year_id.into(),
                scope.semester_id.into(),
            ],
        );

        TeacherOverview::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(map_db_err("查询教师概览失败"))
    }
}
