use super::{SeaOrmStorage, map_db_err};
use crate::errors::Result;
use crate::models::{
    AcademicFilter,
    feedback::{FeedbackRequest, TeacherSummaryRow},
};
use sea_orm::{
    ConnectionTrait, FromQueryResult, JsonValue, Statement, TransactionTrait,
};

const SUBMIT_FEEDBACK_SQL: &str = "CALL submit_feedback(?, ?, ?, ?, ?, ?, ?)";
const TEACHER_SUMMARY_SQL: &str = "CALL generate_teacher_summary(?, ?, ?, ?)";

impl SeaOrmStorage {
    /// 提交反馈（存储过程同时维护 teacher_stats）
    ///
    /// 在事务中调用；事务未提交即被丢弃时自动回滚并归还连接。
    pub async fn submit_feedback_impl(
        &self,
        student_id: i64,
        assignment_id: i64,
        feedback: FeedbackRequest,
    ) -> Result<()> {
        let txn = self.db.begin().await.map_err(map_db_err("开启事务失败"))?;

        let stmt = Statement::from_sql_and_values(
            txn.get_database_backend(),
            SUBMIT_FEEDBACK_SQL,
            [
                student_id.into(),
                assignment_id.into(),
                feedback.rating_knowledge.into(),
                feedback.rating_communication.into(),
                feedback.rating_punctuality.into(),
                feedback.rating_overall.into(),
                feedback.comment.into(),
            ],
        );

        txn.execute_raw(stmt)
            .await
            .map_err(map_db_err("提交反馈失败"))?;
        txn.commit().await.map_err(map_db_err("提交事务失败"))?;

        Ok(())
    }

    /// 生成教师反馈汇总，未提供的筛选条件以 NULL 传入
    pub async fn generate_teacher_summary_impl(
        &self,
        teacher_id: i64,
        filter: AcademicFilter,
    ) -> Result<Vec<TeacherSummaryRow>> {
        let txn = self.db.begin().await.map_err(map_db_err("开启事务失败"))?;

        let stmt = Statement::from_sql_and_values(
            txn.get_database_backend(),
            TEACHER_SUMMARY_SQL,
            [
                teacher_id.into(),
                filter.branch_id.into(),
                filter.year_id.into(),
                filter.semester_id.into(),
            ],
        );

        let rows = JsonValue::find_by_statement(stmt)
            .all(&txn)
            .await
            .map_err(map_db_err("生成教师汇总失败"))?;
        txn.commit().await.map_err(map_db_err("提交事务失败"))?;

        Ok(rows)
    }
}
