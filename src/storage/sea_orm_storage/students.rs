use super::{SeaOrmStorage, map_db_err};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::Result;
use crate::models::students::{
    entities::{Student, StudentAssignment},
    requests::RegisterStudentRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, Set, Statement,
};

/// 学生所在专业/学年/学期下的全部授课安排
const STUDENT_ASSIGNMENTS_SQL: &str = r#"
SELECT ta.assignment_id,
       s.code AS subject_code,
       s.name AS subject_name,
       TRIM(CONCAT(t.first_name, ' ', COALESCE(t.last_name, ''))) AS teacher_name
FROM students st
JOIN teacher_assignments ta
  ON ta.branch_id = st.branch_id
 AND ta.year_id = st.year_id
 AND ta.semester_id = st.semester_id
JOIN subjects s ON s.subject_id = ta.subject_id
JOIN teachers t ON t.teacher_id = ta.teacher_id
WHERE st.student_id = ?
ORDER BY ta.assignment_id"#;

impl SeaOrmStorage {
    /// 注册学生
    pub async fn create_student_impl(&self, req: RegisterStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            first_name: Set(req.name),
            email: Set(req.email),
            password_hash: Set(req.password),
            roll_number: Set(req.roll_number),
            branch_id: Set(req.branch_id),
            year_id: Set(req.year_id),
            semester_id: Set(req.semester_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(map_db_err("创建学生失败"))?;

        Ok(result.into_student())
    }

    /// 通过学号获取学生
    pub async fn get_student_by_roll_number_impl(
        &self,
        roll_number: &str,
    ) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::RollNumber.eq(roll_number))
            .one(&self.db)
            .await
            .map_err(map_db_err("查询学生失败"))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 学生面板：可评价的授课列表
    pub async fn list_student_assignments_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentAssignment>> {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            STUDENT_ASSIGNMENTS_SQL,
            [student_id.into()],
        );

        StudentAssignment::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(map_db_err("查询授课列表失败"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::students::Model;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction, Value};
    use std::collections::BTreeMap;

    fn student_model() -> Model {
        Model {
            student_id: 42,
            first_name: "Asha".to_string(),
            email: "asha@example.edu".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            roll_number: "R100".to_string(),
            branch_id: 1,
            year_id: 2,
            semester_id: 3,
        }
    }

    #[tokio::test]
    async fn test_roll_number_is_bound_not_interpolated() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![student_model()]])
            .into_connection();
        let storage = SeaOrmStorage::from_connection(db);

        let injected = "R100' OR '1'='1";
        let student = storage
            .get_student_by_roll_number_impl(injected)
            .await
            .expect("query succeeds");
        assert_eq!(student.map(|s| s.student_id), Some(42));

        let log = format!("{:?}", storage.db.into_transaction_log());
        assert!(log.contains("`roll_number` = ?"), "{log}");
        assert!(!log.contains("= 'R100"), "{log}");
        assert!(log.contains(injected), "{log}");
    }

    #[tokio::test]
    async fn test_student_assignments_statement() {
        let row = BTreeMap::from([
            ("assignment_id", Value::from(7i64)),
            ("subject_code", Value::from("CS101")),
            ("subject_name", Value::from("Data Structures")),
            ("teacher_name", Value::from("Meera Rao")),
        ]);
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![row]])
            .into_connection();
        let storage = SeaOrmStorage::from_connection(db);

        let assignments = storage
            .list_student_assignments_impl(42)
            .await
            .expect("query succeeds");
        assert_eq!(
            assignments,
            vec![StudentAssignment {
                assignment_id: 7,
                subject_code: "CS101".to_string(),
                subject_name: "Data Structures".to_string(),
                teacher_name: "Meera Rao".to_string(),
            }]
        );

        assert_eq!(
            storage.db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::MySql,
                STUDENT_ASSIGNMENTS_SQL,
                [42i64.into()],
            )]
        );
    }
}
