#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;

use faculty_feedback::config::AppConfig;
use faculty_feedback::errors::{FeedbackError, Result};
use faculty_feedback::models::{
    AcademicFilter, AcademicScope,
    admins::{
        entities::{Admin, TeacherOverview},
        requests::CreateAdminRequest,
    },
    dropdowns::{DropdownResponse, LabeledOption, NamedOption},
    feedback::{FeedbackRequest, TeacherSummaryRow},
    students::{
        entities::{Student, StudentAssignment},
        requests::RegisterStudentRequest,
    },
};
use faculty_feedback::routes;
use faculty_feedback::storage::Storage;
use faculty_feedback::utils::{json_error_handler, path_error_handler, query_error_handler};

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

static INIT: Once = Once::new();

/// 全局配置只能设置一次；密码哈希使用较小的参数加快测试
pub fn init_config() {
    init_config_with(|_| {});
}

/// 在默认测试配置上做额外修改；每个测试二进制中只有第一次调用生效
pub fn init_config_with(customize: impl FnOnce(&mut AppConfig)) {
    INIT.call_once(|| {
        let mut config = AppConfig::defaults().expect("default configuration");
        config.session.secret = TEST_SECRET.to_string();
        config.app.environment = "test".to_string();
        config.argon2.memory_cost = 1024;
        config.argon2.time_cost = 1;
        customize(&mut config);
        AppConfig::init_with(config).expect("configuration initialized once");
    });
}

/// 每个测试使用不同的客户端地址，避免共享速率限制计数
pub fn peer(last_octet: u8) -> std::net::SocketAddr {
    std::net::SocketAddr::from(([10, 0, 0, last_octet], 40_000))
}

pub fn build_app(
    storage: Arc<dyn Storage>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    init_config();
    App::new()
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::Data::new(storage))
        .configure(routes::configure_app)
}

#[derive(Default)]
struct State {
    students: Vec<Student>,
    admins: Vec<Admin>,
    feedback: HashSet<(i64, i64)>,
}

/// 内存存储：与数据库一样拒绝重复学号/邮箱、重复用户名和重复反馈
pub struct MemoryStorage {
    state: Mutex<State>,
    assignments: Vec<(i64, i64, i64, StudentAssignment)>,
    calls: AtomicUsize,
    fail_with: Option<FeedbackError>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self {
            state: Mutex::new(State::default()),
            assignments: vec![
                (
                    1,
                    1,
                    1,
                    StudentAssignment {
                        assignment_id: 11,
                        subject_code: "CS101".to_string(),
                        subject_name: "Programming".to_string(),
                        teacher_name: "Dr. Rao".to_string(),
                    },
                ),
                (
                    2,
                    1,
                    1,
                    StudentAssignment {
                        assignment_id: 21,
                        subject_code: "ME101".to_string(),
                        subject_name: "Mechanics".to_string(),
                        teacher_name: "Dr. Iyer".to_string(),
                    },
                ),
            ],
            calls: AtomicUsize::new(0),
            fail_with: None,
        }
    }
}

impl MemoryStorage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 所有调用都返回指定错误
    pub fn failing(err: FeedbackError) -> Arc<Self> {
        Arc::new(Self {
            fail_with: Some(err),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored_password_hash(&self, roll_number: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .students
            .iter()
            .find(|s| s.roll_number == roll_number)
            .map(|s| s.password_hash.clone())
    }

    pub fn feedback_count(&self) -> usize {
        self.state.lock().unwrap().feedback.len()
    }

    pub fn insert_admin(&self, username: &str, password_hash: String) -> i64 {
        let mut state = self.state.lock().unwrap();
        let admin_id = state.admins.len() as i64 + 1;
        state.admins.push(Admin {
            admin_id,
            username: username.to_string(),
            password_hash,
            full_name: None,
            email: None,
        });
        admin_id
    }

    fn record_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_student(&self, student: RegisterStudentRequest) -> Result<Student> {
        self.record_call()?;
        let mut state = self.state.lock().unwrap();
        if state
            .students
            .iter()
            .any(|s| s.roll_number == student.roll_number || s.email == student.email)
        {
            return Err(FeedbackError::constraint_violation(
                "Duplicate entry for key 'students.roll_number'",
            ));
        }
        let created = Student {
            student_id: state.students.len() as i64 + 100,
            name: student.name,
            email: student.email,
            password_hash: student.password,
            roll_number: student.roll_number,
            branch_id: student.branch_id,
            year_id: student.year_id,
            semester_id: student.semester_id,
        };
        state.students.push(created.clone());
        Ok(created)
    }

    async fn get_student_by_roll_number(&self, roll_number: &str) -> Result<Option<Student>> {
        self.record_call()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .students
            .iter()
            .find(|s| s.roll_number == roll_number)
            .cloned())
    }

    async fn list_student_assignments(&self, student_id: i64) -> Result<Vec<StudentAssignment>> {
        self.record_call()?;
        let state = self.state.lock().unwrap();
        let Some(student) = state.students.iter().find(|s| s.student_id == student_id) else {
            return Ok(Vec::new());
        };
        Ok(self
            .assignments
            .iter()
            .filter(|(branch, year, semester, _)| {
                (*branch, *year, *semester)
                    == (student.branch_id, student.year_id, student.semester_id)
            })
            .map(|(_, _, _, assignment)| assignment.clone())
            .collect())
    }

    async fn submit_feedback(
        &self,
        student_id: i64,
        assignment_id: i64,
        _feedback: FeedbackRequest,
    ) -> Result<()> {
        self.record_call()?;
        let mut state = self.state.lock().unwrap();
        if !state.feedback.insert((student_id, assignment_id)) {
            return Err(FeedbackError::constraint_violation(
                "Duplicate entry for key 'feedback.unique_feedback'",
            ));
        }
        Ok(())
    }

    async fn generate_teacher_summary(
        &self,
        teacher_id: i64,
        filter: AcademicFilter,
    ) -> Result<Vec<TeacherSummaryRow>> {
        self.record_call()?;
        Ok(vec![serde_json::json!({
            "teacher_id": teacher_id,
            "branch_id": filter.branch_id,
            "year_id": filter.year_id,
            "semester_id": filter.semester_id,
            "avg_overall": 4.5,
        })])
    }

    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        self.record_call()?;
        let state = self.state.lock().unwrap();
        Ok(state.admins.iter().find(|a| a.username == username).cloned())
    }

    async fn create_admin(&self, admin: CreateAdminRequest) -> Result<Admin> {
        self.record_call()?;
        let mut state = self.state.lock().unwrap();
        if state.admins.iter().any(|a| a.username == admin.username) {
            return Err(FeedbackError::constraint_violation(
                "Duplicate entry for key 'admins.username'",
            ));
        }
        let created = Admin {
            admin_id: state.admins.len() as i64 + 1,
            username: admin.username,
            password_hash: admin.password_hash,
            full_name: admin.full_name,
            email: admin.email,
        };
        state.admins.push(created.clone());
        Ok(created)
    }

    async fn list_teacher_overview(&self, scope: AcademicScope) -> Result<Vec<TeacherOverview>> {
        self.record_call()?;
        Ok(vec![
            TeacherOverview {
                teacher_id: 1,
                teacher_name: "Dr. Rao".to_string(),
                subject_id: scope.branch_id * 10,
                subject_name: "Programming".to_string(),
                avg_overall_rating: Some(rust_decimal::Decimal::new(425, 2)),
                total_feedbacks: Some(8),
            },
            TeacherOverview {
                teacher_id: 2,
                teacher_name: "Dr. Iyer".to_string(),
                subject_id: scope.branch_id * 10 + 1,
                subject_name: "Mechanics".to_string(),
                avg_overall_rating: None,
                total_feedbacks: None,
            },
        ])
    }

    async fn list_dropdowns(&self) -> Result<DropdownResponse> {
        self.record_call()?;
        Ok(DropdownResponse {
            branches: vec![NamedOption {
                id: 1,
                name: "Computer Science".to_string(),
            }],
            years: vec![LabeledOption {
                id: 1,
                label: "First Year".to_string(),
            }],
            semesters: vec![LabeledOption {
                id: 1,
                label: "Semester 1".to_string(),
            }],
        })
    }
}
