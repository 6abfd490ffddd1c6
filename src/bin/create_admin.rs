//! 管理员账号创建工具
//!
//! 未通过参数提供的字段会在终端中交互询问，密码输入不回显；
//! 密码也可通过 `ADMIN_PASSWORD` 环境变量提供。

use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};

use faculty_feedback::config::AppConfig;
use faculty_feedback::errors::FeedbackError;
use faculty_feedback::models::admins::requests::CreateAdminRequest;
use faculty_feedback::storage::create_storage;
use faculty_feedback::utils::password::hash_password;

/// Create a new administrator account.
#[derive(Parser, Debug)]
#[command(name = "create-admin", version)]
struct Cli {
    /// Login name of the new administrator.
    #[arg(long)]
    username: Option<String>,

    /// Full name (optional).
    #[arg(long)]
    full_name: Option<String>,

    /// Email address (optional).
    #[arg(long)]
    email: Option<String>,

    /// Do not prompt for missing optional fields.
    #[arg(long)]
    no_input: bool,
}

/// 收集到的原始输入
struct AdminInput {
    username: String,
    password: String,
    confirm_password: String,
    full_name: String,
    email: String,
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// 读取密码及确认；`hidden` 负责不回显的终端输入
fn read_passwords(
    mut hidden: impl FnMut(&str) -> io::Result<String>,
) -> io::Result<(String, String)> {
    let password = hidden("Enter password (will be hidden): ")?;
    let confirm = hidden("Confirm password: ")?;
    Ok((password.trim().to_string(), confirm.trim().to_string()))
}

fn collect_input(cli: Cli) -> io::Result<AdminInput> {
    println!("--- Create a New Administrator ---");

    let username = match cli.username {
        Some(username) => username.trim().to_string(),
        None => prompt("Enter username: ")?,
    };

    // 环境变量提供的密码不再要求确认
    let (password, confirm_password) = match std::env::var("ADMIN_PASSWORD") {
        Ok(password) => (password.trim().to_string(), password.trim().to_string()),
        Err(_) => read_passwords(|label: &str| rpassword::prompt_password(label))?,
    };

    let full_name = match cli.full_name {
        Some(full_name) => full_name.trim().to_string(),
        None if cli.no_input => String::new(),
        None => prompt("Enter full name (optional): ")?,
    };
    let email = match cli.email {
        Some(email) => email.trim().to_string(),
        None if cli.no_input => String::new(),
        None => prompt("Enter email (optional): ")?,
    };

    Ok(AdminInput {
        username,
        password,
        confirm_password,
        full_name,
        email,
    })
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// 校验输入并哈希密码
fn build_request(input: AdminInput) -> Result<CreateAdminRequest, FeedbackError> {
    if input.username.is_empty() || input.password.is_empty() {
        return Err(FeedbackError::validation(
            "Username and password cannot be empty.",
        ));
    }
    if input.password != input.confirm_password {
        return Err(FeedbackError::validation("Passwords do not match."));
    }

    Ok(CreateAdminRequest {
        username: input.username,
        password_hash: hash_password(&input.password)?,
        full_name: non_empty(input.full_name),
        email: non_empty(input.email),
    })
}

async fn run(cli: Cli) -> Result<String, FeedbackError> {
    let input =
        collect_input(cli).map_err(|e| FeedbackError::validation(format!("Failed to read input: {e}")))?;
    let request = build_request(input)?;
    let username = request.username.clone();

    let storage = create_storage().await?;
    match storage.create_admin(request).await {
        Ok(admin) => Ok(format!(
            "Administrator '{}' created successfully (id {})!",
            admin.username, admin.admin_id
        )),
        Err(e) if e.is_constraint_violation() => Err(FeedbackError::constraint_violation(format!(
            "An admin with the username '{username}' already exists."
        ))),
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = AppConfig::init() {
        eprintln!("\n[Error] Failed to load configuration: {e}");
        std::process::exit(1);
    }

    match run(cli).await {
        Ok(message) => println!("\n[Success] {message}"),
        Err(e) => {
            eprintln!("\n[Error] {}", e.message());
            std::process::exit(1);
        }
    }
}
