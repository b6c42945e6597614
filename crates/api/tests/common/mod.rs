//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use jobhunter_api::auth::jwt::{Claims, JwtConfig};
use jobhunter_api::config::ServerConfig;
use jobhunter_api::middleware::auth::AuthUser;
use jobhunter_api::notifications::{NotificationFanout, PgNotificationStore};
use jobhunter_api::resumes::ResumeStateMachine;
use jobhunter_api::routes;
use jobhunter_api::state::AppState;
use jobhunter_api::ws::LiveHub;
use jobhunter_core::roles::{ROLE_ADMIN, ROLE_HR};
use jobhunter_core::types::DbId;
use jobhunter_events::{EmailJob, Mailer};
use sqlx::PgPool;
use tokio::sync::mpsc;

/// Signing secret shared by test tokens and the test config.
pub const TEST_JWT_SECRET: &str = "test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        mail_queue_capacity: 16,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
        },
    }
}

/// The wired application plus handles onto the live hub and the mail
/// queue, so tests can observe fan-out side effects directly.
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub hub: Arc<LiveHub>,
    pub mail_rx: mpsc::Receiver<EmailJob>,
}

/// Wire the full application against the given pool.
///
/// Mirrors the construction in `main.rs` minus the outer middleware
/// layers and without spawning the mail worker — the receiver half of the
/// mail queue is handed back instead so tests can assert on queued jobs.
pub fn build_test_app(pool: PgPool) -> TestApp {
    let config = test_config();
    let hub = Arc::new(LiveHub::new());
    let (mailer, mail_rx) = Mailer::channel(config.mail_queue_capacity);

    let store = Arc::new(PgNotificationStore::new(pool.clone()));
    let fanout = NotificationFanout::new(store, Arc::clone(&hub), mailer);
    let state_machine = Arc::new(ResumeStateMachine::new(pool.clone(), fanout));

    let state = AppState {
        pool,
        config: Arc::new(config),
        live_hub: Arc::clone(&hub),
        state_machine,
    };

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .with_state(state.clone());

    TestApp {
        app,
        state,
        hub,
        mail_rx,
    }
}

/// `Authorization` header value for a test actor.
pub fn bearer_token(user_id: DbId, email: &str, role: &str, company_id: Option<DbId>) -> String {
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        role: role.to_string(),
        company_id,
        exp: chrono::Utc::now().timestamp() + 3600,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("test token should encode");
    format!("Bearer {token}")
}

/// An unrestricted actor.
pub fn admin_actor() -> AuthUser {
    AuthUser {
        user_id: 1000,
        email: "admin@jobhunter.vn".to_string(),
        role: ROLE_ADMIN.to_string(),
        company_id: None,
    }
}

/// A company-scoped recruiter.
pub fn hr_actor(company_id: DbId) -> AuthUser {
    AuthUser {
        user_id: 1001,
        email: "hr@jobhunter.vn".to_string(),
        role: ROLE_HR.to_string(),
        company_id: Some(company_id),
    }
}

/// Ids of a freshly seeded company/candidate/job/resume chain.
pub struct SeededResume {
    pub company_id: DbId,
    pub user_id: DbId,
    pub job_id: DbId,
    pub resume_id: DbId,
}

/// Seed one company, candidate, job, and resume with the given status.
pub async fn seed_resume(pool: &PgPool, status: &str) -> SeededResume {
    let company_id: DbId =
        sqlx::query_scalar("INSERT INTO companies (name) VALUES ($1) RETURNING id")
            .bind("FPT Software")
            .fetch_one(pool)
            .await
            .expect("seed company");

    let user_id: DbId = sqlx::query_scalar(
        "INSERT INTO users (name, email, role) VALUES ($1, $2, 'USER') RETURNING id",
    )
    .bind("Nguyễn Văn A")
    .bind("candidate@example.com")
    .fetch_one(pool)
    .await
    .expect("seed user");

    let job_id: DbId =
        sqlx::query_scalar("INSERT INTO jobs (name, company_id) VALUES ($1, $2) RETURNING id")
            .bind("Backend Engineer")
            .bind(company_id)
            .fetch_one(pool)
            .await
            .expect("seed job");

    let resume_id: DbId = sqlx::query_scalar(
        "INSERT INTO resumes (email, url, status, user_id, job_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind("candidate@example.com")
    .bind("cv/nguyen-van-a.pdf")
    .bind(status)
    .bind(user_id)
    .bind(job_id)
    .fetch_one(pool)
    .await
    .expect("seed resume");

    SeededResume {
        company_id,
        user_id,
        job_id,
        resume_id,
    }
}

/// Number of notification rows for one user.
pub async fn notification_count(pool: &PgPool, user_id: DbId) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("count notifications")
}
