mod common;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use recruito_client::dto::admin_dto::{ReportType, UpdateUserRequest};
use recruito_client::dto::auth_dto::LoginRequest;
use recruito_client::dto::page::PageRequest;
use recruito_client::models::user::Role;

fn user_body(id: &str, role: &str, is_active: bool) -> serde_json::Value {
    json!({
        "id": id,
        "email": format!("{}@example.com", id),
        "name": "Some User",
        "role": role,
        "isActive": is_active,
        "createdAt": "2026-01-01T00:00:00",
        "updatedAt": "2026-01-02T00:00:00"
    })
}

#[tokio::test]
async fn non_admins_are_refused_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = common::client_for(&server.uri());
    common::login_as(&client, "r1", Role::Recruiter);

    let err = client.admin.stats().await.unwrap_err();
    assert!(err.is_authorization());
}

#[tokio::test]
async fn system_stats_deserialize() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalUsers": 42,
            "totalCandidates": 30,
            "totalRecruiters": 10,
            "totalAdmins": 2,
            "totalJobs": 12,
            "activeJobs": 7,
            "totalApplications": 55,
            "pendingApplications": 20,
            "totalInterviews": 9,
            "upcomingInterviews": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server.uri());
    common::login_as(&client, "a1", Role::Admin);

    let stats = client.admin.stats().await.expect("stats");
    assert_eq!(stats.total_users, 42);
    assert_eq!(stats.active_jobs, 7);
}

#[tokio::test]
async fn user_listing_accepts_the_admin_page_spelling() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [user_body("u1", "CANDIDATE", true)],
            "totalElements": 1,
            "totalPages": 1,
            "pageSize": 10,
            "currentPage": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server.uri());
    common::login_as(&client, "a1", Role::Admin);

    let page = client.admin.users(PageRequest::default()).await.expect("users");
    assert_eq!(page.size, 10);
    assert_eq!(page.content[0].role, Role::Candidate);
}

#[tokio::test]
async fn update_user_sends_only_the_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/users/u1"))
        .and(body_json(json!({ "isActive": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("u1", "CANDIDATE", false)))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server.uri());
    common::login_as(&client, "a1", Role::Admin);

    let user = client
        .admin
        .update_user(
            "u1",
            UpdateUserRequest {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .expect("update");
    assert!(!user.is_active);
}

#[tokio::test]
async fn change_role_is_admin_only() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/users/u1/role"))
        .and(body_json(json!({ "role": "RECRUITER" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("u1", "RECRUITER", true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server.uri());
    common::login_as(&client, "a1", Role::Admin);
    let user = client
        .admin
        .change_role("u1", Role::Recruiter)
        .await
        .expect("change role");
    assert_eq!(user.role, Role::Recruiter);

    let recruiter_client = common::client_for(&server.uri());
    common::login_as(&recruiter_client, "r1", Role::Recruiter);
    let err = recruiter_client
        .admin
        .change_role("u1", Role::Admin)
        .await
        .unwrap_err();
    assert!(err.is_authorization());
}

// Admin deactivates a user; that user's next login fails with an auth error.
#[tokio::test]
async fn deactivated_users_cannot_log_back_in() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/users/u7/toggle-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("u7", "CANDIDATE", false)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Account is deactivated" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let admin = common::client_for(&server.uri());
    common::login_as(&admin, "a1", Role::Admin);
    let user = admin.admin.toggle_user_status("u7").await.expect("toggle");
    assert!(!user.is_active);

    let victim = common::client_for(&server.uri());
    let err = victim
        .auth
        .login(LoginRequest {
            email: "u7@example.com".into(),
            password: "correct-password".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_auth());
    assert!(!victim.session.is_authenticated());
}

#[tokio::test]
async fn reports_hit_the_typed_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/analytics/reports/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rows": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server.uri());
    common::login_as(&client, "a1", Role::Admin);

    let report = client.admin.report(ReportType::Users).await.expect("report");
    assert!(report.get("rows").is_some());
}

#[tokio::test]
async fn analytics_dashboard_is_typed_and_staff_gated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalJobs": 12,
            "totalApplications": 55,
            "totalInterviews": 9,
            "totalUsers": 42,
            "activeRecruiters": 8,
            "activeCandidates": 25,
            "applicationsByStatus": { "APPLIED": 20, "HIRED": 3 },
            "interviewsByMonth": { "2026-02": 4 },
            "jobsByStatus": { "PUBLISHED": 7 },
            "conversionRate": 0.054
        })))
        .expect(1)
        .mount(&server)
        .await;

    let recruiter = common::client_for(&server.uri());
    common::login_as(&recruiter, "r1", Role::Recruiter);
    let analytics = recruiter.analytics.dashboard().await.expect("dashboard");
    assert_eq!(analytics.total_jobs, 12);
    assert_eq!(analytics.applications_by_status.get("HIRED"), Some(&3));

    let candidate = common::client_for(&server.uri());
    common::login_as(&candidate, "c1", Role::Candidate);
    let err = candidate.analytics.dashboard().await.unwrap_err();
    assert!(err.is_authorization());
}
