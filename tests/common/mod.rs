#![allow(dead_code)]

use recruito_client::config::Config;
use recruito_client::dto::auth_dto::AuthResponse;
use recruito_client::models::user::Role;
use recruito_client::RecruitoClient;

pub fn client_for(server_uri: &str) -> RecruitoClient {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = Config::default().with_api_url(server_uri).expect("api url");
    RecruitoClient::new(config).expect("client")
}

pub fn auth_response(user_id: &str, email: &str, role: Role) -> AuthResponse {
    AuthResponse {
        token: format!("tok-{}", user_id),
        user_id: user_id.to_string(),
        email: email.to_string(),
        role,
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
    }
}

pub fn login_as(client: &RecruitoClient, user_id: &str, role: Role) {
    client
        .session
        .establish(auth_response(user_id, &format!("{}@example.com", user_id), role));
}
