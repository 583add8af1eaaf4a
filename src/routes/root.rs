use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: Endpoints,
    pub usage: String,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub health: String,
    pub evaluate: String,
}

/// GET / — short description of the API.
pub async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Prompt Trainer API".to_string(),
        endpoints: Endpoints {
            health: "GET /api/health".to_string(),
            evaluate: "POST /api/evaluate".to_string(),
        },
        usage: r#"Send a POST request to /api/evaluate with a JSON body containing "prompt" and "userResponse""#
            .to_string(),
    })
}
