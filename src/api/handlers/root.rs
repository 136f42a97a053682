use axum::response::IntoResponse;

// axum handler for the root banner
pub async fn root() -> impl IntoResponse {
    crate::APP_USER_AGENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::to_bytes, response::IntoResponse};

    #[tokio::test]
    async fn root_returns_user_agent() {
        let response = root().await.into_response();
        let body = to_bytes(response.into_body(), 1024).await.expect("body");
        assert_eq!(body, crate::APP_USER_AGENT.as_bytes());
    }
}
