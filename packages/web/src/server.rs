//! HTTP server for the fullstack build
//!
//! Serves the rendered application and its server functions through axum, with
//! the session store the auth server functions read from.

use anyhow::{Context, Result};
use dioxus::fullstack::ServeConfig;
use dioxus::prelude::*;
use tower_sessions::{MemoryStore, SessionManagerLayer};

/// Session middleware backing `sign_in`, `get_current_user` and `logout`
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
}

/// Install the session layer on `router`
pub fn with_sessions(router: axum::Router) -> axum::Router {
    router.layer(session_layer())
}

/// Serve `app` on the address the Dioxus CLI provides (localhost:8080 otherwise)
pub async fn serve(app: fn() -> Element) -> Result<()> {
    let config = ServeConfig::new().context("Failed to load index.html")?;
    let router = with_sessions(axum::Router::new().serve_dioxus_application(config, app));

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, router.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;
    use tower_sessions::Session;

    async fn remember(session: Session) -> StatusCode {
        match session.insert("user", "member@example.com").await {
            Ok(()) => StatusCode::OK,
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn request() -> Request<Body> {
        Request::builder().uri("/remember").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_session_is_available_to_handlers() {
        let app = with_sessions(axum::Router::new().route("/remember", get(remember)));

        let response = app.oneshot(request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::SET_COOKIE));
    }

    #[tokio::test]
    async fn test_handlers_fail_without_session_layer() {
        let app = axum::Router::new().route("/remember", get(remember));

        let response = app.oneshot(request()).await.unwrap();

        assert!(response.status().is_server_error());
    }
}
