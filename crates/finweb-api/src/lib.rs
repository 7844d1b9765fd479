//! HTTP gateway and HTML renderer
//!
//! Routes are organized into modules:
//! - routes::dashboard: Dashboard page and stats JSON passthrough
//! - routes::debtors: Debtors list
//! - routes::debts: Own debts list
//! - routes::movements: Financial movements list
//! - routes::categories: Categories list
//!
//! Every page issues its downstream fetches independently and substitutes
//! an empty default for each one that fails; a page render never turns
//! into a server error.

pub mod assets;
pub mod routes;

use axum::{routing::get, Router};
use finweb_client::ApiClient;
use finweb_config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ApiClient>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::categories::page_categories;
    use routes::dashboard::{api_stats, page_dashboard};
    use routes::debtors::page_debtors;
    use routes::debts::page_debts;
    use routes::movements::page_movements;

    Router::new()
        // JSON endpoints
        .route("/api/health", get(health_check))
        .route("/api/stats", get(api_stats))
        // Page routes
        .route("/", get(page_dashboard))
        .route("/deudores", get(page_debtors))
        .route("/mis-deudas", get(page_debts))
        .route("/movimientos", get(page_movements))
        .route("/categorias", get(page_categories))
        // Client runtime script
        .route("/static/app.js", get(assets::app_js))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Substitute an empty default when a downstream call failed.
///
/// The failure is logged here, at the point of the individual fetch; the
/// page keeps rendering with the default so a degraded section looks like
/// a legitimately empty one.
pub fn or_default<T: Default>(result: finweb_client::ClientResult<T>, endpoint: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("error fetching {}: {}", endpoint, e);
            T::default()
        }
    }
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body class="bg-light">
    {}
    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js"></script>
    <script src="/static/app.js"></script>
</body>
</html>"#,
        title, content
    )
}

/// Top navigation bar with active-link highlighting
pub fn nav_bar(current_path: &str) -> String {
    let links = [
        ("/", "Dashboard"),
        ("/deudores", "Deudores"),
        ("/mis-deudas", "Mis Deudas"),
        ("/movimientos", "Movimientos"),
        ("/categorias", "Categorías"),
    ];

    let mut nav = String::from(
        r#"<nav class='navbar navbar-expand-lg navbar-dark bg-primary mb-4'><div class='container'><a class='navbar-brand fw-bold' href='/'>FinanzApp</a><ul class='navbar-nav flex-row flex-wrap gap-3'>"#,
    );

    for (path, label) in &links {
        let is_active = if *path == "/" {
            current_path == "/"
        } else {
            current_path.starts_with(path)
        };
        let link_class = if is_active { "nav-link active" } else { "nav-link" };
        nav.push_str(&format!(
            r#"<li class='nav-item'><a class='{}' href='{}'>{}</a></li>"#,
            link_class, path, label
        ));
    }
    nav.push_str("</ul></div></nav>");
    nav
}

/// Wrap page content with the base document and navigation
pub fn page_response(title: &str, current_path: &str, inner_content: &str) -> String {
    base_html(
        title,
        &format!(
            r#"{}<main class='container pb-5'>{}</main>"#,
            nav_bar(current_path),
            inner_content
        ),
    )
}

/// Badge for a movement/category type (INGRESO / EGRESO)
pub fn tipo_badge(tipo: &str) -> String {
    let class = match tipo {
        "INGRESO" => "badge bg-success",
        "EGRESO" => "badge bg-danger",
        _ => "badge bg-secondary",
    };
    format!("<span class='{}'>{}</span>", class, finweb_utils::escape_html(tipo))
}

/// Badge for an active/inactive flag
pub fn active_badge(active: bool) -> &'static str {
    if active {
        "<span class='badge bg-success'>Activo</span>"
    } else {
        "<span class='badge bg-secondary'>Inactivo</span>"
    }
}

/// Start the HTTP server
///
/// Binds to the configured address, serves until a shutdown signal
/// arrives, then drains in-flight requests.
pub async fn start_server(config: Config, client: Arc<ApiClient>) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { client, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting finweb server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Dashboard)");
    log::info!("  - /deudores (Gestión de deudores)");
    log::info!("  - /mis-deudas (Mis deudas)");
    log::info!("  - /movimientos (Movimientos financieros)");
    log::info!("  - /categorias (Categorías)");
    log::info!("  - /api/stats (Stats JSON)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to install shutdown handler: {}", e);
        return;
    }
    log::info!("shutdown signal received, stopping server");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_marks_active_link() {
        let nav = nav_bar("/deudores");
        assert!(nav.contains("nav-link active' href='/deudores'"));
        assert!(!nav.contains("nav-link active' href='/movimientos'"));
    }

    #[test]
    fn test_nav_bar_root_only_active_on_root() {
        let nav = nav_bar("/categorias");
        assert!(!nav.contains("nav-link active' href='/'"));
        let nav = nav_bar("/");
        assert!(nav.contains("nav-link active' href='/'"));
    }

    #[test]
    fn test_or_default_substitutes_empty() {
        let ok: Vec<i32> = or_default(Ok(vec![1]), "/x/");
        assert_eq!(ok, vec![1]);

        let failed: Vec<i32> = or_default(
            Err(finweb_client::ClientError::Status {
                path: "/x/".to_string(),
                status: 502,
            }),
            "/x/",
        );
        assert!(failed.is_empty());
    }

    #[test]
    fn test_tipo_badge() {
        assert!(tipo_badge("INGRESO").contains("bg-success"));
        assert!(tipo_badge("EGRESO").contains("bg-danger"));
        assert!(tipo_badge("OTRO").contains("bg-secondary"));
    }
}
