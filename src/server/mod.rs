use std::sync::Arc;

use axum::{
    extract::{
        Path,
        State,
    },
    http::{
        header,
        StatusCode,
    },
    response::{
        Html,
        IntoResponse,
        Response,
    },
    routing::get,
    Router,
};
use tokio::{
    net::TcpListener,
    signal,
};
use tower_http::{
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{
    error,
    info,
    warn,
};

use crate::{
    core::FolioError,
    render::{
        Site,
        SITE_CSS,
        SITE_JS,
    },
};

/// Preview router. Pages are rendered per request from the shared site; the
/// public directory backs every other path.
pub fn router(site: Arc<Site>) -> Router {
    let public = ServeDir::new(&site.config.public_dir);
    let prefix = site.resolver.prefix().to_string();

    let pages = Router::new()
        .route("/", get(home))
        .route("/projects/{slug}", get(project))
        .route("/projects/{slug}/", get(project))
        .route("/404.html", get(not_found_page))
        .route("/assets/site.css", get(stylesheet))
        .route("/assets/site.js", get(script))
        .fallback_service(public);

    // nest() alone does not match "{prefix}/", the target of nav and back links
    let app = if prefix.is_empty() {
        pages
    } else {
        Router::new().route(&format!("{prefix}/"), get(home)).nest(&prefix, pages)
    };
    app.with_state(site).layer(TraceLayer::new_for_http())
}

async fn home(State(site): State<Arc<Site>>) -> Html<String> {
    Html(site.render_home())
}

async fn project(State(site): State<Arc<Site>>, Path(slug): Path<String>) -> Response {
    match site.render_project(&slug) {
        Ok(page) => Html(page).into_response(),
        Err(err) if err.is_not_found() => {
            warn!("No project for slug {:?}", slug);
            (StatusCode::NOT_FOUND, Html(site.render_not_found())).into_response()
        }
        Err(err) => {
            error!("Failed to render {}: {}", slug, err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

async fn not_found_page(State(site): State<Arc<Site>>) -> Html<String> {
    Html(site.render_not_found())
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

async fn script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], SITE_JS)
}

pub async fn serve(site: Arc<Site>, addr: &str) -> Result<(), FolioError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| FolioError::Server(format!("Failed to bind {addr}: {e}")))?;
    info!("Serving {} projects on http://{}{}/", site.catalog.len(), addr, site.resolver.prefix());

    axum::serve(listener, router(site))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FolioError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path as FsPath;

    use axum::{
        body::{
            to_bytes,
            Body,
        },
        http::Request,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::SiteConfig;

    fn site(base_path: &str) -> Arc<Site> {
        let config = SiteConfig {
            base_path: base_path.to_string(),
            data_file: FsPath::new(env!("CARGO_MANIFEST_DIR")).join("data/projects.json"),
            ..SiteConfig::default()
        };
        Arc::new(Site::load(config).unwrap())
    }

    async fn get_path(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn known_slug_renders_detail_page() {
        let (status, body) = get_path(router(site("")), "/projects/autonomous-maze-robot").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Back to All Projects"));
    }

    #[tokio::test]
    async fn unknown_slug_is_404_with_not_found_page() {
        let (status, body) = get_path(router(site("")), "/projects/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Project Not Found"));
    }

    #[tokio::test]
    async fn routes_nest_under_base_path() {
        let app = router(site("/portfolio"));
        let (status, body) = get_path(app.clone(), "/portfolio/assets/site.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("IntersectionObserver"));

        let (status, page) = get_path(app.clone(), "/portfolio/projects/autonomous-maze-robot").await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("href=\"/portfolio/#projects\""));

        for home in ["/portfolio", "/portfolio/"] {
            let (status, body) = get_path(app.clone(), home).await;
            assert_eq!(status, StatusCode::OK, "{home}");
            assert!(body.contains("id=\"projects\""));
        }

        let (status, _) = get_path(app, "/projects/autonomous-maze-robot").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
