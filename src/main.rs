use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use portfolio_api::config;
use portfolio_api::database;
use portfolio_api::middleware::require_auth;
use portfolio_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, PORT
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting portfolio API in {:?} mode", config.environment);

    // No insecure fallback secret: refuse to start without one
    if config.security.jwt_secret.trim().is_empty() {
        anyhow::bail!("JWT_SECRET must be set");
    }

    // Datastore handle: created here, injected into handlers, closed on shutdown
    let state = AppState::new(database::connect(config)?);
    let app = app(state.clone());

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Portfolio API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.pool.close().await;
    tracing::info!("Database pool closed, shutting down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {}", e);
    }
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Each route group is tagged once: public or bearer-protected
        .merge(public_routes())
        .merge(protected_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use axum::routing::post;
    use portfolio_api::handlers::public::{auth, portfolio};

    Router::new()
        // Token acquisition (entry point)
        .route("/admin/login", post(auth::login))
        // Content reads
        .route("/experience", get(portfolio::list_experience))
        .route("/project", get(portfolio::list_projects))
        .route("/skill", get(portfolio::list_skills))
        .route("/social", get(portfolio::get_social))
        .route("/about", get(portfolio::get_about))
        .route("/contact", get(portfolio::list_contacts))
}

fn protected_routes() -> Router<AppState> {
    use axum::routing::{delete, post, put};
    use portfolio_api::handlers::protected::{about, contact, experience, project, skill, social};

    Router::new()
        .route("/experience", post(experience::create))
        .route("/experience/:id", delete(experience::remove))
        .route("/project", post(project::create))
        .route("/project/:id", delete(project::remove))
        .route("/skill", post(skill::create))
        .route("/skill/:id", delete(skill::remove))
        .route("/social", post(social::create))
        .route("/social/:id", put(social::update))
        .route("/about", post(about::create))
        .route("/about/:id", put(about::update))
        .route("/contact", post(contact::create))
        .route("/contact/:id", delete(contact::remove))
        // The auth gate applies to this group only
        .route_layer(axum::middleware::from_fn(require_auth))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Portfolio API",
        "version": version,
        "description": "Portfolio site backend built with Rust (Axum)",
        "endpoints": {
            "login": "POST /admin/login (public - token acquisition)",
            "experience": "GET /experience (public), POST /experience, DELETE /experience/:id (protected)",
            "project": "GET /project (public), POST /project, DELETE /project/:id (protected)",
            "skill": "GET /skill (public), POST /skill, DELETE /skill/:id (protected)",
            "social": "GET /social (public), POST /social, PUT /social/:id (protected)",
            "about": "GET /about (public), POST /about, PUT /about/:id (protected)",
            "contact": "GET /contact (public), POST /contact, DELETE /contact/:id (protected)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
