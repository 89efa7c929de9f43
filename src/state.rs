use sqlx::PgPool;

/// Shared application state, injected into handlers.
///
/// The datastore handle is created once in `main` and released on shutdown;
/// nothing else in the process holds it ambiently.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
