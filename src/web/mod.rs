//! # Módulo Web — A Interface do FIA
//!
//! Camada web da aplicação, construída com **Axum** + **HTMX** +
//! **Maud**. Contém zero lógica de inferência — consome apenas a
//! operação pública do [`FuzzyAdvisor`](crate::advisor::FuzzyAdvisor)
//! e o classificador determinístico.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │ Browser (HTMX)                                      │
//! ├─────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                           │
//! │  ├── GET  /               → formulário de perfil    │
//! │  ├── POST /avaliar        → HTMX fragment           │
//! │  ├── GET  /api/portfolio  → JSON (integrações)      │
//! │  └── GET  /status         → JSON (health check)     │
//! ├─────────────────────────────────────────────────────┤
//! │ Static Assets (tower_http::ServeDir → /assets/)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// A API JSON recebe CORS permissivo — ela existe justamente para
/// consumidores externos da alocação. O estado `AppState` é
/// compartilhado entre todos os handlers via extrator `State<_>`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── Página HTML ───────────────────────────────────────
        .route("/", get(handlers::index))
        // ── HTMX fragment ─────────────────────────────────────
        .route("/avaliar", post(handlers::avaliar))
        // ── API JSON ──────────────────────────────────────────
        .route("/api/portfolio", get(handlers::api_portfolio))
        .route("/status", get(handlers::status))
        .layer(CorsLayer::permissive())
        // ── Arquivos estáticos ────────────────────────────────
        .nest_service("/assets", ServeDir::new("assets"))
        .with_state(state)
}
