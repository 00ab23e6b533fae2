//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`]. O fluxo principal segue o
//! padrão **HTMX fragment** — o formulário posta e recebe um fragmento
//! HTML, não uma página completa.
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Página principal (Maud) |
//! | `avaliar` | POST | HTMX fragment | Resultado da avaliação |
//! | `api_portfolio` | GET | JSON | Alocação + recomendação para integrações |
//! | `status` | GET | JSON | Readiness + metadados do motor |
//!
//! ## Erros de Validação
//!
//! Um [`FuzzyError::OutOfDomain`](crate::core::FuzzyError) vira um
//! fragment de erro (no fluxo HTMX) ou um `422` com JSON (na API) —
//! sempre com a variável e o valor ofensores na mensagem.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Form, Json};

use super::state::AppState;
use super::templates;
use crate::advisor::{PortfolioAllocation, ProfileInputs};
use crate::recommend::{self, Recommendation};

/// Resposta do endpoint `/status`.
#[derive(serde::Serialize)]
pub struct StatusResponse {
    /// Sempre `true` — o motor é construído antes do servidor subir.
    pub ready: bool,
    /// Número de regras da base.
    pub rules: usize,
    /// Número de variáveis de entrada.
    pub inputs: usize,
}

/// Resposta JSON do endpoint `/api/portfolio`.
#[derive(serde::Serialize)]
pub struct PortfolioResponse {
    /// Alocação normalizada, campos nomeados.
    pub allocation: PortfolioAllocation,
    /// Classificação determinística + exemplos.
    pub recommendation: Recommendation,
}

/// Erro JSON da API.
#[derive(serde::Serialize)]
pub struct ApiError {
    /// Mensagem com a variável e o valor ofensores.
    pub error: String,
}

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// GET `/` — Página principal com o formulário de perfil.
pub async fn index() -> Html<String> {
    markup_to_html(templates::full_page())
}

/// GET `/status` — Metadados do motor para health checks.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ready: true,
        rules: state.advisor.rule_count(),
        inputs: state.advisor.input_count(),
    })
}

/// POST `/avaliar` — Avalia o perfil e retorna o fragment de resultado.
///
/// ## Fluxo
///
/// ```text
/// 1. Lê o perfil do form (age, income, time_horizon, risk_tolerance)
/// 2. evaluate_portfolio() → alocação normalizada (ou OutOfDomain)
/// 3. recommend() → perfil qualitativo + exemplos
/// 4. Renderiza o fragment que o HTMX injeta em #resultado
/// ```
pub async fn avaliar(
    State(state): State<AppState>,
    Form(profile): Form<ProfileInputs>,
) -> Html<String> {
    match state.advisor.evaluate_portfolio(&profile) {
        Ok(allocation) => {
            let recommendation = recommend::recommend(&allocation);
            tracing::info!(
                equity = allocation.equity,
                bonds = allocation.bonds,
                cash = allocation.cash,
                profile = ?recommendation.profile,
                "avaliação concluída"
            );
            markup_to_html(templates::result_fragment(
                &profile,
                &allocation,
                &recommendation,
            ))
        }
        Err(e) => {
            tracing::warn!(error = %e, "perfil rejeitado na validação de domínio");
            markup_to_html(templates::error_fragment(&e.to_string()))
        }
    }
}

/// GET `/api/portfolio` — Alocação + recomendação em JSON.
///
/// Recebe o perfil como query string:
///
/// ```text
/// /api/portfolio?age=25&income=60000&time_horizon=10&risk_tolerance=8
/// ```
///
/// Retorna `422 Unprocessable Entity` com a mensagem de validação se
/// alguma entrada estiver fora do domínio documentado.
pub async fn api_portfolio(
    State(state): State<AppState>,
    Query(profile): Query<ProfileInputs>,
) -> Result<Json<PortfolioResponse>, (StatusCode, Json<ApiError>)> {
    match state.advisor.evaluate_portfolio(&profile) {
        Ok(allocation) => Ok(Json(PortfolioResponse {
            recommendation: recommend::recommend(&allocation),
            allocation,
        })),
        Err(e) => {
            tracing::warn!(error = %e, "perfil rejeitado na API");
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiError {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::FuzzyAdvisor;

    /// A forma serializada de PortfolioResponse é contrato de
    /// integração: alocação com campos nomeados somando 100 e
    /// recomendação com perfil + listas de exemplos.
    #[test]
    fn test_portfolio_response_json_shape() {
        let advisor = FuzzyAdvisor::new().expect("base de regras válida");
        let allocation = advisor
            .evaluate_portfolio(&ProfileInputs {
                age: 25.0,
                income: 60000.0,
                time_horizon: 10.0,
                risk_tolerance: 8.0,
            })
            .unwrap();
        let response = PortfolioResponse {
            recommendation: recommend::recommend(&allocation),
            allocation,
        };

        let v = serde_json::to_value(&response).unwrap();

        let equity = v["allocation"]["equity"].as_f64().unwrap();
        let bonds = v["allocation"]["bonds"].as_f64().unwrap();
        let cash = v["allocation"]["cash"].as_f64().unwrap();
        assert!((equity + bonds + cash - 100.0).abs() < 1e-6);

        // Variantes unitárias do perfil serializam como string.
        assert!(v["recommendation"]["profile"].is_string());
        assert!(v["recommendation"]["equity_examples"].is_array());
        assert!(v["recommendation"]["bonds_examples"].is_array());
        assert!(v["recommendation"]["cash_examples"].is_array());
    }

    /// O erro da API serializa como objeto com o campo `error` contendo
    /// a variável e o valor ofensores.
    #[test]
    fn test_api_error_json_shape() {
        let advisor = FuzzyAdvisor::new().expect("base de regras válida");
        let err = advisor
            .evaluate_portfolio(&ProfileInputs {
                age: 17.0,
                income: 60000.0,
                time_horizon: 10.0,
                risk_tolerance: 5.0,
            })
            .unwrap_err();

        let v = serde_json::to_value(&ApiError {
            error: err.to_string(),
        })
        .unwrap();
        let message = v["error"].as_str().unwrap();
        assert!(message.contains("age"));
        assert!(message.contains("17"));
    }
}
