#![allow(dead_code)]
//! # FIA — Fuzzy Investment Advisor
//!
//! **Ponto de entrada principal** da aplicação FIA.
//!
//! O FIA mapeia um perfil quantitativo de cliente (idade, renda,
//! horizonte de investimento, tolerância a risco) para uma alocação
//! contínua em três classes de ativos (ações / renda fixa / caixa)
//! usando **inferência fuzzy Mamdani**, e apresenta o resultado numa
//! interface web leve (Axum + HTMX + Maud).
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Constrói o FuzzyAdvisor (variáveis + regras, validado)
//!   ├── Monta AppState e Router
//!   └── Inicia servidor TCP (porta 3000)
//! ```
//!
//! Diferente de sistemas com modelos pesados, a construção do motor é
//! instantânea — variáveis linguísticas e quatro regras — então o
//! servidor sobe pronto, sem fase de carregamento em background.
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Executar com logs detalhados (forças de disparo por regra)
//! RUST_LOG=debug cargo run
//!
//! # O servidor estará disponível em http://localhost:3000
//! ```

// Declaração dos módulos da aplicação.
// Cada módulo corresponde a uma camada da arquitetura:

/// Módulo `core` — tipos fundamentais: Universe, MembershipFunction,
/// LinguisticVariable, RuleBase, FuzzyError.
mod core;

/// Módulo `inference` — motor Mamdani (fuzzificação, implicação,
/// agregação) e defuzzificação/normalização.
mod inference;

/// Módulo `advisor` — construção do sistema do domínio e a operação
/// pública `evaluate_portfolio`.
mod advisor;

/// Módulo `recommend` — classificador determinístico pós-processamento.
mod recommend;

/// Módulo `web` — servidor web axum, handlers HTTP e templates.
mod web;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::advisor::FuzzyAdvisor;
use crate::web::state::AppState;

/// Função principal assíncrona do FIA.
///
/// # Erros
///
/// Retorna erro se:
/// - A base de regras referenciar um rótulo inexistente (erro de
///   programação, detectado aqui no startup)
/// - Não conseguir fazer bind na porta 3000
/// - O servidor axum falhar durante execução
#[tokio::main]
async fn main() -> Result<()> {
    // Configura o sistema de logging/tracing.
    // Aceita a variável de ambiente RUST_LOG para configurar o nível.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("📊 FIA — Fuzzy Investment Advisor — Starting...");

    // Constrói o motor fuzzy. Toda referência de variável/rótulo das
    // regras é validada aqui — falha no startup, nunca numa requisição.
    let advisor = FuzzyAdvisor::new().context("Falha ao construir a base de regras fuzzy")?;
    tracing::info!(
        rules = advisor.rule_count(),
        inputs = advisor.input_count(),
        "Motor fuzzy construído"
    );

    // Estado compartilhado — o advisor é imutável, sem locks.
    let state = AppState {
        advisor: Arc::new(advisor),
    };

    // Cria o router com todas as rotas da aplicação.
    let app = web::create_router(state);

    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Falha ao fazer bind na porta 3000")?;
    tracing::info!("🚀 Server running at http://localhost:3000");

    // Inicia o servidor axum — bloqueia até que o processo seja encerrado.
    axum::serve(listener, app).await?;

    Ok(())
}
