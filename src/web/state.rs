//! # Estado da Aplicação Web
//!
//! Estado compartilhado entre todos os handlers Axum.
//!
//! Diferente de sistemas com estado mutável, o FIA só compartilha o
//! [`FuzzyAdvisor`] — imutável após construção. Nenhum lock é
//! necessário: requisições concorrentes leem as mesmas definições e
//! mantêm todo o estado de avaliação na própria chamada.

use std::sync::Arc;

use crate::advisor::FuzzyAdvisor;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Consultor fuzzy, construído no startup e somente leitura depois.
    pub advisor: Arc<FuzzyAdvisor>,
}
