//! # Recomendações — Classificador Determinístico
//!
//! Colaborador **pós-processamento** do núcleo fuzzy: consome a
//! alocação normalizada `{equity%, bonds%, cash%}` e produz um rótulo
//! qualitativo de perfil mais listas ilustrativas de ativos, usando
//! faixas de limiar fixas — lógica IF-THEN comum, nada de fuzzy aqui.
//!
//! ## Faixas de Limiar
//!
//! | Campo | Limiar | Resultado |
//! |-------|--------|-----------|
//! | equity | > 70 | perfil Agressivo |
//! | equity | > 40 | perfil Equilibrado |
//! | equity | ≤ 40 | perfil Conservador |
//!
//! As listas de exemplos são ilustrativas, não recomendação de
//! investimento — o disclaimer da interface deixa isso explícito.

use serde::Serialize;

use crate::advisor::PortfolioAllocation;

/// Perfil qualitativo do portfólio, derivado da fatia de equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PortfolioProfile {
    /// Equity acima de 70% — foco em crescimento.
    Aggressive,
    /// Equity entre 40% e 70% — equilíbrio crescimento/segurança.
    Balanced,
    /// Equity até 40% — foco em preservação.
    Conservative,
}

impl PortfolioProfile {
    /// Rótulo em PT-BR para exibição na interface.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Aggressive => "Agressivo (foco em crescimento)",
            Self::Balanced => "Equilibrado",
            Self::Conservative => "Conservador (foco em segurança)",
        }
    }
}

/// Recomendação completa: perfil + exemplos ilustrativos por classe.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Perfil qualitativo derivado da alocação.
    pub profile: PortfolioProfile,
    /// Exemplos ilustrativos de renda variável.
    pub equity_examples: Vec<&'static str>,
    /// Exemplos ilustrativos de renda fixa.
    pub bonds_examples: Vec<&'static str>,
    /// Exemplos ilustrativos de caixa/liquidez.
    pub cash_examples: Vec<&'static str>,
}

/// Classifica a alocação em faixas fixas e monta os exemplos.
///
/// Função pura — consome apenas os três campos nomeados da alocação.
pub fn recommend(allocation: &PortfolioAllocation) -> Recommendation {
    let profile = if allocation.equity > 70.0 {
        PortfolioProfile::Aggressive
    } else if allocation.equity > 40.0 {
        PortfolioProfile::Balanced
    } else {
        PortfolioProfile::Conservative
    };

    let equity_examples = if allocation.equity > 60.0 {
        vec![
            "Fundo de índice S&P 500 (exterior)",
            "Fundo setorial de tecnologia",
        ]
    } else if allocation.equity > 20.0 {
        vec!["Fundo de índice Ibovespa"]
    } else {
        vec!["Fundo de ações de dividendos (foco em fluxo de caixa)"]
    };

    let bonds_examples = if allocation.bonds > 50.0 {
        vec!["Títulos públicos — Tesouro Direto (alta segurança)"]
    } else if allocation.bonds > 20.0 {
        vec!["Fundo de renda fixa misto (público e privado)"]
    } else {
        vec!["Fundo de renda fixa de curto prazo"]
    };

    let cash_examples = if allocation.cash > 20.0 {
        vec![
            "CDB de liquidez diária (alta rentabilidade)",
            "Fundo DI (money market)",
        ]
    } else {
        vec!["Conta remunerada (reserva de liquidez)"]
    };

    Recommendation {
        profile,
        equity_examples,
        bonds_examples,
        cash_examples,
    }
}
