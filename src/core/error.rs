//! # Erros do Núcleo Fuzzy
//!
//! Taxonomia de erros do motor de inferência, implementada com
//! [`thiserror`](https://docs.rs/thiserror). Todos os erros carregam
//! a variável e o valor ofensores — nenhuma avaliação retorna
//! resultado parcial ou "lixo" silencioso.
//!
//! ## Taxonomia
//!
//! | Erro | Quando ocorre | Fase |
//! |------|---------------|------|
//! | [`FuzzyError::OutOfDomain`] | Entrada fora do universo da variável | Avaliação (fail-fast) |
//! | [`FuzzyError::UnknownLabel`] | Regra referencia rótulo inexistente | Construção da RuleBase |
//! | [`FuzzyError::MissingInput`] | Atribuição não cobre variável declarada | Avaliação (fail-fast) |
//!
//! Importante: o caso de "nenhuma regra disparou" **não é um erro** —
//! é um ramo de política documentado (fallback de massa zero, ver
//! [`crate::inference::defuzz`]).

use thiserror::Error;

/// Erros produzidos pelo núcleo de inferência fuzzy.
///
/// Erros de validação surgem imediatamente ao chamador, **antes** de
/// qualquer computação parcial — uma entrada inválida aborta a
/// avaliação inteira em vez de zerar silenciosamente uma regra.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    /// Valor crisp fora dos limites (inclusivos) do universo da variável.
    ///
    /// Este check é explícito: as funções de pertinência são totais e
    /// retornariam 0 para valores fora do suporte, mascarando a entrada
    /// inválida. Por isso a fuzzificação valida os limites antes.
    #[error("valor {value} fora do domínio da variável '{variable}' [{lo}, {hi}]")]
    OutOfDomain {
        /// Nome da variável linguística.
        variable: String,
        /// Valor crisp recebido.
        value: f64,
        /// Limite inferior do universo.
        lo: f64,
        /// Limite superior do universo.
        hi: f64,
    },

    /// Uma regra referencia um par (variável, rótulo) que não existe.
    ///
    /// Detectado em [`RuleBase::build`](crate::core::RuleBase::build) —
    /// é um erro de construção/startup, nunca esperado em tempo de
    /// avaliação.
    #[error("rótulo desconhecido '{label}' na variável '{variable}'")]
    UnknownLabel {
        /// Nome da variável referenciada pela regra.
        variable: String,
        /// Rótulo inexistente.
        label: String,
    },

    /// A atribuição de entradas não contém valor para uma variável declarada.
    ///
    /// Tratado como erro explícito em vez de grau 0 silencioso.
    #[error("nenhum valor fornecido para a variável de entrada '{variable}'")]
    MissingInput {
        /// Nome da variável sem valor.
        variable: String,
    },
}
