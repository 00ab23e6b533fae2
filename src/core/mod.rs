//! # Módulo Core — Tipos Fundamentais do Motor Fuzzy
//!
//! Este módulo agrupa os **tipos fundamentais** do motor de inferência
//! Mamdani. Tudo no FIA gira em torno destes tipos:
//!
//! - [`Universe`] — universo de discurso discretizado de uma variável
//! - [`MembershipFunction`] — forma trapezoidal/triangular que mapeia
//!   um valor crisp a um grau de pertinência em \[0, 1\]
//! - [`LinguisticVariable`] — universo nomeado + rótulos linguísticos
//!   (ex.: `age.young`, `risk_tolerance.high`)
//! - [`RuleExpression`] — árvore booleana-fuzzy do antecedente
//!   (`Label | And | Or | Not`)
//! - [`Rule`] / [`RuleBase`] — regras Mamdani validadas na construção
//! - [`FuzzyError`] — taxonomia de erros do núcleo
//!
//! ## Ciclo de Vida
//!
//! Universos, funções de pertinência, variáveis e a base de regras são
//! construídos **uma única vez** na criação do motor e imutáveis depois
//! — compartilháveis entre avaliações concorrentes sem lock. Todo o
//! estado por avaliação (fuzzificações, forças de disparo, conjuntos
//! agregados) vive em [`crate::inference`] e é descartado por chamada.

/// Sub-módulo com a taxonomia de erros ([`FuzzyError`]).
pub mod error;

/// Sub-módulo com a discretização do universo de discurso ([`Universe`]).
pub mod universe;

/// Sub-módulo com as funções de pertinência ([`MembershipFunction`]).
pub mod membership;

/// Sub-módulo com as variáveis linguísticas ([`LinguisticVariable`]).
pub mod variable;

/// Sub-módulo com expressões, regras e base de regras.
pub mod rule;

// Re-exports para conveniência — permite usar `crate::core::Universe` diretamente.
pub use error::FuzzyError;
pub use membership::MembershipFunction;
pub use rule::{Rule, RuleBase, RuleExpression};
pub use universe::Universe;
pub use variable::LinguisticVariable;
