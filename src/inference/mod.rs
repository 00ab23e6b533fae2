//! # Módulo Inference — O Pipeline Mamdani
//!
//! Este módulo contém a parte **por avaliação** do sistema: o motor
//! que transforma entradas crisp em conjuntos fuzzy agregados
//! ([`engine`]) e a etapa final que os converte em números crisp
//! normalizados ([`defuzz`]).
//!
//! ```text
//! entradas → fuzzificação → disparo → implicação/agregação
//!          → centroide por saída → normalização → {equity, bonds, cash}
//! ```
//!
//! Todo o estado aqui é **transiente** — criado na chamada, descartado
//! no retorno. As definições imutáveis (variáveis, regras) vivem em
//! [`crate::core`] e chegam por referência.

/// Sub-módulo com o motor de inferência ([`InferenceEngine`]).
pub mod engine;

/// Sub-módulo com centroide e normalização.
pub mod defuzz;

/// Re-export do motor para acesso via `crate::inference::InferenceEngine`.
pub use engine::{AggregatedOutputSet, InferenceEngine};
