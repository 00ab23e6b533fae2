//! # Defuzzificação e Normalização
//!
//! Último trecho do pipeline: converte cada conjunto agregado em um
//! número crisp (centroide) e reescala os três números para somarem
//! 100.
//!
//! ## Política de Massa Zero
//!
//! Dois pontos do pipeline podem encontrar "massa zero", e ambos têm
//! fallback **explícito e documentado** — nunca uma divisão por zero
//! propagando NaN:
//!
//! | Situação | Fallback |
//! |----------|----------|
//! | Conjunto agregado identicamente zero (nenhuma regra disparou para a saída) | centroide = 0.0 |
//! | Soma das três saídas crisp é zero | `{equity: 0, bonds: 0, cash: 100}` (padrão totalmente conservador) |

use crate::core::Universe;

use super::engine::AggregatedOutputSet;

/// Defuzzificação por **centroide** (centro de gravidade) sobre o
/// universo amostrado:
///
/// ```text
/// centroide = Σ xᵢ·μ(xᵢ) / Σ μ(xᵢ)
/// ```
///
/// Se o denominador é zero — conjunto identicamente zero, ou seja,
/// nenhuma regra disparou para esta variável — retorna o fallback
/// documentado `0.0` em vez de propagar um erro aritmético. É uma
/// escolha de política, não um NaN silencioso.
pub fn centroid(universe: &Universe, set: &AggregatedOutputSet) -> f64 {
    let mut num = 0.0;
    let mut den = 0.0;
    for (&x, &mu) in universe.points().iter().zip(set.membership()) {
        num += x * mu;
        den += mu;
    }

    if den == 0.0 {
        0.0 // fallback de massa zero
    } else {
        num / den
    }
}

/// Normaliza as três saídas crisp para somarem 100.
///
/// Se a soma bruta é zero (nenhuma regra disparou para nenhuma saída),
/// retorna o fallback fixo `(0, 0, 100)` — alocação totalmente
/// conservadora — em vez de dividir por zero.
///
/// Retorna `(equity%, bonds%, cash%)`.
pub fn normalize(equity: f64, bonds: f64, cash: f64) -> (f64, f64, f64) {
    let total = equity + bonds + cash;
    if total == 0.0 {
        return (0.0, 0.0, 100.0);
    }
    (
        equity / total * 100.0,
        bonds / total * 100.0,
        cash / total * 100.0,
    )
}
