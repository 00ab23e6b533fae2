//! # Funções de Pertinência
//!
//! Uma **função de pertinência** mapeia um valor crisp a um grau de
//! pertinência em `[0, 1]` para um rótulo linguístico. O sistema usa
//! apenas duas formas lineares por partes:
//!
//! ```text
//! Trapezoid(a, b, c, d)          Triangle(a, b, c)
//!       ____                            /\
//!      /    \                          /  \
//!  ___/      \___                  ___/    \___
//!     a b  c d                        a  b  c
//! ```
//!
//! A avaliação é **pura e total** sobre todos os reais: fora do suporte
//! o grau é simplesmente 0. Por isso a validação de domínio acontece
//! na variável linguística ([`super::LinguisticVariable::fuzzify`]),
//! nunca aqui.

/// Função de pertinência com forma fixada na construção.
///
/// Parâmetros ordenados (`a ≤ b ≤ c (≤ d)`). Casos degenerados com
/// rampa de largura zero (`a = b` ou `c = d`) colapsam em saltos
/// imediatos — a estrutura de ramos da avaliação garante que nenhuma
/// divisão por zero é alcançável.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipFunction {
    /// Triângulo com pé esquerdo `a`, pico `b`, pé direito `c`.
    Triangle { a: f64, b: f64, c: f64 },
    /// Trapézio com pés `a`/`d` e platô entre `b` e `c`.
    Trapezoid { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFunction {
    /// Cria um triângulo `(a, b, c)`.
    ///
    /// # Panics
    ///
    /// Entra em pânico se `a ≤ b ≤ c` não vale — as formas são
    /// constantes de construção do sistema.
    pub fn triangle(a: f64, b: f64, c: f64) -> Self {
        assert!(a <= b && b <= c, "triângulo requer a <= b <= c");
        Self::Triangle { a, b, c }
    }

    /// Cria um trapézio `(a, b, c, d)`.
    ///
    /// # Panics
    ///
    /// Entra em pânico se `a ≤ b ≤ c ≤ d` não vale.
    pub fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Self {
        assert!(
            a <= b && b <= c && c <= d,
            "trapézio requer a <= b <= c <= d"
        );
        Self::Trapezoid { a, b, c, d }
    }

    /// Avalia o grau de pertinência de `x`, sempre em `[0, 1]`.
    ///
    /// Os ramos de rampa só são alcançáveis quando a rampa tem largura
    /// positiva: com `a = b`, o intervalo `[a, b)` é vazio e o valor
    /// salta direto para o platô. Idem para `c = d` na descida.
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Triangle { a, b, c } => {
                if x < a || x > c {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else if x > b {
                    (c - x) / (c - b)
                } else {
                    1.0
                }
            }
            Self::Trapezoid { a, b, c, d } => {
                if x < a || x > d {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else if x > c {
                    (d - x) / (d - c)
                } else {
                    1.0
                }
            }
        }
    }
}
