//! # Universe — Universo de Discurso Discretizado
//!
//! O **universo de discurso** é o domínio numérico fechado `[lo, hi]`
//! sobre o qual uma variável linguística é definida. Para a agregação
//! Mamdani e a defuzzificação por centroide, o universo é **amostrado**
//! em pontos igualmente espaçados com passo fixo.
//!
//! ## Invariantes
//!
//! - `step > 0` e `lo ≤ hi` (verificados na construção)
//! - Todos os pontos amostrados pertencem a `[lo, hi]`
//! - Os pontos são pré-computados uma única vez — o `Universe` é
//!   imutável após construção e pode ser compartilhado entre
//!   avaliações concorrentes

/// Discretização ordenada e igualmente espaçada de um intervalo fechado.
///
/// ## Exemplo
///
/// ```text
/// Universe::new(0.0, 100.0, 1.0) → 101 pontos: 0, 1, 2, ..., 100
/// ```
#[derive(Debug, Clone)]
pub struct Universe {
    /// Limite inferior (inclusivo).
    lo: f64,
    /// Limite superior (inclusivo).
    hi: f64,
    /// Passo de amostragem.
    step: f64,
    /// Pontos amostrados, pré-computados na construção.
    points: Vec<f64>,
}

impl Universe {
    /// Cria um universo amostrado de `lo` a `hi` com passo `step`.
    ///
    /// O número de pontos é `⌊(hi − lo) / step⌋ + 1`, de modo que o
    /// último ponto nunca ultrapassa `hi` (erros de ponto flutuante
    /// são neutralizados com um clamp no limite superior).
    ///
    /// # Panics
    ///
    /// Entra em pânico se `step ≤ 0` ou `lo > hi` — os universos são
    /// constantes de construção do sistema, nunca dados do usuário.
    pub fn new(lo: f64, hi: f64, step: f64) -> Self {
        assert!(step > 0.0, "step do universo deve ser positivo");
        assert!(lo <= hi, "universo requer lo <= hi");

        let n = ((hi - lo) / step).floor() as usize + 1;
        let points = (0..n).map(|i| (lo + i as f64 * step).min(hi)).collect();

        Self { lo, hi, step, points }
    }

    /// Verifica se `x` pertence ao intervalo `[lo, hi]` (limites inclusivos).
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lo && x <= self.hi
    }

    /// Pontos amostrados do universo, em ordem crescente.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Limite inferior do universo.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Limite superior do universo.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Passo de amostragem.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Número de pontos amostrados.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` se o universo não tem pontos (impossível pela construção,
    /// mantido por convenção junto com `len`).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Universo [0, 100] com passo 1 deve ter 101 pontos, de 0 a 100.
    #[test]
    fn test_basic_sampling() {
        let u = Universe::new(0.0, 100.0, 1.0);
        assert_eq!(u.len(), 101);
        assert_eq!(u.points()[0], 0.0);
        assert_eq!(u.points()[100], 100.0);
    }

    /// Universo de renda [15000, 500000] com passo 1000 → 486 pontos.
    #[test]
    fn test_income_sampling() {
        let u = Universe::new(15000.0, 500000.0, 1000.0);
        assert_eq!(u.len(), 486);
        assert_eq!(*u.points().last().unwrap(), 500000.0);
    }

    /// Todos os pontos amostrados devem pertencer a [lo, hi].
    #[test]
    fn test_points_within_bounds() {
        let u = Universe::new(1.0, 30.0, 1.0);
        assert!(u.points().iter().all(|&x| u.contains(x)));
    }

    /// Limites são inclusivos dos dois lados.
    #[test]
    fn test_contains_inclusive() {
        let u = Universe::new(18.0, 80.0, 1.0);
        assert!(u.contains(18.0));
        assert!(u.contains(80.0));
        assert!(!u.contains(17.999));
        assert!(!u.contains(80.001));
    }

    /// Passo não divisor exato do intervalo: o último ponto fica aquém de hi.
    #[test]
    fn test_non_divisor_step() {
        let u = Universe::new(0.0, 10.0, 3.0);
        assert_eq!(u.points(), &[0.0, 3.0, 6.0, 9.0]);
    }

    /// step <= 0 viola o invariante de construção.
    #[test]
    #[should_panic]
    fn test_invalid_step() {
        Universe::new(0.0, 1.0, 0.0);
    }
}
