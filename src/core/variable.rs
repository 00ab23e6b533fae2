//! # Variáveis Linguísticas
//!
//! Uma **variável linguística** é um universo numérico nomeado mais um
//! mapeamento de rótulos (ex.: `baixo`/`medio`/`alto`) para funções de
//! pertinência. Ela cumpre dois papéis no sistema:
//!
//! - **Entrada** — formas autoradas à mão (ex.: `idade.jovem`,
//!   `renda.alta`), fuzzificando um valor crisp em pares
//!   `(rótulo, grau)`
//! - **Saída** — três formas sobrepostas geradas automaticamente a
//!   partir dos limites do universo (ver [`LinguisticVariable::output_partition`])
//!
//! Imutável após construção: as variáveis são compartilhadas por todas
//! as avaliações concorrentes sem lock.

use std::collections::HashMap;

use super::error::FuzzyError;
use super::membership::MembershipFunction;
use super::universe::Universe;

/// Variável linguística: nome, universo e rótulos com suas formas.
#[derive(Debug, Clone)]
pub struct LinguisticVariable {
    /// Nome da variável (ex.: `"age"`, `"equity"`).
    name: String,
    /// Universo de discurso amostrado.
    universe: Universe,
    /// Mapeamento rótulo → função de pertinência.
    terms: HashMap<String, MembershipFunction>,
}

impl LinguisticVariable {
    /// Cria uma variável vazia sobre o universo dado.
    ///
    /// Os rótulos são adicionados com [`add_term`](Self::add_term).
    pub fn new(name: &str, universe: Universe) -> Self {
        Self {
            name: name.to_string(),
            universe,
            terms: HashMap::new(),
        }
    }

    /// Adiciona (ou substitui) um rótulo com sua função de pertinência.
    pub fn add_term(&mut self, label: &str, mf: MembershipFunction) {
        self.terms.insert(label.to_string(), mf);
    }

    /// Gera uma variável de **saída** com a partição automática em três
    /// rótulos sobrepostos — `low`, `medium`, `high`.
    ///
    /// Para `w = hi − lo`, as formas são exatamente:
    ///
    /// ```text
    /// low    = Trapezoid(lo,        lo,        lo + w/4,  lo + w/2)
    /// medium = Triangle (lo + w/4,  lo + w/2,  lo + 3w/4)
    /// high   = Trapezoid(lo + w/2,  lo + 3w/4, hi,        hi)
    /// ```
    ///
    /// Cada forma cobre um terço do universo com 50% de sobreposição
    /// nos rótulos vizinhos. O esquema é fixo de propósito: os
    /// centroides de saída devem ser reprodutíveis entre implementações.
    pub fn output_partition(name: &str, universe: Universe) -> Self {
        let (lo, hi) = (universe.lo(), universe.hi());
        let w = hi - lo;

        let mut var = Self::new(name, universe);
        var.add_term(
            "low",
            MembershipFunction::trapezoid(lo, lo, lo + w / 4.0, lo + w / 2.0),
        );
        var.add_term(
            "medium",
            MembershipFunction::triangle(lo + w / 4.0, lo + w / 2.0, lo + 3.0 * w / 4.0),
        );
        var.add_term(
            "high",
            MembershipFunction::trapezoid(lo + w / 2.0, lo + 3.0 * w / 4.0, hi, hi),
        );
        var
    }

    /// Fuzzifica um valor crisp: avalia **todas** as funções de
    /// pertinência e retorna o mapa rótulo → grau.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::OutOfDomain`] se `x` está fora dos limites
    /// inclusivos do universo. O check é explícito porque as funções
    /// de pertinência são totais — sem ele, um valor inválido viraria
    /// silenciosamente grau 0 em todos os rótulos.
    pub fn fuzzify(&self, x: f64) -> Result<HashMap<String, f64>, FuzzyError> {
        if !self.universe.contains(x) {
            return Err(FuzzyError::OutOfDomain {
                variable: self.name.clone(),
                value: x,
                lo: self.universe.lo(),
                hi: self.universe.hi(),
            });
        }

        Ok(self
            .terms
            .iter()
            .map(|(label, mf)| (label.clone(), mf.evaluate(x)))
            .collect())
    }

    /// Verifica se o rótulo existe nesta variável.
    pub fn has_term(&self, label: &str) -> bool {
        self.terms.contains_key(label)
    }

    /// Função de pertinência de um rótulo, se existir.
    pub fn term(&self, label: &str) -> Option<&MembershipFunction> {
        self.terms.get(label)
    }

    /// Nome da variável.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Universo de discurso da variável.
    pub fn universe(&self) -> &Universe {
        &self.universe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monta a variável de idade do domínio de investimento (18–80).
    fn idade() -> LinguisticVariable {
        let mut v = LinguisticVariable::new("age", Universe::new(18.0, 80.0, 1.0));
        v.add_term("young", MembershipFunction::trapezoid(18.0, 18.0, 30.0, 35.0));
        v.add_term("middle_aged", MembershipFunction::triangle(30.0, 45.0, 55.0));
        v.add_term("senior", MembershipFunction::trapezoid(50.0, 60.0, 80.0, 80.0));
        v
    }

    /// Fuzzificação avalia todos os rótulos contra o valor crisp.
    #[test]
    fn test_fuzzify_all_labels() {
        let graus = idade().fuzzify(32.5).unwrap();
        assert_eq!(graus.len(), 3);
        assert_eq!(graus["young"], 0.5);
        assert!((graus["middle_aged"] - 2.5 / 15.0).abs() < 1e-12);
        assert_eq!(graus["senior"], 0.0);
    }

    /// Valores nos limites inclusivos do universo são aceitos.
    #[test]
    fn test_fuzzify_at_bounds() {
        let v = idade();
        assert!(v.fuzzify(18.0).is_ok());
        assert!(v.fuzzify(80.0).is_ok());
    }

    /// Fora do universo → OutOfDomain com variável e valor ofensores.
    #[test]
    fn test_fuzzify_out_of_domain() {
        let err = idade().fuzzify(17.0).unwrap_err();
        assert_eq!(
            err,
            FuzzyError::OutOfDomain {
                variable: "age".to_string(),
                value: 17.0,
                lo: 18.0,
                hi: 80.0,
            }
        );
    }

    /// A partição automática replica exatamente o esquema w/4, w/2, 3w/4.
    #[test]
    fn test_output_partition() {
        let v = LinguisticVariable::output_partition("equity", Universe::new(0.0, 100.0, 1.0));

        assert_eq!(
            *v.term("low").unwrap(),
            MembershipFunction::trapezoid(0.0, 0.0, 25.0, 50.0)
        );
        assert_eq!(
            *v.term("medium").unwrap(),
            MembershipFunction::triangle(25.0, 50.0, 75.0)
        );
        assert_eq!(
            *v.term("high").unwrap(),
            MembershipFunction::trapezoid(50.0, 75.0, 100.0, 100.0)
        );

        // Sobreposição de 50%: no centro do universo, low já zerou,
        // medium está no pico e high está começando.
        let graus = v.fuzzify(50.0).unwrap();
        assert_eq!(graus["low"], 0.0);
        assert_eq!(graus["medium"], 1.0);
        assert_eq!(graus["high"], 0.0);

        let graus = v.fuzzify(37.5).unwrap();
        assert_eq!(graus["low"], 0.5);
        assert_eq!(graus["medium"], 0.5);
    }
}
