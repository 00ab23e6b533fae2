//! # Motor de Inferência Mamdani
//!
//! O [`InferenceEngine`] orquestra o ciclo completo de uma avaliação:
//!
//! ```text
//! entradas crisp
//!   → fuzzificação (todas as variáveis, fail-fast em domínio inválido)
//!   → força de disparo por regra (árvore do antecedente)
//!   → implicação min por cláusula consequente (recorte no disparo)
//!   → agregação max por variável de saída (ponto a ponto)
//!   → AggregatedOutputSet por saída
//! ```
//!
//! ## Modelo de Concorrência
//!
//! O motor é uma **struct sem estado** — recebe as definições imutáveis
//! (variáveis + base de regras) por referência e retorna os conjuntos
//! agregados. Todo o estado mutável (fuzzificações, forças, conjuntos)
//! é local à chamada: avaliações concorrentes sobre as mesmas
//! definições nunca competem por nada. Complexidade por chamada:
//! O(nº de regras × nº de pontos do universo de saída) — limitada, sem
//! cancelamento ou timeout a considerar.

use std::collections::HashMap;

use crate::core::{FuzzyError, LinguisticVariable, RuleBase};

/// Conjunto fuzzy agregado de uma variável de saída, amostrado sobre
/// o universo dela.
///
/// Transiente: criado a cada avaliação e descartado após a
/// defuzzificação. Um conjunto **identicamente zero** é um estado
/// válido e esperado — significa que nenhuma regra disparou para a
/// variável nesta avaliação (a política de fallback fica na
/// defuzzificação, ver [`super::defuzz::centroid`]).
#[derive(Debug, Clone)]
pub struct AggregatedOutputSet {
    /// Graus de pertinência, um por ponto do universo da saída.
    membership: Vec<f64>,
}

impl AggregatedOutputSet {
    /// Graus de pertinência amostrados, na ordem dos pontos do universo.
    pub fn membership(&self) -> &[f64] {
        &self.membership
    }

    /// `true` se nenhuma regra contribuiu massa para esta saída.
    pub fn is_zero(&self) -> bool {
        self.membership.iter().all(|&mu| mu == 0.0)
    }
}

/// Motor de inferência Mamdani — struct sem estado, totalmente funcional.
pub struct InferenceEngine;

impl InferenceEngine {
    /// Executa uma avaliação completa: fuzzificação, disparo,
    /// implicação e agregação.
    ///
    /// ## Algoritmo
    ///
    /// 1. Fuzzifica **todas** as variáveis de entrada antes de avaliar
    ///    qualquer regra — uma única entrada fora do domínio aborta a
    ///    avaliação inteira em vez de zerar uma regra silenciosamente.
    /// 2. Computa a força de disparo de cada regra avaliando a árvore
    ///    do antecedente contra as fuzzificações.
    /// 3. Para cada cláusula consequente `(saída, rótulo)`, recorta a
    ///    forma do rótulo na força de disparo (implicação min).
    /// 4. Agrega por variável de saída com o máximo ponto a ponto.
    ///    Toda variável de saída declarada recebe um conjunto, zerado
    ///    quando nenhuma regra a alcançou.
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::MissingInput`] se `assignment` não cobre alguma
    ///   variável de entrada declarada
    /// - [`FuzzyError::OutOfDomain`] se algum valor está fora do
    ///   universo da sua variável
    pub fn infer(
        rule_base: &RuleBase,
        input_vars: &HashMap<String, LinguisticVariable>,
        output_vars: &HashMap<String, LinguisticVariable>,
        assignment: &HashMap<String, f64>,
    ) -> Result<HashMap<String, AggregatedOutputSet>, FuzzyError> {
        // 1. Fuzzificação antecipada de todas as entradas (fail-fast).
        let mut fuzzified: HashMap<String, HashMap<String, f64>> =
            HashMap::with_capacity(input_vars.len());
        for (name, var) in input_vars {
            let value = *assignment
                .get(name)
                .ok_or_else(|| FuzzyError::MissingInput {
                    variable: name.clone(),
                })?;
            fuzzified.insert(name.clone(), var.fuzzify(value)?);
        }

        // Conjuntos agregados começam zerados para TODAS as saídas
        // declaradas — "nenhuma regra disparou" é estado válido.
        let mut aggregated: HashMap<String, AggregatedOutputSet> = output_vars
            .iter()
            .map(|(name, var)| {
                (
                    name.clone(),
                    AggregatedOutputSet {
                        membership: vec![0.0; var.universe().len()],
                    },
                )
            })
            .collect();

        // 2–4. Disparo, implicação e agregação, regra a regra.
        for rule in rule_base.iter() {
            let strength = rule.antecedent.evaluate(&fuzzified);
            tracing::debug!(rule = %rule.name, strength, "força de disparo");

            if strength == 0.0 {
                continue; // recorte em zero não contribui massa
            }

            for (out_name, label) in &rule.consequents {
                // Validado em RuleBase::build; lookups nunca falham aqui.
                let Some(var) = output_vars.get(out_name) else {
                    continue;
                };
                let Some(mf) = var.term(label) else {
                    continue;
                };
                let Some(set) = aggregated.get_mut(out_name) else {
                    continue;
                };

                // Implicação min (recorte) + agregação max, ponto a ponto.
                for (mu, &x) in set.membership.iter_mut().zip(var.universe().points()) {
                    let implied = strength.min(mf.evaluate(x));
                    *mu = mu.max(implied);
                }
            }
        }

        Ok(aggregated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MembershipFunction, Rule, RuleExpression, Universe};

    /// Sistema mínimo: risco (entrada) → equity e cash (saídas).
    /// A única regra alimenta apenas equity — cash fica sem cobertura.
    fn sistema() -> (
        RuleBase,
        HashMap<String, LinguisticVariable>,
        HashMap<String, LinguisticVariable>,
    ) {
        let mut risco = LinguisticVariable::new("risk", Universe::new(1.0, 10.0, 1.0));
        risco.add_term("low", MembershipFunction::trapezoid(1.0, 1.0, 3.0, 5.0));
        risco.add_term("high", MembershipFunction::trapezoid(5.0, 7.0, 10.0, 10.0));

        let mut entradas = HashMap::new();
        entradas.insert("risk".to_string(), risco);

        let mut saidas = HashMap::new();
        saidas.insert(
            "equity".to_string(),
            LinguisticVariable::output_partition("equity", Universe::new(0.0, 100.0, 1.0)),
        );
        saidas.insert(
            "cash".to_string(),
            LinguisticVariable::output_partition("cash", Universe::new(0.0, 100.0, 1.0)),
        );

        let regra = Rule::new(
            "so_equity",
            RuleExpression::label("risk", "low"),
            &[("equity", "high")],
        );
        let base = RuleBase::build(vec![regra], &entradas, &saidas).unwrap();
        (base, entradas, saidas)
    }

    /// A implicação recorta a forma do consequente na força de disparo.
    #[test]
    fn test_implication_clips_at_strength() {
        let (base, entradas, saidas) = sistema();
        // risk = 4 → low = (5-4)/2 = 0.5
        let mut atrib = HashMap::new();
        atrib.insert("risk".to_string(), 4.0);

        let sets = InferenceEngine::infer(&base, &entradas, &saidas, &atrib).unwrap();
        let equity = &sets["equity"];

        let max = equity
            .membership()
            .iter()
            .cloned()
            .fold(0.0_f64, f64::max);
        assert!((max - 0.5).abs() < 1e-12, "platô recortado em 0.5, obtido {max}");
        // No platô do rótulo high (x = 90), o grau é exatamente o recorte.
        assert!((equity.membership()[90] - 0.5).abs() < 1e-12);
        // Fora do suporte de high (x = 40), nada contribui.
        assert_eq!(equity.membership()[40], 0.0);
    }

    /// Saída sem nenhuma regra associada recebe conjunto identicamente
    /// zero — estado válido, não erro.
    #[test]
    fn test_uncovered_output_stays_zero() {
        let (base, entradas, saidas) = sistema();
        let mut atrib = HashMap::new();
        atrib.insert("risk".to_string(), 2.0);

        let sets = InferenceEngine::infer(&base, &entradas, &saidas, &atrib).unwrap();
        assert!(sets["cash"].is_zero());
        assert!(!sets["equity"].is_zero());
    }

    /// Entrada fora do domínio aborta antes de qualquer avaliação de regra.
    #[test]
    fn test_fail_fast_out_of_domain() {
        let (base, entradas, saidas) = sistema();
        let mut atrib = HashMap::new();
        atrib.insert("risk".to_string(), 11.0);

        let err = InferenceEngine::infer(&base, &entradas, &saidas, &atrib).unwrap_err();
        assert!(matches!(err, FuzzyError::OutOfDomain { .. }));
    }

    /// Atribuição que não cobre uma variável declarada é erro explícito.
    #[test]
    fn test_missing_input() {
        let (base, entradas, saidas) = sistema();
        let atrib = HashMap::new();

        let err = InferenceEngine::infer(&base, &entradas, &saidas, &atrib).unwrap_err();
        assert_eq!(
            err,
            FuzzyError::MissingInput {
                variable: "risk".to_string()
            }
        );
    }

    /// Duas regras na mesma saída: a agregação toma o máximo ponto a ponto.
    #[test]
    fn test_max_aggregation() {
        let mut risco = LinguisticVariable::new("risk", Universe::new(1.0, 10.0, 1.0));
        risco.add_term("low", MembershipFunction::trapezoid(1.0, 1.0, 3.0, 5.0));
        risco.add_term("high", MembershipFunction::trapezoid(5.0, 7.0, 10.0, 10.0));
        let mut entradas = HashMap::new();
        entradas.insert("risk".to_string(), risco);

        let mut saidas = HashMap::new();
        saidas.insert(
            "equity".to_string(),
            LinguisticVariable::output_partition("equity", Universe::new(0.0, 100.0, 1.0)),
        );

        // risk = 6 → low = 0, high = 0.5; as duas regras apontam para equity.
        let regras = vec![
            Rule::new(
                "baixa",
                RuleExpression::label("risk", "low"),
                &[("equity", "low")],
            ),
            Rule::new(
                "alta",
                RuleExpression::label("risk", "high"),
                &[("equity", "high")],
            ),
        ];
        let base = RuleBase::build(regras, &entradas, &saidas).unwrap();

        let mut atrib = HashMap::new();
        atrib.insert("risk".to_string(), 6.0);
        let sets = InferenceEngine::infer(&base, &entradas, &saidas, &atrib).unwrap();
        let equity = &sets["equity"];

        // Só a regra "alta" contribui: massa concentrada no topo do universo.
        assert_eq!(equity.membership()[10], 0.0);
        assert!((equity.membership()[90] - 0.5).abs() < 1e-12);
    }
}
