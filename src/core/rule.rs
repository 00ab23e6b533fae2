//! # Regras Fuzzy — Expressões, Regras e Base de Regras
//!
//! O antecedente de uma regra é uma **árvore de variantes etiquetadas**
//! ([`RuleExpression`]) sobre proposições fuzzy, avaliada com os
//! operadores da lógica fuzzy no lugar dos booleanos:
//!
//! | Nó | Avaliação |
//! |----|-----------|
//! | `Label(v, l)` | grau fuzzificado de `l` em `v` |
//! | `And(a, b)` | `min(a, b)` |
//! | `Or(a, b)` | `max(a, b)` |
//! | `Not(a)` | `1 − a` |
//!
//! A árvore **é** o contrato — não há sintaxe de superfície nem
//! precedência de operadores a resolver. Os combinadores `and`/`or`/
//! `not` só existem para montar a árvore de forma legível:
//!
//! ```text
//! RuleExpression::label("risk_tolerance", "high")
//!     .and(RuleExpression::label("age", "young")
//!         .or(RuleExpression::label("time_horizon", "long")))
//! ```
//!
//! A [`RuleBase`] valida **na construção** que todo par
//! (variável, rótulo) referenciado existe — uma regra com rótulo
//! inexistente é erro de startup, nunca de avaliação.

use std::collections::HashMap;

use super::error::FuzzyError;
use super::variable::LinguisticVariable;

/// Árvore de expressão do antecedente de uma regra fuzzy.
///
/// Estrutura pura, sem estado mutável — construída uma vez e
/// compartilhada por todas as avaliações.
#[derive(Debug, Clone)]
pub enum RuleExpression {
    /// Proposição atômica: grau do rótulo `label` na variável `variable`.
    Label {
        /// Nome da variável de entrada.
        variable: String,
        /// Rótulo linguístico referenciado.
        label: String,
    },
    /// Conjunção fuzzy (mínimo).
    And(Box<RuleExpression>, Box<RuleExpression>),
    /// Disjunção fuzzy (máximo).
    Or(Box<RuleExpression>, Box<RuleExpression>),
    /// Negação fuzzy (complemento).
    Not(Box<RuleExpression>),
}

impl RuleExpression {
    /// Proposição atômica `variable is label`.
    pub fn label(variable: &str, label: &str) -> Self {
        Self::Label {
            variable: variable.to_string(),
            label: label.to_string(),
        }
    }

    /// Conjunção: `self AND rhs`.
    pub fn and(self, rhs: Self) -> Self {
        Self::And(Box::new(self), Box::new(rhs))
    }

    /// Disjunção: `self OR rhs`.
    pub fn or(self, rhs: Self) -> Self {
        Self::Or(Box::new(self), Box::new(rhs))
    }

    /// Negação: `NOT self`.
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Avalia a expressão contra as entradas fuzzificadas
    /// (`variável → (rótulo → grau)`), retornando um grau em `[0, 1]`.
    ///
    /// Pares (variável, rótulo) já foram validados em
    /// [`RuleBase::build`]; um lookup ausente aqui renderia grau 0,
    /// mas é inalcançável por construção.
    pub fn evaluate(&self, fuzzified: &HashMap<String, HashMap<String, f64>>) -> f64 {
        match self {
            Self::Label { variable, label } => fuzzified
                .get(variable)
                .and_then(|graus| graus.get(label))
                .copied()
                .unwrap_or(0.0),
            Self::And(a, b) => a.evaluate(fuzzified).min(b.evaluate(fuzzified)),
            Self::Or(a, b) => a.evaluate(fuzzified).max(b.evaluate(fuzzified)),
            Self::Not(a) => 1.0 - a.evaluate(fuzzified),
        }
    }

    /// Coleta todos os pares (variável, rótulo) referenciados na árvore.
    ///
    /// Usado pela validação de construção da [`RuleBase`].
    fn referenced_labels<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        match self {
            Self::Label { variable, label } => out.push((variable.as_str(), label.as_str())),
            Self::And(a, b) | Self::Or(a, b) => {
                a.referenced_labels(out);
                b.referenced_labels(out);
            }
            Self::Not(a) => a.referenced_labels(out),
        }
    }
}

/// Uma regra Mamdani: antecedente + cláusulas consequentes ordenadas.
///
/// Cada consequente é um par `(variável de saída, rótulo)` — a mesma
/// regra pode alimentar várias saídas (ex.: a regra agressiva define
/// equity, bonds e cash de uma vez).
#[derive(Debug, Clone)]
pub struct Rule {
    /// Nome legível da regra — usado apenas em logs e depuração.
    pub name: String,
    /// Antecedente fuzzy.
    pub antecedent: RuleExpression,
    /// Cláusulas consequentes `(variável de saída, rótulo)`, em ordem.
    pub consequents: Vec<(String, String)>,
}

impl Rule {
    /// Cria uma regra nomeada.
    pub fn new(name: &str, antecedent: RuleExpression, consequents: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            antecedent,
            consequents: consequents
                .iter()
                .map(|(v, l)| (v.to_string(), l.to_string()))
                .collect(),
        }
    }
}

/// Sequência ordenada de regras, validada na construção.
///
/// A ordem não altera o resultado da agregação Mamdani por máximo
/// (a agregação é comutativa), mas é preservada para depuração —
/// os logs de força de disparo saem na ordem de declaração.
#[derive(Debug, Clone)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Constrói a base validando toda referência de variável/rótulo.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::UnknownLabel`] na primeira referência a um par
    /// (variável, rótulo) que não existe nas variáveis de entrada
    /// (antecedentes) ou de saída (consequentes). Este é um erro de
    /// construção/startup — nunca esperado em tempo de avaliação.
    pub fn build(
        rules: Vec<Rule>,
        input_vars: &HashMap<String, LinguisticVariable>,
        output_vars: &HashMap<String, LinguisticVariable>,
    ) -> Result<Self, FuzzyError> {
        for rule in &rules {
            // Antecedente: toda proposição deve referenciar uma
            // variável de entrada existente com o rótulo existente.
            let mut refs = Vec::new();
            rule.antecedent.referenced_labels(&mut refs);
            for (variable, label) in refs {
                let known = input_vars
                    .get(variable)
                    .map(|v| v.has_term(label))
                    .unwrap_or(false);
                if !known {
                    return Err(FuzzyError::UnknownLabel {
                        variable: variable.to_string(),
                        label: label.to_string(),
                    });
                }
            }

            // Consequentes: idem contra as variáveis de saída.
            for (variable, label) in &rule.consequents {
                let known = output_vars
                    .get(variable)
                    .map(|v| v.has_term(label))
                    .unwrap_or(false);
                if !known {
                    return Err(FuzzyError::UnknownLabel {
                        variable: variable.clone(),
                        label: label.clone(),
                    });
                }
            }
        }

        Ok(Self { rules })
    }

    /// Itera as regras na ordem de declaração.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Número de regras na base.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` se a base não tem regras.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::membership::MembershipFunction;
    use crate::core::universe::Universe;

    /// Entradas fuzzificadas sintéticas para testar a avaliação da árvore.
    fn fuzzificado() -> HashMap<String, HashMap<String, f64>> {
        let mut risco = HashMap::new();
        risco.insert("high".to_string(), 0.7);
        risco.insert("low".to_string(), 0.1);

        let mut idade = HashMap::new();
        idade.insert("young".to_string(), 0.4);

        let mut mapa = HashMap::new();
        mapa.insert("risk".to_string(), risco);
        mapa.insert("age".to_string(), idade);
        mapa
    }

    /// AND é min, OR é max, NOT é complemento.
    #[test]
    fn test_fuzzy_operators() {
        let f = fuzzificado();

        let e = RuleExpression::label("risk", "high").and(RuleExpression::label("age", "young"));
        assert!((e.evaluate(&f) - 0.4).abs() < 1e-12);

        let e = RuleExpression::label("risk", "high").or(RuleExpression::label("age", "young"));
        assert!((e.evaluate(&f) - 0.7).abs() < 1e-12);

        let e = RuleExpression::label("risk", "low").not();
        assert!((e.evaluate(&f) - 0.9).abs() < 1e-12);
    }

    /// Árvore aninhada: min(0.7, max(0.4, 0.1)) = 0.4.
    #[test]
    fn test_nested_tree() {
        let f = fuzzificado();
        let e = RuleExpression::label("risk", "high").and(
            RuleExpression::label("age", "young").or(RuleExpression::label("risk", "low")),
        );
        assert!((e.evaluate(&f) - 0.4).abs() < 1e-12);
    }

    /// Variáveis de teste mínimas para a validação da RuleBase.
    fn variaveis() -> (
        HashMap<String, LinguisticVariable>,
        HashMap<String, LinguisticVariable>,
    ) {
        let mut risco = LinguisticVariable::new("risk", Universe::new(1.0, 10.0, 1.0));
        risco.add_term("high", MembershipFunction::trapezoid(5.0, 7.0, 10.0, 10.0));

        let saida =
            LinguisticVariable::output_partition("equity", Universe::new(0.0, 100.0, 1.0));

        let mut entradas = HashMap::new();
        entradas.insert("risk".to_string(), risco);
        let mut saidas = HashMap::new();
        saidas.insert("equity".to_string(), saida);
        (entradas, saidas)
    }

    /// Regra válida passa na construção.
    #[test]
    fn test_build_valid() {
        let (entradas, saidas) = variaveis();
        let regra = Rule::new(
            "agressivo",
            RuleExpression::label("risk", "high"),
            &[("equity", "high")],
        );
        let base = RuleBase::build(vec![regra], &entradas, &saidas).unwrap();
        assert_eq!(base.len(), 1);
    }

    /// Rótulo inexistente no antecedente → UnknownLabel na construção.
    #[test]
    fn test_build_unknown_antecedent_label() {
        let (entradas, saidas) = variaveis();
        let regra = Rule::new(
            "quebrada",
            RuleExpression::label("risk", "extreme"),
            &[("equity", "high")],
        );
        let err = RuleBase::build(vec![regra], &entradas, &saidas).unwrap_err();
        assert_eq!(
            err,
            FuzzyError::UnknownLabel {
                variable: "risk".to_string(),
                label: "extreme".to_string(),
            }
        );
    }

    /// Variável de saída inexistente no consequente → UnknownLabel.
    #[test]
    fn test_build_unknown_consequent() {
        let (entradas, saidas) = variaveis();
        let regra = Rule::new(
            "quebrada",
            RuleExpression::label("risk", "high"),
            &[("gold", "high")],
        );
        assert!(RuleBase::build(vec![regra], &entradas, &saidas).is_err());
    }
}
