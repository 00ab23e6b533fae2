//! # FuzzyAdvisor — O Consultor de Alocação
//!
//! Monta o sistema fuzzy do domínio de investimento e expõe a operação
//! pública do núcleo: perfil do cliente → alocação em três classes de
//! ativos somando 100%.
//!
//! ## Variáveis de Entrada
//!
//! | Variável | Domínio | Rótulos |
//! |----------|---------|---------|
//! | `age` | \[18, 80\] | young, middle_aged, senior |
//! | `income` | \[15000, 500000\] | low, medium, high |
//! | `time_horizon` | \[1, 30\] | short, medium, long |
//! | `risk_tolerance` | \[1, 10\] | low, medium, high |
//!
//! ## Base de Regras
//!
//! ```text
//! 1. agressivo:    SE risco=alto E (idade=jovem OU horizonte=longo)
//!                  ENTÃO equity=high, bonds=low, cash=low
//! 2. conservador:  SE risco=baixo OU idade=senior OU horizonte=curto
//!                  ENTÃO equity=low, bonds=high, cash=medium
//! 3. equilibrado:  SE risco=médio E horizonte=médio E renda=média
//!                  ENTÃO equity=medium, bonds=medium, cash=low
//! 4. patrimonial:  SE renda=alta E risco=baixo
//!                  ENTÃO equity=low, bonds=medium, cash=high
//! ```
//!
//! As saídas `equity`/`bonds`/`cash` usam a partição automática
//! low/medium/high sobre \[0, 100\] (ver
//! [`LinguisticVariable::output_partition`]).
//!
//! Construído uma vez no startup e imutável depois — o advisor é
//! compartilhado entre requisições concorrentes sem lock.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{
    FuzzyError, LinguisticVariable, MembershipFunction, Rule, RuleBase, RuleExpression, Universe,
};
use crate::inference::{defuzz, InferenceEngine};

/// Nomes das três variáveis de saída, na ordem de apresentação.
const OUTPUT_VARS: [&str; 3] = ["equity", "bonds", "cash"];

/// Perfil quantitativo do cliente — as quatro entradas crisp do motor.
///
/// Domínios documentados (limites inclusivos, validados na avaliação):
/// idade ∈ \[18, 80\], renda ∈ \[15000, 500000\],
/// horizonte ∈ \[1, 30\] anos, tolerância a risco ∈ \[1, 10\].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfileInputs {
    /// Idade do cliente em anos.
    pub age: f64,
    /// Renda mensal.
    pub income: f64,
    /// Horizonte de investimento em anos.
    pub time_horizon: f64,
    /// Tolerância a risco numa escala de 1 a 10.
    pub risk_tolerance: f64,
}

/// Alocação normalizada em três classes — campos nomeados, sempre
/// somando 100 (tolerância de ponto flutuante).
///
/// Forma estável e diretamente consumível pelo classificador
/// determinístico ([`crate::recommend`]) e pela camada de apresentação.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioAllocation {
    /// Percentual em renda variável (ações).
    pub equity: f64,
    /// Percentual em renda fixa (títulos).
    pub bonds: f64,
    /// Percentual em caixa (liquidez).
    pub cash: f64,
}

/// Consultor fuzzy de alocação de portfólio.
///
/// Contém apenas o estado imutável de construção: variáveis
/// linguísticas e base de regras. O estado por avaliação vive inteiro
/// dentro de [`evaluate_portfolio`](Self::evaluate_portfolio).
pub struct FuzzyAdvisor {
    /// Variáveis de entrada, indexadas por nome.
    input_vars: HashMap<String, LinguisticVariable>,
    /// Variáveis de saída (partição automática), indexadas por nome.
    output_vars: HashMap<String, LinguisticVariable>,
    /// Base de regras validada.
    rule_base: RuleBase,
}

impl FuzzyAdvisor {
    /// Constrói o sistema completo: variáveis com as formas do domínio
    /// e as quatro regras da base.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::UnknownLabel`] se alguma regra referencia um par
    /// (variável, rótulo) inexistente — erro de programação detectado
    /// no startup, não em tempo de requisição.
    pub fn new() -> Result<Self, FuzzyError> {
        let mut input_vars = HashMap::new();

        // Idade: 18–80 anos.
        let mut age = LinguisticVariable::new("age", Universe::new(18.0, 80.0, 1.0));
        age.add_term("young", MembershipFunction::trapezoid(18.0, 18.0, 30.0, 35.0));
        age.add_term("middle_aged", MembershipFunction::triangle(30.0, 45.0, 55.0));
        age.add_term("senior", MembershipFunction::trapezoid(50.0, 60.0, 80.0, 80.0));
        input_vars.insert("age".to_string(), age);

        // Renda mensal: 15.000–500.000.
        let mut income =
            LinguisticVariable::new("income", Universe::new(15000.0, 500000.0, 1000.0));
        income.add_term(
            "low",
            MembershipFunction::trapezoid(15000.0, 15000.0, 40000.0, 60000.0),
        );
        income.add_term(
            "medium",
            MembershipFunction::triangle(45000.0, 80000.0, 120000.0),
        );
        income.add_term(
            "high",
            MembershipFunction::trapezoid(100000.0, 150000.0, 500000.0, 500000.0),
        );
        input_vars.insert("income".to_string(), income);

        // Horizonte de investimento: 1–30 anos.
        let mut horizon =
            LinguisticVariable::new("time_horizon", Universe::new(1.0, 30.0, 1.0));
        horizon.add_term("short", MembershipFunction::trapezoid(1.0, 1.0, 3.0, 5.0));
        horizon.add_term("medium", MembershipFunction::triangle(3.0, 7.0, 12.0));
        horizon.add_term("long", MembershipFunction::trapezoid(10.0, 15.0, 30.0, 30.0));
        input_vars.insert("time_horizon".to_string(), horizon);

        // Tolerância a risco: escala 1–10.
        let mut risk =
            LinguisticVariable::new("risk_tolerance", Universe::new(1.0, 10.0, 1.0));
        risk.add_term("low", MembershipFunction::trapezoid(1.0, 1.0, 3.0, 5.0));
        risk.add_term("medium", MembershipFunction::triangle(3.0, 5.0, 7.0));
        risk.add_term("high", MembershipFunction::trapezoid(5.0, 7.0, 10.0, 10.0));
        input_vars.insert("risk_tolerance".to_string(), risk);

        // Saídas: partição automática low/medium/high sobre [0, 100].
        let output_vars: HashMap<String, LinguisticVariable> = OUTPUT_VARS
            .iter()
            .map(|&name| {
                (
                    name.to_string(),
                    LinguisticVariable::output_partition(name, Universe::new(0.0, 100.0, 1.0)),
                )
            })
            .collect();

        let rules = vec![
            Rule::new(
                "agressivo",
                RuleExpression::label("risk_tolerance", "high").and(
                    RuleExpression::label("age", "young")
                        .or(RuleExpression::label("time_horizon", "long")),
                ),
                &[("equity", "high"), ("bonds", "low"), ("cash", "low")],
            ),
            Rule::new(
                "conservador",
                RuleExpression::label("risk_tolerance", "low")
                    .or(RuleExpression::label("age", "senior"))
                    .or(RuleExpression::label("time_horizon", "short")),
                &[("equity", "low"), ("bonds", "high"), ("cash", "medium")],
            ),
            Rule::new(
                "equilibrado",
                RuleExpression::label("risk_tolerance", "medium")
                    .and(RuleExpression::label("time_horizon", "medium"))
                    .and(RuleExpression::label("income", "medium")),
                &[("equity", "medium"), ("bonds", "medium"), ("cash", "low")],
            ),
            Rule::new(
                "patrimonial",
                RuleExpression::label("income", "high")
                    .and(RuleExpression::label("risk_tolerance", "low")),
                &[("equity", "low"), ("bonds", "medium"), ("cash", "high")],
            ),
        ];

        let rule_base = RuleBase::build(rules, &input_vars, &output_vars)?;

        Ok(Self {
            input_vars,
            output_vars,
            rule_base,
        })
    }

    /// Operação pública do núcleo: avalia o perfil e retorna a
    /// alocação normalizada `{equity%, bonds%, cash%}`.
    ///
    /// Função pura e determinística — mesmas entradas produzem sempre
    /// a mesma saída. Todo o estado intermediário (fuzzificações,
    /// forças de disparo, conjuntos agregados) é local a esta chamada.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::OutOfDomain`] com a variável e o valor ofensores
    /// se alguma entrada está fora do domínio documentado. O erro
    /// surge **antes** de qualquer avaliação de regra — nenhum
    /// resultado parcial é retornado.
    pub fn evaluate_portfolio(
        &self,
        profile: &ProfileInputs,
    ) -> Result<PortfolioAllocation, FuzzyError> {
        let mut assignment = HashMap::with_capacity(4);
        assignment.insert("age".to_string(), profile.age);
        assignment.insert("income".to_string(), profile.income);
        assignment.insert("time_horizon".to_string(), profile.time_horizon);
        assignment.insert("risk_tolerance".to_string(), profile.risk_tolerance);

        let sets = InferenceEngine::infer(
            &self.rule_base,
            &self.input_vars,
            &self.output_vars,
            &assignment,
        )?;

        // Defuzzificação por centroide, saída a saída.
        let mut crisp = [0.0_f64; 3];
        for (i, name) in OUTPUT_VARS.iter().enumerate() {
            let var = &self.output_vars[*name];
            crisp[i] = defuzz::centroid(var.universe(), &sets[*name]);
        }

        let (equity, bonds, cash) = defuzz::normalize(crisp[0], crisp[1], crisp[2]);
        let allocation = PortfolioAllocation { equity, bonds, cash };

        tracing::debug!(
            equity = allocation.equity,
            bonds = allocation.bonds,
            cash = allocation.cash,
            "alocação calculada"
        );

        Ok(allocation)
    }

    /// Número de regras da base — exibido no endpoint de status.
    pub fn rule_count(&self) -> usize {
        self.rule_base.len()
    }

    /// Número de variáveis de entrada.
    pub fn input_count(&self) -> usize {
        self.input_vars.len()
    }
}
