//! # Templates Maud — HTML Server-Side Rendering
//!
//! Templates HTML renderizados em tempo de compilação com o macro
//! [`maud`](https://maud.lambda.xyz/), seguindo o padrão
//! **Hypermedia-Driven**: o servidor retorna HTML (página completa ou
//! fragments) e o HTMX injeta os fragments no DOM — zero JavaScript
//! de aplicação.
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`full_page()`] | Página completa | Formulário de perfil + área de resultado |
//! | [`result_fragment()`] | Fragment HTMX | Alocação + recomendações |
//! | [`error_fragment()`] | Fragment HTMX | Mensagem de erro de validação |

use maud::{html, Markup, DOCTYPE};

use crate::advisor::{PortfolioAllocation, ProfileInputs};
use crate::recommend::Recommendation;

/// Página principal — formulário de perfil e área de resultado HTMX.
///
/// O formulário posta em `/avaliar` via `hx-post` e o fragment
/// retornado substitui o conteúdo de `#resultado`.
pub fn full_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "FIA — Fuzzy Investment Advisor" }
                link rel="stylesheet" href="/assets/style.css";
                script src="https://unpkg.com/htmx.org@1.9.12" {}
            }
            body {
                div class="app-shell" {
                    nav class="nav-bar" {
                        a href="/" class="nav-brand" {
                            span class="nav-brand-icon" { "FIA" }
                            span class="nav-brand-text" {
                                "Fuzzy " em { "Investment Advisor" }
                            }
                        }
                    }

                    div class="app-container" {
                        // Formulário de perfil (esquerda)
                        div class="form-panel" {
                            h2 { "Avalie seu portfólio" }
                            form id="profile-form"
                                hx-post="/avaliar"
                                hx-target="#resultado"
                                hx-swap="innerHTML" {
                                label for="age" { "Idade (18–80 anos)" }
                                input type="number" name="age" id="age"
                                    min="18" max="80" step="1" value="30" required;

                                label for="income" { "Renda mensal (15.000–500.000)" }
                                input type="number" name="income" id="income"
                                    min="15000" max="500000" step="1000" value="50000" required;

                                label for="time_horizon" { "Horizonte de investimento (1–30 anos)" }
                                input type="number" name="time_horizon" id="time_horizon"
                                    min="1" max="30" step="1" value="10" required;

                                label for="risk_tolerance" { "Tolerância a risco (1–10)" }
                                input type="number" name="risk_tolerance" id="risk_tolerance"
                                    min="1" max="10" step="1" value="6" required;

                                button type="submit" { "Avaliar recomendação" }
                            }

                            div class="disclaimer-box" {
                                p class="bold-text" { "Importante:" }
                                p {
                                    "O FIA é apenas uma ferramenta de análise inicial a partir "
                                    "dos dados informados. O resultado não é recomendação de "
                                    "investimento. Investimentos envolvem riscos — estude antes "
                                    "de decidir e consulte um especialista em caso de dúvida."
                                }
                            }
                        }

                        // Resultado (direita) — preenchido pelo fragment HTMX
                        div class="result-panel" {
                            div id="resultado" {
                                div class="result-placeholder" {
                                    "Preencha o perfil e clique em avaliar para ver a "
                                    "alocação sugerida."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Fragment HTMX com o resultado da avaliação: barras de alocação,
/// perfil qualitativo e exemplos ilustrativos por classe.
pub fn result_fragment(
    profile: &ProfileInputs,
    allocation: &PortfolioAllocation,
    recommendation: &Recommendation,
) -> Markup {
    html! {
        div class="result-card" {
            h3 {
                "Perfil do portfólio: "
                span class="profile-label" { (recommendation.profile.label()) }
            }

            div class="allocation-bars" {
                (allocation_bar("Ações (equity)", allocation.equity, "bar-equity"))
                (allocation_bar("Renda fixa (bonds)", allocation.bonds, "bar-bonds"))
                (allocation_bar("Caixa (cash)", allocation.cash, "bar-cash"))
            }

            div class="examples" {
                h4 { "Exemplos ilustrativos" }
                p { strong { "Ações: " } (recommendation.equity_examples.join(", ")) }
                p { strong { "Renda fixa: " } (recommendation.bonds_examples.join(", ")) }
                p { strong { "Caixa: " } (recommendation.cash_examples.join(", ")) }
            }

            p class="result-inputs" {
                (format!(
                    "Perfil avaliado: {} anos · renda {:.0} · horizonte {} anos · risco {}",
                    profile.age, profile.income, profile.time_horizon, profile.risk_tolerance
                ))
            }
        }
    }
}

/// Uma barra proporcional de alocação com rótulo e percentual.
fn allocation_bar(label: &str, pct: f64, css: &str) -> Markup {
    html! {
        div class="allocation-row" {
            span class="allocation-label" { (label) }
            div class="allocation-track" {
                div class=(format!("allocation-fill {}", css))
                    style=(format!("width: {:.1}%", pct)) {}
            }
            span class="allocation-pct" { (format!("{:.1}%", pct)) }
        }
    }
}

/// Fragment de erro — exibido quando a validação de domínio falha.
///
/// A mensagem vem do `Display` do erro e já nomeia a variável e o
/// valor ofensores.
pub fn error_fragment(message: &str) -> Markup {
    html! {
        div class="result-card error" {
            h3 { "Não foi possível avaliar" }
            p { (message) }
        }
    }
}
