// src/shared/shared_moeda.rs

use bigdecimal::{BigDecimal, RoundingMode};

// Valores monetários são exibidos com duas casas decimais
const ESCALA_CENTAVOS: i64 = 2;

/// Formata um valor monetário com duas casas decimais.
/// Regra de arredondamento do programa inteiro: meio-para-cima
/// (half-up), aplicada somente aqui, na borda de exibição. Os cálculos
/// internos mantêm a precisão completa do BigDecimal.
pub fn formatar_valor(valor: &BigDecimal) -> String {
    valor
        .with_scale_round(ESCALA_CENTAVOS, RoundingMode::HalfUp)
        .to_string()
}

/// Converte um percentual inteiro (ex.: 15) na fração exata (0.15).
pub fn fracao_percentual(percentual: i32) -> BigDecimal {
    BigDecimal::from(percentual) / BigDecimal::from(100)
}
