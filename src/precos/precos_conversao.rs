// src/precos/precos_conversao.rs
//
// Aritmética de preços: conversão BRL <-> EUR, margem e descontos.
// Toda função aqui falha com `ErroPreco` quando recebe um preço inválido;
// nenhuma delas substitui silenciosamente o valor por zero (exceto `arredondar_preco`).

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use std::str::FromStr;

use super::precos_constantes::{LIMITES_DESCONTO, TAXAS_CAMBIO, TOLERANCIA_PADRAO, VALIDACAO_PRECO};
use super::precos_erros::{ErroPreco, MotivoInvalido};

// --- Helpers decimais (compartilhados com formatação e utilitários) ---

/// Converte um f64 para BigDecimal usando a menor representação decimal do número.
/// Assim 1.005 vira exatamente "1.005" e não o vizinho binário 1.00499999...
pub(crate) fn decimal_de(valor: f64) -> Option<BigDecimal> {
    if !valor.is_finite() {
        return None;
    }
    BigDecimal::from_str(&valor.to_string()).ok()
}

/// Arredonda "meio para longe do zero" com o número de casas pedido.
pub(crate) fn arredondar_casas(valor: &BigDecimal, casas: i64) -> BigDecimal {
    valor.with_scale_round(casas, RoundingMode::HalfUp)
}

pub(crate) fn arredondar2(valor: &BigDecimal) -> BigDecimal {
    arredondar_casas(valor, VALIDACAO_PRECO.casas_decimais)
}

pub(crate) fn para_f64(valor: &BigDecimal) -> f64 {
    // Passar pelo texto garante o f64 mais próximo do decimal já arredondado
    valor
        .to_string()
        .parse::<f64>()
        .ok()
        .or_else(|| valor.to_f64())
        .unwrap_or(0.0)
}

fn motivo_invalidez(preco: f64) -> Option<MotivoInvalido> {
    if !preco.is_finite() {
        return Some(MotivoInvalido::NaoFinito);
    }
    if preco < VALIDACAO_PRECO.min_preco {
        return Some(MotivoInvalido::AbaixoDoMinimo);
    }
    if preco > VALIDACAO_PRECO.max_preco {
        return Some(MotivoInvalido::AcimaDoMaximo);
    }
    let decimal = match decimal_de(preco) {
        Some(d) => d,
        None => return Some(MotivoInvalido::NaoFinito),
    };
    let (_, escala) = decimal.normalized().as_bigint_and_exponent();
    if escala > VALIDACAO_PRECO.casas_decimais {
        return Some(MotivoInvalido::CasasDecimaisExcedidas);
    }
    None
}

/// Valida o preço e devolve sua forma decimal, ou o erro identificando o argumento.
pub(crate) fn exigir_preco_valido(argumento: &'static str, preco: f64) -> Result<BigDecimal, ErroPreco> {
    let invalido = |motivo| ErroPreco::PrecoInvalido { argumento, valor: preco, motivo };

    if let Some(motivo) = motivo_invalidez(preco) {
        return Err(invalido(motivo));
    }
    decimal_de(preco).ok_or_else(|| invalido(MotivoInvalido::NaoFinito))
}

fn taxa(valor: f64) -> BigDecimal {
    // As constantes são literais finitos
    decimal_de(valor).unwrap_or_default()
}

// --- Operações públicas ---

/// Verifica se o preço está dentro dos limites e tem no máximo 2 casas decimais.
pub fn validar_preco(preco: f64) -> bool {
    motivo_invalidez(preco).is_none()
}

/// Arredonda para 2 casas. Retorna 0 para NaN ou infinito em vez de falhar.
pub fn arredondar_preco(preco: f64) -> f64 {
    match decimal_de(preco) {
        Some(decimal) => para_f64(&arredondar2(&decimal)),
        None => 0.0,
    }
}

/// Converte BRL para EUR aplicando a taxa base e a margem de lucro.
///
/// `eur = round2(brl × base × margem)`
pub fn converter_brl_para_eur(brl: f64) -> Result<f64, ErroPreco> {
    let brl = exigir_preco_valido("brl", brl)?;
    let eur = brl * taxa(TAXAS_CAMBIO.brl_para_eur_base) * taxa(TAXAS_CAMBIO.margem_lucro);
    Ok(para_f64(&arredondar2(&eur)))
}

/// Conversão inversa: `brl = round2(eur ÷ margem ÷ base)`
pub fn converter_eur_para_brl(eur: f64) -> Result<f64, ErroPreco> {
    let eur = exigir_preco_valido("eur", eur)?;
    let brl = eur / taxa(TAXAS_CAMBIO.margem_lucro) / taxa(TAXAS_CAMBIO.brl_para_eur_base);
    Ok(para_f64(&arredondar2(&brl)))
}

/// Parte do preço em EUR que corresponde apenas à margem de lucro.
pub fn calcular_margem_lucro(brl: f64) -> Result<f64, ErroPreco> {
    let brl = exigir_preco_valido("brl", brl)?;
    let margem = taxa(TAXAS_CAMBIO.margem_lucro) - BigDecimal::from(1);
    let lucro = brl * taxa(TAXAS_CAMBIO.brl_para_eur_base) * margem;
    Ok(para_f64(&arredondar2(&lucro)))
}

/// Preço em EUR antes da margem.
pub fn preco_base_eur(brl: f64) -> Result<f64, ErroPreco> {
    let brl = exigir_preco_valido("brl", brl)?;
    let base = brl * taxa(TAXAS_CAMBIO.brl_para_eur_base);
    Ok(para_f64(&arredondar2(&base)))
}

/// Percentual de desconto (inteiro) entre o preço original e o de venda.
/// Retorna 0 quando não há desconto ou quando o original é zero.
pub fn calcular_desconto(original: f64, venda: f64) -> Result<u32, ErroPreco> {
    let original_dec = exigir_preco_valido("original", original)?;
    let venda_dec = exigir_preco_valido("venda", venda)?;

    if original <= 0.0 || venda >= original {
        return Ok(0);
    }

    let percentual = (&original_dec - &venda_dec) / &original_dec * BigDecimal::from(100);
    let percentual = arredondar_casas(&percentual, 0).to_u32().unwrap_or(0);

    Ok(percentual.clamp(LIMITES_DESCONTO.minimo, LIMITES_DESCONTO.maximo))
}

/// Aplica um percentual de desconto (0 a 100) ao preço.
pub fn aplicar_desconto(preco: f64, percentual: f64) -> Result<f64, ErroPreco> {
    let preco = exigir_preco_valido("preco", preco)?;

    if !percentual.is_finite() || !(0.0..=100.0).contains(&percentual) {
        return Err(ErroPreco::DescontoInvalido { percentual });
    }
    let percentual_dec = decimal_de(percentual).ok_or(ErroPreco::DescontoInvalido { percentual })?;

    let fator = BigDecimal::from(1) - percentual_dec / BigDecimal::from(100);
    Ok(para_f64(&arredondar2(&(preco * fator))))
}

/// Compara dois preços com a tolerância padrão (0,001).
pub fn comparar_precos(a: f64, b: f64) -> bool {
    comparar_precos_com_tolerancia(a, b, TOLERANCIA_PADRAO)
}

pub fn comparar_precos_com_tolerancia(a: f64, b: f64, tolerancia: f64) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() < tolerancia
}

pub fn maior_preco(a: f64, b: f64) -> Result<f64, ErroPreco> {
    exigir_preco_valido("a", a)?;
    exigir_preco_valido("b", b)?;
    Ok(a.max(b))
}

pub fn menor_preco(a: f64, b: f64) -> Result<f64, ErroPreco> {
    exigir_preco_valido("a", a)?;
    exigir_preco_valido("b", b)?;
    Ok(a.min(b))
}
