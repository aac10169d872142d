// src/precos/precos_formatacao.rs
//
// Formatação de preços para exibição. Nenhuma função deste módulo falha:
// entrada inválida vira o valor zero formatado (ou string vazia).

use bigdecimal::BigDecimal;

use super::precos_constantes::{Localidade, Moeda};
use super::precos_conversao::{
    arredondar_casas, arredondar2, calcular_desconto, converter_brl_para_eur, decimal_de, para_f64, validar_preco,
};

const DUPLO_ZERADO: &str = "€0,00 (R$ 0,00)";

/// Valor zero formatado de cada moeda.
fn preco_zerado(moeda: Moeda) -> String {
    match moeda {
        Moeda::BRL => "R$ 0,00".to_string(),
        Moeda::EUR => "€0,00".to_string(),
    }
}

/// Separa um decimal em parte inteira e fração com `casas` dígitos.
fn partes_decimais(valor: &BigDecimal, casas: i64) -> (bool, String, String) {
    let arredondado = arredondar_casas(valor, casas);
    let negativo = arredondado < BigDecimal::default();
    let (inteiro, escala) = arredondado.as_bigint_and_exponent();
    let mut digitos = inteiro.to_string().trim_start_matches('-').to_string();

    let casas = escala.max(0) as usize;
    if digitos.len() <= casas {
        digitos = format!("{}{}", "0".repeat(casas + 1 - digitos.len()), digitos);
    }
    let fracao = digitos.split_off(digitos.len() - casas);
    (negativo, digitos, fracao)
}

fn agrupar_milhares(inteiro: &str, separador: char) -> String {
    let mut agrupado = String::with_capacity(inteiro.len() + inteiro.len() / 3);
    for (i, digito) in inteiro.chars().enumerate() {
        if i > 0 && (inteiro.len() - i) % 3 == 0 {
            agrupado.push(separador);
        }
        agrupado.push(digito);
    }
    agrupado
}

/// Número com 2 casas e separadores da localidade. Assume preço já validado.
fn numero_localizado(preco: f64, localidade: Localidade) -> String {
    let regras = localidade.regras();
    let decimal = decimal_de(preco).unwrap_or_default();
    let (negativo, inteiro, fracao) = partes_decimais(&arredondar2(&decimal), 2);

    format!(
        "{}{}{}{}",
        if negativo { "-" } else { "" },
        agrupar_milhares(&inteiro, regras.separador_milhar),
        regras.separador_decimal,
        fracao
    )
}

/// Formata o preço com símbolo da moeda e separadores da localidade.
///
/// Sem localidade explícita, usa a padrão da moeda (pt-BR para BRL, pt-PT para EUR).
/// `formatar_preco(30.0, Moeda::EUR, None)` -> `"€30,00"`
pub fn formatar_preco(preco: f64, moeda: Moeda, localidade: Option<Localidade>) -> String {
    if !validar_preco(preco) {
        return preco_zerado(moeda);
    }

    let localidade = localidade.unwrap_or_else(|| moeda.localidade_padrao());
    format!(
        "{}{}{}",
        moeda.simbolo(),
        moeda.separador_simbolo(),
        numero_localizado(preco, localidade)
    )
}

/// EUR convertido seguido do preço original em BRL entre parênteses.
///
/// `formatar_preco_duplo(100.0, true)` -> `"€30,00 (R$ 100,00)"`
pub fn formatar_preco_duplo(brl: f64, mostrar_referencia: bool) -> String {
    let eur = match converter_brl_para_eur(brl) {
        Ok(eur) => eur,
        Err(_) if mostrar_referencia => return DUPLO_ZERADO.to_string(),
        Err(_) => return preco_zerado(Moeda::EUR),
    };

    let eur_formatado = formatar_preco(eur, Moeda::EUR, None);
    if !mostrar_referencia {
        return eur_formatado;
    }
    format!("{} ({})", eur_formatado, formatar_preco(brl, Moeda::BRL, None))
}

/// `"€20,00 - €50,00"`, ou um único valor quando mínimo e máximo coincidem.
pub fn formatar_faixa_preco(min: f64, max: f64, moeda: Moeda, localidade: Option<Localidade>) -> String {
    if !validar_preco(min) || !validar_preco(max) {
        return preco_zerado(moeda);
    }

    let min_formatado = formatar_preco(min, moeda, localidade);
    if min == max {
        return min_formatado;
    }
    format!("{} - {}", min_formatado, formatar_preco(max, moeda, localidade))
}

/// `"€30,00 - €60,00 (R$ 100,00 - R$ 200,00)"`
pub fn formatar_faixa_preco_dupla(min_brl: f64, max_brl: f64) -> String {
    let (min_eur, max_eur) = match (converter_brl_para_eur(min_brl), converter_brl_para_eur(max_brl)) {
        (Ok(min_eur), Ok(max_eur)) => (min_eur, max_eur),
        _ => return DUPLO_ZERADO.to_string(),
    };

    format!(
        "{} ({})",
        formatar_faixa_preco(min_eur, max_eur, Moeda::EUR, None),
        formatar_faixa_preco(min_brl, max_brl, Moeda::BRL, None)
    )
}

/// `"€80,00 (was €100,00, 20% off)"`. Sem desconto real, mostra só o preço atual.
pub fn formatar_desconto(
    original: f64,
    descontado: f64,
    moeda: Moeda,
    mostrar_percentual: bool,
    localidade: Option<Localidade>,
) -> String {
    if !validar_preco(original) || !validar_preco(descontado) {
        return formatar_preco(0.0, moeda, localidade);
    }

    let descontado_formatado = formatar_preco(descontado, moeda, localidade);
    if descontado >= original {
        return descontado_formatado;
    }

    let original_formatado = formatar_preco(original, moeda, localidade);
    if !mostrar_percentual {
        return format!("{} (was {})", descontado_formatado, original_formatado);
    }

    let percentual = calcular_desconto(original, descontado).unwrap_or(0);
    format!("{} (was {}, {}% off)", descontado_formatado, original_formatado, percentual)
}

/// `"Save €20,00"`, ou string vazia quando não há economia.
pub fn formatar_economia(original: f64, descontado: f64, moeda: Moeda, localidade: Option<Localidade>) -> String {
    if !validar_preco(original) || !validar_preco(descontado) || descontado >= original {
        return String::new();
    }

    let (original_dec, descontado_dec) = match (decimal_de(original), decimal_de(descontado)) {
        (Some(o), Some(d)) => (o, d),
        _ => return String::new(),
    };
    let economia = para_f64(&arredondar2(&(original_dec - descontado_dec)));

    format!("Save {}", formatar_preco(economia, moeda, localidade))
}

/// Formato curto para espaços pequenos: `"€1.5K"`, `"R$2.3M"`, `"€30"`.
pub fn formatar_preco_compacto(preco: f64, moeda: Moeda) -> String {
    let simbolo = moeda.simbolo();
    let decimal = match decimal_de(preco) {
        Some(d) if validar_preco(preco) => d,
        _ => return format!("{}0", simbolo),
    };

    let (escala, sufixo) = if preco >= 1_000_000.0 {
        (Some(BigDecimal::from(1_000_000)), "M")
    } else if preco >= 1_000.0 {
        (Some(BigDecimal::from(1_000)), "K")
    } else {
        (None, "")
    };

    let texto = match escala {
        Some(divisor) => {
            let (_, inteiro, fracao) = partes_decimais(&(decimal / divisor), 1);
            format!("{}.{}", inteiro, fracao)
        }
        None => partes_decimais(&decimal, 0).1,
    };
    format!("{}{}{}", simbolo, texto, sufixo)
}

/// Número sem símbolo de moeda, com os separadores da localidade.
pub fn formatar_numero_preco(preco: f64, localidade: Localidade) -> String {
    if !validar_preco(preco) {
        return "0,00".to_string();
    }
    numero_localizado(preco, localidade)
}

/// Interpreta um preço digitado ou formatado (`"€30,00"`, `"R$ 1.234,56"`, `"€1,234.50"`).
///
/// O último `,` ou `.` seguido de um ou dois dígitos finais é o separador decimal;
/// os demais são separadores de milhar. Retorna `None` se não for um preço válido.
pub fn interpretar_preco(texto: &str) -> Option<f64> {
    let limpo: String = texto
        .chars()
        .filter(|c| !matches!(c, '€' | 'R' | '$') && !c.is_whitespace())
        .collect();
    if limpo.is_empty() {
        return None;
    }

    let posicao_decimal = limpo
        .rfind(|c: char| c == ',' || c == '.')
        .filter(|posicao| {
            let fracao = &limpo[posicao + 1..];
            (1..=2).contains(&fracao.len()) && fracao.chars().all(|c| c.is_ascii_digit())
        });

    let mut normalizado = String::with_capacity(limpo.len());
    for (posicao, c) in limpo.char_indices() {
        match c {
            ',' | '.' if Some(posicao) == posicao_decimal => normalizado.push('.'),
            ',' | '.' => {}
            _ => normalizado.push(c),
        }
    }

    let valido = normalizado.chars().any(|c| c.is_ascii_digit())
        && normalizado
            .chars()
            .enumerate()
            .all(|(i, c)| c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+')));
    if !valido {
        return None;
    }

    let valor = normalizado.parse::<f64>().ok()?;
    if validar_preco(valor) {
        Some(valor)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatar_preco() {
        assert_eq!(formatar_preco(30.0, Moeda::EUR, None), "€30,00");
        assert_eq!(formatar_preco(100.0, Moeda::BRL, None), "R$ 100,00");
        assert_eq!(formatar_preco(1234567.5, Moeda::BRL, None), "R$ 1.234.567,50");
        assert_eq!(formatar_preco(0.05, Moeda::EUR, None), "€0,05");
        assert_eq!(formatar_preco(1234.5, Moeda::EUR, Some(Localidade::Inglesa)), "€1,234.50");
    }

    #[test]
    fn test_formatar_preco_nunca_falha() {
        assert_eq!(formatar_preco(f64::NAN, Moeda::EUR, None), "€0,00");
        assert_eq!(formatar_preco(-1.0, Moeda::EUR, None), "€0,00");
        assert_eq!(formatar_preco(f64::INFINITY, Moeda::BRL, None), "R$ 0,00");
        assert_eq!(formatar_preco(1.234, Moeda::BRL, Some(Localidade::Inglesa)), "R$ 0,00");
    }

    #[test]
    fn test_formatar_preco_duplo() {
        assert_eq!(formatar_preco_duplo(100.0, true), "€30,00 (R$ 100,00)");
        assert_eq!(formatar_preco_duplo(100.0, false), "€30,00");
        assert_eq!(formatar_preco_duplo(-3.0, true), "€0,00 (R$ 0,00)");
        assert_eq!(formatar_preco_duplo(f64::NAN, false), "€0,00");
    }

    #[test]
    fn test_faixas() {
        assert_eq!(formatar_faixa_preco(20.0, 50.0, Moeda::EUR, None), "€20,00 - €50,00");
        assert_eq!(formatar_faixa_preco(20.0, 20.0, Moeda::EUR, None), "€20,00");
        assert_eq!(formatar_faixa_preco(20.0, f64::NAN, Moeda::BRL, None), "R$ 0,00");
        assert_eq!(
            formatar_faixa_preco_dupla(100.0, 200.0),
            "€30,00 - €60,00 (R$ 100,00 - R$ 200,00)"
        );
        assert_eq!(formatar_faixa_preco_dupla(100.0, 100.0), "€30,00 (R$ 100,00)");
        assert_eq!(formatar_faixa_preco_dupla(-1.0, 100.0), "€0,00 (R$ 0,00)");
    }

    #[test]
    fn test_formatar_desconto() {
        assert_eq!(
            formatar_desconto(100.0, 80.0, Moeda::EUR, true, None),
            "€80,00 (was €100,00, 20% off)"
        );
        assert_eq!(formatar_desconto(100.0, 80.0, Moeda::EUR, false, None), "€80,00 (was €100,00)");
        assert_eq!(formatar_desconto(80.0, 100.0, Moeda::EUR, true, None), "€100,00");
        assert_eq!(formatar_desconto(f64::NAN, 80.0, Moeda::BRL, true, None), "R$ 0,00");
    }

    #[test]
    fn test_formatar_economia() {
        assert_eq!(formatar_economia(100.0, 80.0, Moeda::EUR, None), "Save €20,00");
        assert_eq!(formatar_economia(59.9, 49.95, Moeda::BRL, None), "Save R$ 9,95");
        assert_eq!(formatar_economia(80.0, 80.0, Moeda::EUR, None), "");
        assert_eq!(formatar_economia(-1.0, 80.0, Moeda::EUR, None), "");
    }

    #[test]
    fn test_formatar_preco_compacto() {
        assert_eq!(formatar_preco_compacto(1500.0, Moeda::EUR), "€1.5K");
        assert_eq!(formatar_preco_compacto(1250.0, Moeda::EUR), "€1.3K");
        assert_eq!(formatar_preco_compacto(2_340_000.0, Moeda::BRL), "R$2.3M");
        assert_eq!(formatar_preco_compacto(29.5, Moeda::EUR), "€30");
        assert_eq!(formatar_preco_compacto(f64::NAN, Moeda::BRL), "R$0");
    }

    #[test]
    fn test_formatar_numero_preco() {
        assert_eq!(formatar_numero_preco(1234.5, Localidade::Europeia), "1.234,50");
        assert_eq!(formatar_numero_preco(1234.5, Localidade::Inglesa), "1,234.50");
        assert_eq!(formatar_numero_preco(7.0, Localidade::default()), "7,00");
        assert_eq!(formatar_numero_preco(-7.0, Localidade::Brasileira), "0,00");
    }

    #[test]
    fn test_interpretar_preco() {
        assert_eq!(interpretar_preco("€30,00"), Some(30.0));
        assert_eq!(interpretar_preco("R$ 100,00"), Some(100.0));
        assert_eq!(interpretar_preco("R$ 1.234,56"), Some(1234.56));
        assert_eq!(interpretar_preco("€1,234.50"), Some(1234.5));
        assert_eq!(interpretar_preco("1.000"), Some(1000.0));
        assert_eq!(interpretar_preco("12,5"), Some(12.5));
        assert_eq!(interpretar_preco("garbage"), None);
        assert_eq!(interpretar_preco(""), None);
        assert_eq!(interpretar_preco("R$ -5,00"), None);
        assert_eq!(interpretar_preco("12abc"), None);
    }

    #[test]
    fn test_interpretar_desfaz_formatacao() {
        for preco in [0.0, 0.99, 30.0, 1234.56, 9_999_999.99] {
            for moeda in [Moeda::BRL, Moeda::EUR] {
                let texto = formatar_preco(preco, moeda, None);
                assert_eq!(interpretar_preco(&texto), Some(preco), "{}", texto);
            }
        }
    }
}
