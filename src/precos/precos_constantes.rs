// src/precos/precos_constantes.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Taxas usadas na conversão BRL -> EUR.
/// A conversão é fixa (não consulta cotação online) para que os preços sejam reproduzíveis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxasCambio {
    pub brl_para_eur_base: f64, // Taxa base, antes da margem
    pub margem_lucro: f64,      // Multiplicador aplicado sobre a taxa base
}

/// Limites de um preço válido.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidacaoPreco {
    pub min_preco: f64,
    pub max_preco: f64,
    pub casas_decimais: i64,
}

/// Limites do percentual de desconto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitesDesconto {
    pub minimo: u32,
    pub maximo: u32,
}

pub const TAXAS_CAMBIO: TaxasCambio = TaxasCambio {
    brl_para_eur_base: 0.20,
    margem_lucro: 1.5,
};

pub const VALIDACAO_PRECO: ValidacaoPreco = ValidacaoPreco {
    min_preco: 0.0,
    max_preco: 10_000_000.0,
    casas_decimais: 2,
};

pub const LIMITES_DESCONTO: LimitesDesconto = LimitesDesconto {
    minimo: 0,
    maximo: 100,
};

/// Tolerância padrão para comparar dois preços.
pub const TOLERANCIA_PADRAO: f64 = 0.001;

/// Moedas aceitas pela loja.
/// Na desserialização aceita o código em qualquer caixa ("eur", "EUR").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Moeda {
    BRL,
    EUR,
}

impl Moeda {
    pub fn simbolo(&self) -> &'static str {
        match self {
            Moeda::BRL => "R$",
            Moeda::EUR => "€",
        }
    }

    /// Espaço entre o símbolo e o número ("R$ 10,00" mas "€10,00").
    pub fn separador_simbolo(&self) -> &'static str {
        match self {
            Moeda::BRL => " ",
            Moeda::EUR => "",
        }
    }

    /// Localidade usada quando o chamador não informa nenhuma.
    pub fn localidade_padrao(&self) -> Localidade {
        match self {
            Moeda::BRL => Localidade::Brasileira,
            Moeda::EUR => Localidade::Europeia,
        }
    }

    pub fn codigo(&self) -> &'static str {
        match self {
            Moeda::BRL => "BRL",
            Moeda::EUR => "EUR",
        }
    }
}

impl fmt::Display for Moeda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codigo())
    }
}

impl FromStr for Moeda {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Moeda::BRL),
            "EUR" => Ok(Moeda::EUR),
            outro => Err(format!("Moeda não suportada: {}", outro)),
        }
    }
}

impl TryFrom<String> for Moeda {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Regras de separadores de uma localidade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegrasLocalidade {
    pub tag: &'static str,
    pub separador_decimal: char,
    pub separador_milhar: char,
}

/// Localidades suportadas na formatação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Localidade {
    #[serde(rename = "pt-BR")]
    Brasileira,
    #[default]
    #[serde(rename = "pt-PT")]
    Europeia,
    #[serde(rename = "en-IE")]
    Inglesa,
}

// Adicionar uma localidade = uma linha nova aqui e uma variante no enum.
const REGRAS_LOCALIDADES: [(Localidade, RegrasLocalidade); 3] = [
    (Localidade::Brasileira, RegrasLocalidade { tag: "pt-BR", separador_decimal: ',', separador_milhar: '.' }),
    (Localidade::Europeia, RegrasLocalidade { tag: "pt-PT", separador_decimal: ',', separador_milhar: '.' }),
    (Localidade::Inglesa, RegrasLocalidade { tag: "en-IE", separador_decimal: '.', separador_milhar: ',' }),
];

impl Localidade {
    pub fn regras(&self) -> RegrasLocalidade {
        REGRAS_LOCALIDADES
            .iter()
            .find(|(localidade, _)| localidade == self)
            .map(|(_, regras)| *regras)
            // Toda variante tem entrada na tabela; o fallback é a regra europeia
            .unwrap_or(REGRAS_LOCALIDADES[1].1)
    }

    pub fn tag(&self) -> &'static str {
        self.regras().tag
    }
}

impl FromStr for Localidade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGRAS_LOCALIDADES
            .iter()
            .find(|(_, regras)| regras.tag.eq_ignore_ascii_case(s.trim()))
            .map(|(localidade, _)| *localidade)
            .ok_or_else(|| format!("Localidade não suportada: {}", s))
    }
}

impl TryFrom<String> for Localidade {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regras_por_localidade() {
        assert_eq!(Localidade::Brasileira.regras().separador_decimal, ',');
        assert_eq!(Localidade::Europeia.regras().separador_milhar, '.');
        assert_eq!(Localidade::Inglesa.regras().separador_decimal, '.');
        assert_eq!(Localidade::Inglesa.tag(), "en-IE");
    }

    #[test]
    fn test_localidade_a_partir_da_tag() {
        assert_eq!("pt-BR".parse::<Localidade>(), Ok(Localidade::Brasileira));
        assert_eq!("PT-pt".parse::<Localidade>(), Ok(Localidade::Europeia));
        assert!("fr-FR".parse::<Localidade>().is_err());
    }

    #[test]
    fn test_moeda() {
        assert_eq!("eur".parse::<Moeda>(), Ok(Moeda::EUR));
        assert!("USD".parse::<Moeda>().is_err());
        assert_eq!(Moeda::BRL.localidade_padrao(), Localidade::Brasileira);
        assert_eq!(Moeda::EUR.to_string(), "EUR");
    }

    #[test]
    fn test_serde_da_localidade() {
        let localidade: Localidade = serde_json::from_str("\"pt-BR\"").unwrap();
        assert_eq!(localidade, Localidade::Brasileira);
        assert_eq!(serde_json::to_string(&Localidade::Inglesa).unwrap(), "\"en-IE\"");
        let localidade: Localidade = serde_json::from_str("\"EN-ie\"").unwrap();
        assert_eq!(localidade, Localidade::Inglesa);
        assert!(serde_json::from_str::<Localidade>("\"fr-FR\"").is_err());
    }

    #[test]
    fn test_serde_da_moeda_ignora_caixa() {
        assert_eq!(serde_json::from_str::<Moeda>("\"eur\"").unwrap(), Moeda::EUR);
        assert_eq!(serde_json::from_str::<Moeda>("\"BRL\"").unwrap(), Moeda::BRL);
        assert!(serde_json::from_str::<Moeda>("\"USD\"").is_err());
        assert_eq!(serde_json::to_string(&Moeda::EUR).unwrap(), "\"EUR\"");
    }
}
