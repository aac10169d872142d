// src/precos/precos_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize, Serializer};

use super::precos_constantes::{Localidade, Moeda};

// --- Estruturas dos utilitários ---

/// Taxas de câmbio vigentes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoCambio {
    pub brl_para_eur_base: f64,
    pub margem_lucro: f64,
    pub taxa_efetiva: f64,
}

/// Serializa sempre com 2 casas ("0.00", "30.00").
/// O Display do BigDecimal descarta a escala do zero.
fn serializar_duas_casas<S: Serializer>(valor: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", valor))
}

/// Um valor com sua forma formatada.
/// O valor é serializado como texto decimal ("30.00"), como o preço dos produtos.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValorFormatado {
    #[serde(serialize_with = "serializar_duas_casas")]
    pub valor: BigDecimal,
    pub formatado: String,
}

/// Preço nas duas moedas, no formato usado pelas respostas da API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecoApi {
    pub brl: ValorFormatado,
    pub eur: ValorFormatado,
    pub duplo: String,
}

/// Regra de desconto por quantidade (ex.: a partir de 10 unidades, 5%).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RegraAtacado {
    pub qtd_minima: u32,
    pub percentual_desconto: f64,
}

/// Faixa de preço escalonado: até `qtd_maxima` unidades a `preco_unitario`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FaixaPreco {
    pub qtd_maxima: u32,
    pub preco_unitario: f64,
}

/// Regras de cálculo do frete.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RegrasFrete {
    pub frete_gratis_a_partir_de: Option<f64>,
    pub taxa_base: f64,
    pub taxa_por_kg: f64,
    pub peso_maximo: Option<f64>,
}

/// Entrada de preço vinda do usuário: já numérica ou texto livre.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EntradaPreco {
    Numero(f64),
    Texto(String),
}

/// Sugestão de preço gerada a partir de um preço base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SugestaoPreco {
    pub variacao: i32,
    pub brl: f64,
    pub eur: f64,
    pub rotulo: String,
    pub formatado_duplo: String,
}

/// Resultado da validação de uma faixa de preços informada pelo usuário.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidacaoFaixa {
    pub valida: bool,
    pub erros: Vec<String>,
    pub min_sanitizado: f64,
    pub max_sanitizado: f64,
}

// --- Estruturas das rotas ---

#[derive(Deserialize)]
pub struct ConsultaConversao {
    pub brl: f64,
}

#[derive(Deserialize)]
pub struct ConsultaFormatacao {
    pub valor: f64,
    pub moeda: Moeda,
    pub localidade: Option<Localidade>,
}

#[derive(Serialize)]
pub struct FormatacaoResponse {
    pub formatado: String,
}

#[derive(Deserialize)]
pub struct ConsultaInterpretacao {
    pub texto: String,
}

#[derive(Serialize)]
pub struct InterpretacaoResponse {
    pub valor: f64,
}

#[derive(Deserialize)]
pub struct ConsultaDesconto {
    pub original: f64,
    pub venda: f64,
    pub moeda: Option<Moeda>,
}

#[derive(Serialize)]
pub struct DescontoResponse {
    pub percentual: u32,
    pub economia: String,
    pub formatado: String,
}

#[derive(Deserialize)]
pub struct SolicitacaoLote {
    pub precos_brl: Vec<f64>,
}

#[derive(Deserialize)]
pub struct SolicitacaoSugestoes {
    pub base: f64,
    pub variacoes: Option<Vec<i32>>, // Padrão: -20, -10, 0, 10, 20
}

#[derive(Deserialize)]
pub struct SolicitacaoFaixa {
    pub min: f64,
    pub max: f64,
}
