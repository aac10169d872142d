// src/lib.rs

// Módulo de preços: conversão, formatação e utilitários
pub mod precos;
// Módulo shared: envelope de resposta e configuração
pub mod shared;

pub use precos::precos_constantes::{Localidade, Moeda};
pub use precos::precos_conversao::{
    aplicar_desconto, arredondar_preco, calcular_desconto, calcular_margem_lucro, comparar_precos,
    comparar_precos_com_tolerancia, converter_brl_para_eur, converter_eur_para_brl, maior_preco, menor_preco,
    preco_base_eur, validar_preco,
};
pub use precos::precos_erros::{ErroPreco, MotivoInvalido};
pub use precos::precos_formatacao::{
    formatar_desconto, formatar_economia, formatar_faixa_preco, formatar_faixa_preco_dupla, formatar_numero_preco,
    formatar_preco, formatar_preco_compacto, formatar_preco_duplo, interpretar_preco,
};
