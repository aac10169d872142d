// src/precos/precos_utilitarios.rs
//
// Utilitários de preço usados pelas páginas de produto, carrinho e painel:
// comparação, cálculos de atacado/frete/imposto, câmbio e tratamento de entrada.

/// Comparações entre preços. Nunca falham: entrada inválida resulta em `false`/`None`.
pub mod comparacao {
    use std::cmp::Ordering;

    use crate::precos::precos_conversao::validar_preco;

    /// O preço atual é menor que o original?
    pub fn em_promocao(original: f64, atual: f64) -> bool {
        validar_preco(original) && validar_preco(atual) && atual < original
    }

    pub fn dentro_do_orcamento(preco: f64, min: f64, max: f64) -> bool {
        validar_preco(preco) && validar_preco(min) && validar_preco(max) && preco >= min && preco <= max
    }

    /// Menor preço válido da lista.
    pub fn melhor_oferta(precos: &[f64]) -> Option<f64> {
        precos
            .iter()
            .copied()
            .filter(|preco| validar_preco(*preco))
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Compara o preço por unidade (gramas, ml, peças) de dois produtos.
    /// `Less` quando o primeiro rende mais pelo dinheiro.
    pub fn comparar_custo_beneficio(preco1: f64, unidades1: f64, preco2: f64, unidades2: f64) -> Ordering {
        if !validar_preco(preco1) || !validar_preco(preco2) || !(unidades1 > 0.0) || !(unidades2 > 0.0) {
            return Ordering::Equal;
        }
        let eficiencia1 = preco1 / unidades1;
        let eficiencia2 = preco2 / unidades2;
        eficiencia1.partial_cmp(&eficiencia2).unwrap_or(Ordering::Equal)
    }
}

/// Cálculos de atacado, escalonamento, frete e imposto.
pub mod calculo {
    use bigdecimal::BigDecimal;
    use std::cmp::Ordering;

    use crate::precos::precos_conversao::{
        aplicar_desconto, arredondar2, arredondar_preco, decimal_de, exigir_preco_valido, para_f64, validar_preco,
    };
    use crate::precos::precos_erros::ErroPreco;
    use crate::precos::precos_structs::{FaixaPreco, RegraAtacado, RegrasFrete};

    /// Total com o maior desconto de atacado aplicável à quantidade.
    /// Retorna 0 para preço unitário inválido ou quantidade zero.
    pub fn preco_atacado(unitario: f64, quantidade: u32, regras: &[RegraAtacado]) -> Result<f64, ErroPreco> {
        let unitario = match exigir_preco_valido("unitario", unitario) {
            Ok(decimal) if quantidade > 0 => decimal,
            _ => return Ok(0.0),
        };
        let total = para_f64(&arredondar2(&(unitario * BigDecimal::from(quantidade))));

        let regra = regras
            .iter()
            .filter(|regra| quantidade >= regra.qtd_minima)
            .max_by(|a, b| {
                a.percentual_desconto
                    .partial_cmp(&b.percentual_desconto)
                    .unwrap_or(Ordering::Equal)
            });

        match regra {
            Some(regra) => aplicar_desconto(total, regra.percentual_desconto),
            None => Ok(total),
        }
    }

    /// Preço escalonado: cada faixa (ordenada por `qtd_maxima`) recebe até `qtd_maxima`
    /// unidades; o que sobrar é cobrado pelo preço da última faixa.
    pub fn preco_escalonado(quantidade: u32, faixas: &[FaixaPreco]) -> f64 {
        if quantidade == 0 || faixas.is_empty() {
            return 0.0;
        }

        let mut ordenadas = faixas.to_vec();
        ordenadas.sort_by_key(|faixa| faixa.qtd_maxima);

        let mut total = BigDecimal::default();
        let mut restante = quantidade;
        for faixa in &ordenadas {
            if restante == 0 {
                break;
            }
            let nesta_faixa = restante.min(faixa.qtd_maxima);
            total += decimal_de(faixa.preco_unitario).unwrap_or_default() * BigDecimal::from(nesta_faixa);
            restante -= nesta_faixa;
        }

        if let Some(ultima) = ordenadas.last() {
            if restante > 0 {
                total += decimal_de(ultima.preco_unitario).unwrap_or_default() * BigDecimal::from(restante);
            }
        }

        para_f64(&arredondar2(&total))
    }

    pub fn calcular_frete(valor_pedido: f64, peso_kg: f64, regras: &RegrasFrete) -> f64 {
        if !validar_preco(valor_pedido) || !(peso_kg > 0.0) {
            return regras.taxa_base;
        }

        if let Some(limite) = regras.frete_gratis_a_partir_de {
            if limite > 0.0 && valor_pedido >= limite {
                return 0.0;
            }
        }

        let peso_efetivo = regras.peso_maximo.map_or(peso_kg, |maximo| peso_kg.min(maximo));
        let custo = regras.taxa_base + peso_efetivo * regras.taxa_por_kg;
        arredondar_preco(custo.max(0.0))
    }

    /// Valor do imposto; `taxa` entre 0 e 1 (0.23 = 23%).
    pub fn calcular_imposto(preco: f64, taxa: f64) -> f64 {
        if !(0.0..=1.0).contains(&taxa) {
            return 0.0;
        }
        match (exigir_preco_valido("preco", preco), decimal_de(taxa)) {
            (Ok(preco), Some(taxa)) => para_f64(&arredondar2(&(preco * taxa))),
            _ => 0.0,
        }
    }

    /// Preço com imposto. Devolve o preço sem alteração se a entrada for inválida.
    pub fn preco_com_imposto(preco: f64, taxa: f64) -> f64 {
        if !(taxa >= 0.0) {
            return preco;
        }
        match (exigir_preco_valido("preco", preco), decimal_de(taxa)) {
            (Ok(preco), Some(taxa)) => para_f64(&arredondar2(&(preco * (BigDecimal::from(1) + taxa)))),
            _ => preco,
        }
    }
}

/// Câmbio: taxas vigentes, conversão em lote e formato de resposta da API.
pub mod cambio {
    use bigdecimal::BigDecimal;

    use crate::precos::precos_constantes::{Moeda, TAXAS_CAMBIO};
    use crate::precos::precos_conversao::{arredondar2, converter_brl_para_eur, decimal_de, para_f64};
    use crate::precos::precos_formatacao::{formatar_preco, formatar_preco_duplo};
    use crate::precos::precos_structs::{InfoCambio, PrecoApi, ValorFormatado};

    pub fn info_cambio() -> InfoCambio {
        let base = decimal_de(TAXAS_CAMBIO.brl_para_eur_base).unwrap_or_default();
        let margem = decimal_de(TAXAS_CAMBIO.margem_lucro).unwrap_or_default();

        InfoCambio {
            brl_para_eur_base: TAXAS_CAMBIO.brl_para_eur_base,
            margem_lucro: TAXAS_CAMBIO.margem_lucro,
            taxa_efetiva: para_f64(&(base * margem)),
        }
    }

    /// Converte vários preços de uma vez; um preço inválido vira 0 e gera um aviso no log.
    pub fn converter_lote(precos_brl: &[f64]) -> Vec<f64> {
        precos_brl
            .iter()
            .map(|brl| match converter_brl_para_eur(*brl) {
                Ok(eur) => eur,
                Err(e) => {
                    log::warn!("Falha ao converter preço {}: {}", brl, e);
                    0.0
                }
            })
            .collect()
    }

    fn valor_formatado(valor: f64, moeda: Moeda) -> ValorFormatado {
        ValorFormatado {
            valor: arredondar2(&decimal_de(valor).unwrap_or_default()),
            formatado: formatar_preco(valor, moeda, None),
        }
    }

    /// Preço nas duas moedas para respostas da API. Entrada inválida vira zero.
    pub fn formatar_para_api(brl: f64) -> PrecoApi {
        match converter_brl_para_eur(brl) {
            Ok(eur) => PrecoApi {
                brl: valor_formatado(brl, Moeda::BRL),
                eur: valor_formatado(eur, Moeda::EUR),
                duplo: formatar_preco_duplo(brl, true),
            },
            Err(_) => {
                let zero = arredondar2(&BigDecimal::default());
                PrecoApi {
                    brl: ValorFormatado { valor: zero.clone(), formatado: formatar_preco(0.0, Moeda::BRL, None) },
                    eur: ValorFormatado { valor: zero, formatado: formatar_preco(0.0, Moeda::EUR, None) },
                    duplo: formatar_preco_duplo(0.0, true),
                }
            }
        }
    }
}

/// Tratamento de preços digitados pelo usuário.
pub mod entrada {
    use bigdecimal::BigDecimal;

    use crate::precos::precos_constantes::VALIDACAO_PRECO;
    use crate::precos::precos_conversao::{
        arredondar2, arredondar_preco, converter_brl_para_eur, exigir_preco_valido, para_f64, validar_preco,
    };
    use crate::precos::precos_formatacao::{formatar_preco_duplo, interpretar_preco};
    use crate::precos::precos_structs::{EntradaPreco, SugestaoPreco, ValidacaoFaixa};

    pub const VARIACOES_PADRAO: [i32; 5] = [-20, -10, 0, 10, 20];

    /// Preço validado e arredondado, ou `None`.
    pub fn sanitizar_entrada(entrada: &EntradaPreco) -> Option<f64> {
        let preco = match entrada {
            EntradaPreco::Numero(numero) => *numero,
            EntradaPreco::Texto(texto) => interpretar_preco(texto)?,
        };
        if validar_preco(preco) {
            Some(arredondar_preco(preco))
        } else {
            None
        }
    }

    fn rotulo(variacao: i32) -> String {
        match variacao {
            0 => "Preço base".to_string(),
            v if v > 0 => format!("+{}%", v),
            v => format!("{}%", v),
        }
    }

    /// Sugestões de preço variando o preço base pelos percentuais informados.
    /// Variações que levam a um preço inválido são descartadas.
    pub fn sugestoes_preco(base: f64, variacoes: &[i32]) -> Vec<SugestaoPreco> {
        let base = match exigir_preco_valido("base", base) {
            Ok(decimal) => decimal,
            Err(_) => return Vec::new(),
        };

        variacoes
            .iter()
            .filter_map(|variacao| {
                let fator = BigDecimal::from(1) + BigDecimal::from(*variacao) / BigDecimal::from(100);
                let ajustado = para_f64(&arredondar2(&(&base * fator)));

                match converter_brl_para_eur(ajustado) {
                    Ok(eur) => Some(SugestaoPreco {
                        variacao: *variacao,
                        brl: ajustado,
                        eur,
                        rotulo: rotulo(*variacao),
                        formatado_duplo: formatar_preco_duplo(ajustado, true),
                    }),
                    Err(e) => {
                        log::warn!("Sugestão de {}% descartada: {}", variacao, e);
                        None
                    }
                }
            })
            .collect()
    }

    pub fn validar_faixa_preco(min: f64, max: f64) -> ValidacaoFaixa {
        let min_valido = validar_preco(min);
        let max_valido = validar_preco(max);
        let mut erros = Vec::new();

        if !min_valido {
            erros.push("Preço mínimo inválido".to_string());
        }
        if !max_valido {
            erros.push("Preço máximo inválido".to_string());
        }
        if min_valido && max_valido && min > max {
            erros.push("Preço mínimo não pode ser maior que o máximo".to_string());
        }

        let sanitizar = |preco: f64, valido: bool| {
            if valido {
                arredondar_preco(preco)
            } else {
                VALIDACAO_PRECO.min_preco
            }
        };

        ValidacaoFaixa {
            valida: erros.is_empty(),
            erros,
            min_sanitizado: sanitizar(min, min_valido),
            max_sanitizado: sanitizar(max, max_valido),
        }
    }
}
