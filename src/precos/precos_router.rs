// src/precos/precos_router.rs

use actix_web::{error::InternalError, get, post, web, HttpResponse};

use super::precos_constantes::Moeda;
use super::precos_conversao::{calcular_desconto, converter_brl_para_eur, validar_preco};
use super::precos_erros::ErroPreco;
use super::precos_formatacao::{formatar_desconto, formatar_economia, formatar_preco, interpretar_preco};
use super::precos_structs::{
    ConsultaConversao, ConsultaDesconto, ConsultaFormatacao, ConsultaInterpretacao, DescontoResponse,
    FormatacaoResponse, InterpretacaoResponse, SolicitacaoFaixa, SolicitacaoLote, SolicitacaoSugestoes,
};
use super::precos_utilitarios::{cambio, entrada};
// Importa GenericResponse do módulo shared_structs
use crate::shared::shared_structs::GenericResponse;

/// Resposta 400 padrão para erros de preço.
fn erro_preco(e: ErroPreco) -> HttpResponse {
    log::warn!("Requisição rejeitada: {}", e);
    HttpResponse::BadRequest().json(GenericResponse::<()>::erro(e.to_string()))
}

/// Query ou JSON malformado também responde 400 dentro do GenericResponse.
fn erro_extracao(mensagem: String) -> actix_web::Error {
    log::warn!("Requisição malformada: {}", mensagem);
    let resposta = HttpResponse::BadRequest().json(GenericResponse::<()>::erro(mensagem.clone()));
    InternalError::from_response(mensagem, resposta).into()
}

/// Rota com as taxas de câmbio vigentes.
#[get("/precos/cambio")]
pub async fn buscar_cambio() -> HttpResponse {
    HttpResponse::Ok().json(GenericResponse::sucesso("Taxas de câmbio vigentes", cambio::info_cambio()))
}

/// Rota para converter um preço em BRL.
/// Retorna o preço nas duas moedas, já formatado.
#[get("/precos/converter")]
pub async fn converter_preco(consulta: web::Query<ConsultaConversao>) -> HttpResponse {
    // Valida antes de montar a resposta; formatar_para_api sozinho zeraria o preço
    if let Err(e) = converter_brl_para_eur(consulta.brl) {
        return erro_preco(e);
    }

    HttpResponse::Ok().json(GenericResponse::sucesso(
        "Preço convertido com sucesso!",
        cambio::formatar_para_api(consulta.brl),
    ))
}

/// Rota para formatar um valor em uma moeda (e localidade opcional).
#[get("/precos/formatar")]
pub async fn formatar_valor(consulta: web::Query<ConsultaFormatacao>) -> HttpResponse {
    let formatado = formatar_preco(consulta.valor, consulta.moeda, consulta.localidade);

    HttpResponse::Ok().json(GenericResponse::sucesso("Preço formatado", FormatacaoResponse { formatado }))
}

/// Rota para interpretar um preço digitado ("R$ 1.234,56").
#[get("/precos/interpretar")]
pub async fn interpretar_valor(consulta: web::Query<ConsultaInterpretacao>) -> HttpResponse {
    match interpretar_preco(&consulta.texto) {
        Some(valor) => HttpResponse::Ok().json(GenericResponse::sucesso(
            "Preço interpretado",
            InterpretacaoResponse { valor },
        )),
        None => {
            log::warn!("Texto de preço não reconhecido: {:?}", consulta.texto);
            HttpResponse::BadRequest().json(GenericResponse::<()>::erro(format!(
                "Não foi possível interpretar '{}' como preço.",
                consulta.texto
            )))
        }
    }
}

/// Rota para calcular o desconto entre o preço original e o de venda.
#[get("/precos/desconto")]
pub async fn calcular_desconto_preco(consulta: web::Query<ConsultaDesconto>) -> HttpResponse {
    let percentual = match calcular_desconto(consulta.original, consulta.venda) {
        Ok(percentual) => percentual,
        Err(e) => return erro_preco(e),
    };
    let moeda = consulta.moeda.unwrap_or(Moeda::EUR);

    HttpResponse::Ok().json(GenericResponse::sucesso(
        "Desconto calculado",
        DescontoResponse {
            percentual,
            economia: formatar_economia(consulta.original, consulta.venda, moeda, None),
            formatado: formatar_desconto(consulta.original, consulta.venda, moeda, true, None),
        },
    ))
}

/// Rota para converter vários preços de uma vez.
/// Preços inválidos voltam como 0 (o aviso fica no log).
#[post("/precos/lote")]
pub async fn converter_lote(solicitacao: web::Json<SolicitacaoLote>) -> HttpResponse {
    let convertidos = cambio::converter_lote(&solicitacao.precos_brl);

    HttpResponse::Ok().json(GenericResponse::sucesso("Preços convertidos", convertidos))
}

/// Rota para gerar sugestões de preço a partir de um preço base em BRL.
#[post("/precos/sugestoes")]
pub async fn sugerir_precos(solicitacao: web::Json<SolicitacaoSugestoes>) -> HttpResponse {
    if !validar_preco(solicitacao.base) {
        return HttpResponse::BadRequest().json(GenericResponse::<()>::erro(
            "Preço base inválido para gerar sugestões.",
        ));
    }

    let variacoes = solicitacao
        .variacoes
        .as_deref()
        .unwrap_or(&entrada::VARIACOES_PADRAO[..]);
    let sugestoes = entrada::sugestoes_preco(solicitacao.base, variacoes);

    HttpResponse::Ok().json(GenericResponse::sucesso("Sugestões de preço", sugestoes))
}

/// Rota para validar uma faixa de preços (filtros de busca, por exemplo).
#[post("/precos/faixa")]
pub async fn validar_faixa(solicitacao: web::Json<SolicitacaoFaixa>) -> HttpResponse {
    let validacao = entrada::validar_faixa_preco(solicitacao.min, solicitacao.max);

    HttpResponse::Ok().json(GenericResponse::sucesso("Faixa de preços validada", validacao))
}

/// Registra todas as rotas de preços na aplicação.
pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| erro_extracao(err.to_string())))
        .app_data(web::JsonConfig::default().error_handler(|err, _req| erro_extracao(err.to_string())))
        .service(buscar_cambio)
        .service(converter_preco)
        .service(formatar_valor)
        .service(interpretar_valor)
        .service(calcular_desconto_preco)
        .service(converter_lote)
        .service(sugerir_precos)
        .service(validar_faixa);
}
