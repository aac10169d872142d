// tests/precos_api.rs

use actix_web::{test, App};
use serde_json::{json, Value};

use bellavibe_precos::precos::precos_router;

macro_rules! app {
    () => {
        test::init_service(App::new().configure(precos_router::configurar)).await
    };
}

#[actix_web::test]
async fn test_cambio() {
    let app = app!();
    let req = test::TestRequest::get().uri("/precos/cambio").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["status"], "success");
    assert_eq!(resp["body"]["brl_para_eur_base"], json!(0.2));
    assert_eq!(resp["body"]["taxa_efetiva"], json!(0.3));
}

#[actix_web::test]
async fn test_converter_preco() {
    let app = app!();
    let req = test::TestRequest::get().uri("/precos/converter?brl=100").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["body"]["eur"]["valor"], "30.00");
    assert_eq!(resp["body"]["eur"]["formatado"], "€30,00");
    assert_eq!(resp["body"]["duplo"], "€30,00 (R$ 100,00)");
}

#[actix_web::test]
async fn test_converter_preco_invalido() {
    let app = app!();
    let req = test::TestRequest::get().uri("/precos/converter?brl=10.123").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let corpo: Value = test::read_body_json(resp).await;
    assert_eq!(corpo["status"], "error");
    assert!(corpo["message"].as_str().unwrap().contains("brl"));
    assert!(corpo.get("body").is_none());
}

#[actix_web::test]
async fn test_formatar_com_localidade() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/precos/formatar?valor=1234.5&moeda=EUR&localidade=en-IE")
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["body"]["formatado"], "€1,234.50");

    // Valor inválido ainda responde 200 com o zero formatado
    let req = test::TestRequest::get().uri("/precos/formatar?valor=-1&moeda=BRL").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["body"]["formatado"], "R$ 0,00");
}

#[actix_web::test]
async fn test_interpretar() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/precos/interpretar?texto=R%24%201.234%2C56")
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["body"]["valor"], json!(1234.56));

    let req = test::TestRequest::get().uri("/precos/interpretar?texto=garbage").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_desconto() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/precos/desconto?original=100&venda=80")
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["body"]["percentual"], 20);
    assert_eq!(resp["body"]["economia"], "Save €20,00");
    assert_eq!(resp["body"]["formatado"], "€80,00 (was €100,00, 20% off)");

    let req = test::TestRequest::get()
        .uri("/precos/desconto?original=100&venda=-3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_lote() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/precos/lote")
        .set_json(json!({ "precos_brl": [100.0, -1.0, 59.9] }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["body"], json!([30.0, 0.0, 17.97]));
}

#[actix_web::test]
async fn test_sugestoes() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/precos/sugestoes")
        .set_json(json!({ "base": 100.0 }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    let sugestoes = resp["body"].as_array().unwrap();
    assert_eq!(sugestoes.len(), 5);
    assert_eq!(sugestoes[2]["rotulo"], "Preço base");

    let req = test::TestRequest::post()
        .uri("/precos/sugestoes")
        .set_json(json!({ "base": 100.0, "variacoes": [15] }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["body"][0]["brl"], json!(115.0));

    let req = test::TestRequest::post()
        .uri("/precos/sugestoes")
        .set_json(json!({ "base": -100.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_faixa() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/precos/faixa")
        .set_json(json!({ "min": 50.0, "max": 20.0 }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["body"]["valida"], false);
    assert_eq!(resp["body"]["erros"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_converter_zero_mantem_duas_casas() {
    let app = app!();
    let req = test::TestRequest::get().uri("/precos/converter?brl=0").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["body"]["brl"]["valor"], "0.00");
    assert_eq!(resp["body"]["eur"]["valor"], "0.00");
    assert_eq!(resp["body"]["duplo"], "€0,00 (R$ 0,00)");
}

#[actix_web::test]
async fn test_query_malformada_responde_no_envelope() {
    let app = app!();
    for uri in ["/precos/converter?brl=abc", "/precos/converter", "/precos/formatar?valor=30&moeda=USD"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{}", uri);

        let corpo: Value = test::read_body_json(resp).await;
        assert_eq!(corpo["status"], "error", "{}", uri);
        assert!(corpo["message"].as_str().is_some_and(|m| !m.is_empty()), "{}", uri);
        assert!(corpo.get("body").is_none(), "{}", uri);
    }
}

#[actix_web::test]
async fn test_json_malformado_responde_no_envelope() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/precos/faixa")
        .set_json(json!({ "min": 10.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let corpo: Value = test::read_body_json(resp).await;
    assert_eq!(corpo["status"], "error");
    assert!(corpo["message"].as_str().unwrap().contains("max"));
}

#[actix_web::test]
async fn test_moeda_e_localidade_ignoram_caixa() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/precos/formatar?valor=30&moeda=eur&localidade=PT-br")
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["body"]["formatado"], "€30,00");

    let req = test::TestRequest::get()
        .uri("/precos/desconto?original=100&venda=80&moeda=brl")
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["body"]["economia"], "Save R$ 20,00");
}
