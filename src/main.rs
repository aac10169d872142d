// src/main.rs

use actix_web::{middleware, App, HttpServer};

use bellavibe_precos::precos::precos_router;
use bellavibe_precos::shared::configuracao::ConfiguracaoServidor;

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Logs em nível info por padrão; RUST_LOG sobrescreve
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Host e porta vêm de BELLAVIBE_HOST / BELLAVIBE_PORTA.
    // O '?' converte ErroConfiguracao em io::Error e encerra a aplicação.
    let config = ConfiguracaoServidor::do_ambiente()?;

    log::info!("Iniciando API de preços BellaVibe em {}:{}...", config.host, config.porta);

    // Configura e inicia o servidor HTTP.
    HttpServer::new(|| {
        App::new()
            // Log de acesso de cada requisição
            .wrap(middleware::Logger::default())
            // Módulo de Preços
            .configure(precos_router::configurar)
    })
    // Vincula o servidor ao endereço IP e porta. O '?' propaga erros.
    .bind(config.endereco())?
    // Inicia o servidor.
    .run()
    // Aguarda a finalização do servidor.
    .await
}
