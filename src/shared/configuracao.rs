// src/shared/configuracao.rs

use std::env;
use thiserror::Error;

pub const VAR_HOST: &str = "BELLAVIBE_HOST";
pub const VAR_PORTA: &str = "BELLAVIBE_PORTA";

#[derive(Error, Debug, PartialEq)]
pub enum ErroConfiguracao {
    #[error("Porta inválida em {variavel}: '{valor}'")]
    PortaInvalida { variavel: &'static str, valor: String },
}

impl From<ErroConfiguracao> for std::io::Error {
    fn from(e: ErroConfiguracao) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    }
}

/// Endereço em que a API escuta.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguracaoServidor {
    pub host: String,
    pub porta: u16,
}

impl Default for ConfiguracaoServidor {
    fn default() -> Self {
        ConfiguracaoServidor {
            host: "127.0.0.1".to_string(),
            porta: 8080,
        }
    }
}

impl ConfiguracaoServidor {
    /// Lê BELLAVIBE_HOST e BELLAVIBE_PORTA do ambiente.
    pub fn do_ambiente() -> Result<Self, ErroConfiguracao> {
        Self::da_fonte(|chave| env::var(chave).ok())
    }

    /// Carrega a configuração a partir de uma função de consulta (ambiente, testes).
    pub fn da_fonte<F>(consultar: F) -> Result<Self, ErroConfiguracao>
    where
        F: Fn(&str) -> Option<String>,
    {
        let padrao = ConfiguracaoServidor::default();

        let host = consultar(VAR_HOST)
            .filter(|host| !host.trim().is_empty())
            .unwrap_or(padrao.host);

        let porta = match consultar(VAR_PORTA) {
            Some(valor) => valor.trim().parse::<u16>().map_err(|_| ErroConfiguracao::PortaInvalida {
                variavel: VAR_PORTA,
                valor,
            })?,
            None => padrao.porta,
        };

        Ok(ConfiguracaoServidor { host, porta })
    }

    pub fn endereco(&self) -> (String, u16) {
        (self.host.clone(), self.porta)
    }
}
