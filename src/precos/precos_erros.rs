// src/precos/precos_erros.rs

use std::fmt;
use thiserror::Error;

/// Motivo pelo qual um preço foi rejeitado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotivoInvalido {
    NaoFinito,
    AbaixoDoMinimo,
    AcimaDoMaximo,
    CasasDecimaisExcedidas,
}

impl fmt::Display for MotivoInvalido {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texto = match self {
            MotivoInvalido::NaoFinito => "valor não finito",
            MotivoInvalido::AbaixoDoMinimo => "abaixo do preço mínimo",
            MotivoInvalido::AcimaDoMaximo => "acima do preço máximo",
            MotivoInvalido::CasasDecimaisExcedidas => "mais de 2 casas decimais",
        };
        f.write_str(texto)
    }
}

/// Erros das funções aritméticas de preço.
/// As funções de formatação nunca retornam estes erros.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErroPreco {
    #[error("Preço inválido em '{argumento}' ({valor}): {motivo}")]
    PrecoInvalido {
        argumento: &'static str,
        valor: f64,
        motivo: MotivoInvalido,
    },

    #[error("Percentual de desconto inválido: {percentual} (esperado entre 0 e 100)")]
    DescontoInvalido { percentual: f64 },
}
