// src/precos/mod.rs

// Constantes de câmbio, limites de preço, moedas e localidades
pub mod precos_constantes;
// Erros tipados das operações aritméticas
pub mod precos_erros;
// Conversão BRL <-> EUR, margem e descontos (falham com ErroPreco)
pub mod precos_conversao;
// Formatação para exibição (nunca falha)
pub mod precos_formatacao;
// Comparação, cálculos de carrinho, câmbio em lote e entrada do usuário
pub mod precos_utilitarios;
// Structs das rotas e dos utilitários
pub mod precos_structs;
// Rotas HTTP de preços
pub mod precos_router;
