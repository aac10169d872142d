// src/shared/mod.rs

// Envelope padrão das respostas da API
pub mod shared_structs;
// Configuração do servidor lida do ambiente
pub mod configuracao;
