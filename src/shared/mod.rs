// src/shared/mod.rs

// Declara o submódulo com a configuração da sessão
pub mod shared_config;
// Declara o submódulo com a formatação monetária
pub mod shared_moeda;
