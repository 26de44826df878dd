// src/console/mod.rs

// Declara o submódulo com os utilitários de leitura do terminal
pub mod console_input;
// Declara o submódulo com os fluxos interativos (cardápio, pedido, checkout)
pub mod console_router;
