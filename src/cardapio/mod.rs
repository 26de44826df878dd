// src/cardapio/mod.rs

// Declara o submódulo que contém as definições das structs do cardápio
pub mod cardapio_structs;
// Declara o submódulo que carrega o cardápio do arquivo texto
pub mod cardapio_loader;
