// src/pedido/mod.rs

// Declara o submódulo que contém as definições das structs do pedido
pub mod pedido_structs;
// Declara o submódulo com os cálculos monetários do pedido
pub mod pedido_calculos;
// Declara o submódulo que monta o texto do recibo
pub mod pedido_recibo;
