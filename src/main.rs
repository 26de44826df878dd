// src/main.rs

use std::io;

// Importa os módulos
//
// Importa o módulo 'cardapio' que contém as structs e a carga do cardápio.
// O Rust encontrará o arquivo `src/cardapio/mod.rs` e, a partir dele, os submódulos.
mod cardapio; // Módulo do cardápio
mod console;  // Módulo da interface de console
mod pedido;   // Módulo do pedido
mod shared;   // Módulo shared

use cardapio::cardapio_loader::carregar_cardapio;
use console::console_input::ler_inteiro;
use console::console_router::{handle_adicionar_item, handle_checkout, handle_ver_pedido};
use pedido::pedido_structs::Pedido;
use shared::shared_config::Config;

/// Imprime as opções do laço principal.
fn mostrar_menu_principal() {
    println!("========== RESTAURANT ==========");
    println!("1. View menu and add items");
    println!("2. View current order");
    println!("3. Checkout");
    println!("4. Exit");
    println!("================================");
}

fn main() {
    println!("Welcome to the Restaurant Ordering System!");

    // Configuração e cardápio são carregados uma única vez. O pedido
    // pertence a esta sessão do início ao fim: nada aqui é estado
    // global do processo.
    let config = Config::carregar();
    let cardapio = carregar_cardapio(&config.caminho_cardapio);
    println!("Loaded {} menu items.", cardapio.tamanho());

    let mut pedido = Pedido::novo();

    let stdin = io::stdin();
    let mut leitor = stdin.lock();

    loop {
        mostrar_menu_principal();

        // Fim da entrada (EOF) encerra a sessão como a opção 4
        let escolha = match ler_inteiro(&mut leitor, "Choose (1-4): ", Some(1), Some(4)) {
            Some(escolha) => escolha,
            None => 4,
        };

        match escolha {
            1 => handle_adicionar_item(&mut pedido, &cardapio, &mut leitor),
            2 => handle_ver_pedido(&pedido),
            3 => handle_checkout(&pedido, &config, &mut leitor),
            _ => {
                println!("Goodbye!");
                break;
            }
        }
    }
}
