// src/console/console_router.rs

use std::fs;
use std::io::BufRead;

use bigdecimal::BigDecimal;
use chrono::Local;

// Importa as structs necessárias do módulo de cardápio
use crate::cardapio::cardapio_structs::Cardapio;
// Importa o pedido do módulo raiz do crate
use crate::pedido::pedido_structs::Pedido;
// Importa a configuração e a formatação monetária do módulo shared
use crate::shared::shared_config::Config;
use crate::shared::shared_moeda::{formatar_valor, fracao_percentual};

use super::console_input::{ler_inteiro, ler_linha, ler_sim_nao};

// Nome usado no recibo quando o cliente não informa o seu
const CLIENTE_PADRAO: &str = "Guest";

/// Imprime o cardápio agrupado por categoria, na ordem do arquivo.
pub fn exibir_cardapio(cardapio: &Cardapio) {
    println!("\n========== MENU ==========");

    if cardapio.esta_vazio() {
        println!("(the menu is empty)");
    }

    for (categoria, itens) in cardapio.por_categoria() {
        println!("\n--- {} ---", categoria.to_uppercase());
        for item in itens {
            println!("{}. {:<20} ${}", item.id, item.nome, formatar_valor(&item.preco));
        }
    }

    println!("\n==========================\n");
}

/// Laço de escolha de itens: número do item (0 volta ao menu
/// principal), quantidade mínima 1 e confirmação para continuar.
pub fn handle_adicionar_item(pedido: &mut Pedido, cardapio: &Cardapio, leitor: &mut impl BufRead) {
    loop {
        exibir_cardapio(cardapio);
        println!("Enter 0 to go back to the main menu.");

        let escolha = match ler_inteiro(leitor, "Choose item number: ", Some(0), None) {
            Some(escolha) => escolha,
            None => break,
        };

        if escolha == 0 {
            break;
        }

        let item = match cardapio.obter(escolha) {
            Some(item) => item.clone(),
            None => {
                println!("That item number is not on the menu.");
                continue;
            }
        };

        let quantidade = match ler_inteiro(leitor, "Quantity: ", Some(1), None) {
            Some(quantidade) => quantidade,
            None => break,
        };

        // O prompt já garante quantidade >= 1; o pedido valida de novo
        match pedido.adicionar_item(item.clone(), quantidade) {
            Ok(()) => println!("Added {} x {}", quantidade, item.nome),
            Err(e) => eprintln!("Could not add item: {}", e),
        }

        match ler_sim_nao(leitor, "Add another item? (y/n): ") {
            Some(true) => continue,
            _ => break,
        }
    }
}

/// Mostra o conteúdo atual do pedido.
pub fn handle_ver_pedido(pedido: &Pedido) {
    println!("\n========== CURRENT ORDER ==========");
    if pedido.esta_vazio() {
        println!("Your order is empty.");
    } else {
        println!("{}", pedido.resumo_itens());
    }
    println!("===================================\n");
}

/// Pergunta se o cliente quer deixar gorjeta e devolve a fração exata
/// (percentual inteiro de 0 a 100 dividido por 100).
pub fn perguntar_gorjeta(leitor: &mut impl BufRead) -> BigDecimal {
    match ler_sim_nao(leitor, "Would you like to leave a tip? (y/n): ") {
        Some(true) => match ler_inteiro(leitor, "Tip %: ", Some(0), Some(100)) {
            Some(percentual) => fracao_percentual(percentual),
            None => BigDecimal::from(0),
        },
        _ => BigDecimal::from(0),
    }
}

/// Fecha o pedido: nome do cliente (Guest quando em branco), gorjeta,
/// prévia do recibo na tela e gravação no arquivo configurado.
/// Pedido vazio é recusado com aviso, sem erro.
pub fn handle_checkout(pedido: &Pedido, config: &Config, leitor: &mut impl BufRead) {
    if pedido.esta_vazio() {
        println!("You cannot checkout. Your order is empty.");
        return;
    }

    let nome = match ler_linha(leitor, "Enter your name for the receipt: ") {
        Some(nome) if !nome.is_empty() => nome,
        _ => CLIENTE_PADRAO.to_string(),
    };

    let aliquota_gorjeta = perguntar_gorjeta(leitor);

    // As alíquotas chegam validadas aqui (config e prompt); se algo
    // escapar, o erro é reportado e o pedido continua intacto.
    let recibo = match pedido.texto_recibo(&nome, &config.taxa_imposto, &aliquota_gorjeta) {
        Ok(texto) => texto,
        Err(e) => {
            eprintln!("Could not build the receipt: {}", e);
            return;
        }
    };

    println!("\n======= RECEIPT PREVIEW =======");
    println!("{}", recibo);
    println!("================================\n");

    salvar_recibo(&config.caminho_recibo, &recibo);
}

/// Grava o texto já composto do recibo. Falha de escrita não é fatal:
/// a prévia na tela continua valendo.
pub fn salvar_recibo(caminho: &str, texto: &str) {
    match fs::write(caminho, texto) {
        Ok(()) => println!(
            "Receipt saved to {} at {}",
            caminho,
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ),
        Err(e) => eprintln!("ERROR: Could not write the receipt file: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cardapio::cardapio_structs::ItemCardapio;
    use std::io::Cursor;

    fn cardapio_exemplo() -> Cardapio {
        let mut cardapio = Cardapio::default();
        cardapio.inserir(ItemCardapio {
            id: 1,
            nome: "Burger".to_string(),
            preco: "10.00".parse().unwrap(),
            categoria: "Entree".to_string(),
        });
        cardapio.inserir(ItemCardapio {
            id: 2,
            nome: "Cola".to_string(),
            preco: "3.00".parse().unwrap(),
            categoria: "Drink".to_string(),
        });
        cardapio
    }

    fn decimal(texto: &str) -> BigDecimal {
        texto.parse().unwrap()
    }

    #[test]
    fn adicionar_item_segue_o_roteiro_do_terminal() {
        let mut pedido = Pedido::novo();
        // item 1, quantidade 2, continuar; item 2, quantidade 1, parar
        let mut entrada = Cursor::new("1\n2\ny\n2\n1\nn\n");

        handle_adicionar_item(&mut pedido, &cardapio_exemplo(), &mut entrada);

        assert_eq!(pedido.itens().len(), 2);
        assert_eq!(pedido.itens()[0].item.nome, "Burger");
        assert_eq!(pedido.itens()[0].quantidade, 2);
        assert_eq!(pedido.itens()[1].item.nome, "Cola");
    }

    #[test]
    fn item_fora_do_cardapio_reapresenta_o_cardapio() {
        let mut pedido = Pedido::novo();
        // 99 não existe; depois item 1, quantidade 1, parar
        let mut entrada = Cursor::new("99\n1\n1\nn\n");

        handle_adicionar_item(&mut pedido, &cardapio_exemplo(), &mut entrada);

        assert_eq!(pedido.itens().len(), 1);
        assert_eq!(pedido.itens()[0].quantidade, 1);
    }

    #[test]
    fn zero_volta_sem_mexer_no_pedido() {
        let mut pedido = Pedido::novo();
        let mut entrada = Cursor::new("0\n");

        handle_adicionar_item(&mut pedido, &cardapio_exemplo(), &mut entrada);

        assert!(pedido.esta_vazio());
    }

    #[test]
    fn fim_da_entrada_encerra_o_laco_sem_panico() {
        let mut pedido = Pedido::novo();
        let mut entrada = Cursor::new("1\n");

        handle_adicionar_item(&mut pedido, &cardapio_exemplo(), &mut entrada);

        assert!(pedido.esta_vazio());
    }

    #[test]
    fn gorjeta_recusada_e_zero() {
        let mut entrada = Cursor::new("n\n");

        assert_eq!(perguntar_gorjeta(&mut entrada), BigDecimal::from(0));
    }

    #[test]
    fn gorjeta_aceita_vira_fracao() {
        let mut entrada = Cursor::new("y\n15\n");

        assert_eq!(perguntar_gorjeta(&mut entrada), decimal("0.15"));
    }

    #[test]
    fn checkout_grava_o_recibo_com_o_nome_informado() {
        let mut pedido = Pedido::novo();
        pedido
            .adicionar_item(cardapio_exemplo().obter(1).unwrap().clone(), 2)
            .unwrap();

        let caminho = std::env::temp_dir().join("comanda_recibo_teste.txt");
        let config = Config {
            caminho_cardapio: "menu.txt".to_string(),
            caminho_recibo: caminho.to_string_lossy().to_string(),
            taxa_imposto: decimal("0.08"),
        };

        let mut entrada = Cursor::new("Ana\ny\n15\n");
        handle_checkout(&pedido, &config, &mut entrada);

        let gravado = fs::read_to_string(&caminho).unwrap();
        assert!(gravado.contains("Customer: Ana"));
        assert!(gravado.contains("Burger x 2 @ $10.00 = $20.00"));
        assert!(gravado.contains("TOTAL:"));

        let _ = fs::remove_file(&caminho);
    }

    #[test]
    fn checkout_sem_nome_usa_guest() {
        let mut pedido = Pedido::novo();
        pedido
            .adicionar_item(cardapio_exemplo().obter(2).unwrap().clone(), 1)
            .unwrap();

        let caminho = std::env::temp_dir().join("comanda_recibo_guest_teste.txt");
        let config = Config {
            caminho_cardapio: "menu.txt".to_string(),
            caminho_recibo: caminho.to_string_lossy().to_string(),
            taxa_imposto: decimal("0.08"),
        };

        // nome em branco, sem gorjeta
        let mut entrada = Cursor::new("\nn\n");
        handle_checkout(&pedido, &config, &mut entrada);

        let gravado = fs::read_to_string(&caminho).unwrap();
        assert!(gravado.contains("Customer: Guest"));
        assert!(gravado.contains("Tip:      $0.00"));

        let _ = fs::remove_file(&caminho);
    }

    #[test]
    fn checkout_de_pedido_vazio_nao_grava_nada() {
        let caminho = std::env::temp_dir().join("comanda_recibo_vazio_teste.txt");
        let _ = fs::remove_file(&caminho);

        let config = Config {
            caminho_cardapio: "menu.txt".to_string(),
            caminho_recibo: caminho.to_string_lossy().to_string(),
            taxa_imposto: decimal("0.08"),
        };

        let mut entrada = Cursor::new("");
        handle_checkout(&Pedido::novo(), &config, &mut entrada);

        assert!(!caminho.exists());
    }
}
