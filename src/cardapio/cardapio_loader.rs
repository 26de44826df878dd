// src/cardapio/cardapio_loader.rs

use std::fs::File;
use std::io::{BufRead, BufReader};

use bigdecimal::BigDecimal;
use thiserror::Error;

// Importa as structs definidas no módulo `cardapio_structs` dentro da mesma pasta `cardapio`
use super::cardapio_structs::{Cardapio, ItemCardapio};

/// Problemas encontrados em uma linha do arquivo de cardápio.
/// Nenhum deles interrompe a carga: a linha é pulada com um diagnóstico.
#[derive(Debug, Error, PartialEq)]
pub enum ErroCardapio {
    #[error("expected 4 fields (id,name,price,category), found {encontrados}")]
    NumeroDeCampos { encontrados: usize },

    #[error("item id is not an integer: {valor}")]
    IdInvalido { valor: String },

    #[error("item id must be positive: {id}")]
    IdNaoPositivo { id: i32 },

    #[error("item name is empty")]
    NomeVazio,

    #[error("price is not a decimal number: {valor}")]
    PrecoInvalido { valor: String },

    #[error("price cannot be negative: {preco}")]
    PrecoNegativo { preco: BigDecimal },

    #[error("category is empty")]
    CategoriaVazia,
}

/// Interpreta uma linha `id,nome,preco,categoria` do arquivo.
/// Não há escape de vírgula dentro dos campos: uma vírgula no nome
/// muda a contagem de campos e a linha é rejeitada.
pub fn parsear_linha(linha: &str) -> Result<ItemCardapio, ErroCardapio> {
    let partes: Vec<&str> = linha.split(',').collect();

    if partes.len() != 4 {
        return Err(ErroCardapio::NumeroDeCampos { encontrados: partes.len() });
    }

    let id = partes[0]
        .trim()
        .parse::<i32>()
        .map_err(|_| ErroCardapio::IdInvalido { valor: partes[0].trim().to_string() })?;
    if id <= 0 {
        return Err(ErroCardapio::IdNaoPositivo { id });
    }

    let nome = partes[1].trim();
    if nome.is_empty() {
        return Err(ErroCardapio::NomeVazio);
    }

    let preco = partes[2]
        .trim()
        .parse::<BigDecimal>()
        .map_err(|_| ErroCardapio::PrecoInvalido { valor: partes[2].trim().to_string() })?;
    if preco < BigDecimal::from(0) {
        return Err(ErroCardapio::PrecoNegativo { preco });
    }

    let categoria = partes[3].trim();
    if categoria.is_empty() {
        return Err(ErroCardapio::CategoriaVazia);
    }

    Ok(ItemCardapio {
        id,
        nome: nome.to_string(),
        preco,
        categoria: categoria.to_string(),
    })
}

/// Lê o cardápio de qualquer fonte de linhas (arquivo ou, nos testes,
/// um buffer em memória). Linhas em branco e comentários (`#`) são
/// ignorados; linhas malformadas são puladas com diagnóstico; um id
/// repetido substitui o descritor anterior.
pub fn ler_cardapio(leitor: impl BufRead) -> Cardapio {
    let mut cardapio = Cardapio::default();

    for linha in leitor.lines() {
        let linha = match linha {
            Ok(linha) => linha,
            Err(e) => {
                eprintln!("Skipping unreadable menu line: {:?}", e);
                continue;
            }
        };

        let linha = linha.trim();

        if linha.is_empty() || linha.starts_with('#') {
            continue;
        }

        match parsear_linha(linha) {
            Ok(item) => cardapio.inserir(item),
            Err(e) => eprintln!("Skipping bad menu line \"{}\": {}", linha, e),
        }
    }

    cardapio
}

/// Carrega o cardápio do caminho configurado. Arquivo ausente não é
/// fatal: o diagnóstico é emitido e o programa segue com o cardápio
/// vazio.
pub fn carregar_cardapio(caminho: &str) -> Cardapio {
    match File::open(caminho) {
        Ok(arquivo) => ler_cardapio(BufReader::new(arquivo)),
        Err(e) => {
            eprintln!("ERROR: Cannot open menu file {}: {}", caminho, e);
            Cardapio::default()
        }
    }
}
