// src/console/console_input.rs

use std::io::{self, BufRead, Write};

// Leitura do terminal. As funções recebem o leitor como parâmetro para
// que os fluxos interativos possam ser testados com um buffer em
// memória; o main passa o lock do stdin.
//
// Devolver None significa que a entrada acabou (EOF): os fluxos tratam
// isso como encerramento, nunca como valor.

/// Mostra o prompt e lê uma linha já sem espaços nas bordas.
pub fn ler_linha(leitor: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut linha = String::new();
    match leitor.read_line(&mut linha) {
        Ok(0) => None, // fim da entrada
        Ok(_) => Some(linha.trim().to_string()),
        Err(e) => {
            eprintln!("Failed to read input: {:?}", e);
            None
        }
    }
}

/// Pede um número inteiro, reapresentando o prompt até receber um
/// valor válido dentro dos limites opcionais.
pub fn ler_inteiro(
    leitor: &mut impl BufRead,
    prompt: &str,
    minimo: Option<i32>,
    maximo: Option<i32>,
) -> Option<i32> {
    loop {
        let entrada = ler_linha(leitor, prompt)?;

        let numero = match entrada.parse::<i32>() {
            Ok(numero) => numero,
            Err(_) => {
                println!("Please enter a whole number.");
                continue;
            }
        };

        if let Some(minimo) = minimo {
            if numero < minimo {
                println!("Enter at least {}.", minimo);
                continue;
            }
        }

        if let Some(maximo) = maximo {
            if numero > maximo {
                println!("Enter at most {}.", maximo);
                continue;
            }
        }

        return Some(numero);
    }
}

/// Pergunta de sim ou não, reapresentada até receber y ou n.
pub fn ler_sim_nao(leitor: &mut impl BufRead, prompt: &str) -> Option<bool> {
    loop {
        let resposta = ler_linha(leitor, prompt)?.to_lowercase();

        match resposta.as_str() {
            "y" => return Some(true),
            "n" => return Some(false),
            _ => println!("Please enter y or n."),
        }
    }
}
