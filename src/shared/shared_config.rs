// src/shared/shared_config.rs

use std::env;
use std::fs;

use bigdecimal::BigDecimal;
use serde::Deserialize;

// Arquivo opcional de configuração, procurado no diretório atual
const CAMINHO_CONFIG: &str = "comanda.json";

/// Valores que o arquivo de configuração pode fornecer. Todos são
/// opcionais: o que faltar fica com o padrão. A alíquota deve vir como
/// string JSON ("0.08") para não passar por ponto flutuante.
#[derive(Deserialize)]
struct ConfigArquivo {
    caminho_cardapio: Option<String>,
    caminho_recibo: Option<String>,
    taxa_imposto: Option<BigDecimal>,
}

/// Configuração efetiva da sessão: os caminhos dos dois arquivos que o
/// programa toca e a alíquota de imposto.
#[derive(Debug, Clone)]
pub struct Config {
    pub caminho_cardapio: String,
    pub caminho_recibo: String,
    pub taxa_imposto: BigDecimal,
}

impl Config {
    pub fn padrao() -> Self {
        Self {
            caminho_cardapio: "menu.txt".to_string(),
            caminho_recibo: "receipt.txt".to_string(),
            taxa_imposto: taxa_padrao(),
        }
    }

    /// Carrega a configuração em camadas: padrões, depois comanda.json
    /// (se existir), depois as variáveis de ambiente COMANDA_*.
    /// Qualquer valor inválido é reportado e ignorado; nada aqui é
    /// fatal.
    pub fn carregar() -> Self {
        let mut config = Self::padrao();

        if let Ok(conteudo) = fs::read_to_string(CAMINHO_CONFIG) {
            match serde_json::from_str::<ConfigArquivo>(&conteudo) {
                Ok(arquivo) => config.aplicar_arquivo(arquivo),
                Err(e) => eprintln!("Ignoring invalid {}: {}", CAMINHO_CONFIG, e),
            }
        }

        if let Ok(valor) = env::var("COMANDA_CARDAPIO") {
            config.caminho_cardapio = valor;
        }
        if let Ok(valor) = env::var("COMANDA_RECIBO") {
            config.caminho_recibo = valor;
        }
        if let Ok(valor) = env::var("COMANDA_TAXA") {
            config.definir_taxa_texto(&valor);
        }

        config
    }

    fn aplicar_arquivo(&mut self, arquivo: ConfigArquivo) {
        if let Some(caminho) = arquivo.caminho_cardapio {
            self.caminho_cardapio = caminho;
        }
        if let Some(caminho) = arquivo.caminho_recibo {
            self.caminho_recibo = caminho;
        }
        if let Some(taxa) = arquivo.taxa_imposto {
            self.definir_taxa(taxa);
        }
    }

    fn definir_taxa_texto(&mut self, texto: &str) {
        match texto.parse::<BigDecimal>() {
            Ok(taxa) => self.definir_taxa(taxa),
            Err(_) => eprintln!("Ignoring invalid tax rate: {}", texto),
        }
    }

    // A alíquota de imposto precisa ser uma fração em [0, 1]
    fn definir_taxa(&mut self, taxa: BigDecimal) {
        if taxa < BigDecimal::from(0) || taxa > BigDecimal::from(1) {
            eprintln!("Ignoring out-of-range tax rate: {}", taxa);
            return;
        }

        self.taxa_imposto = taxa;
    }
}

// 8% de imposto quando nada for configurado
fn taxa_padrao() -> BigDecimal {
    BigDecimal::from(8) / BigDecimal::from(100)
}
