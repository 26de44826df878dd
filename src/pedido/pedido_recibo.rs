// src/pedido/pedido_recibo.rs

use bigdecimal::BigDecimal;

use crate::shared::shared_moeda::formatar_valor;

use super::pedido_structs::{ErroPedido, Pedido};

/// Texto fixo devolvido no lugar do resumo quando o pedido não tem
/// nenhuma linha.
pub const PEDIDO_SEM_ITENS: &str = "No items in the order yet.";

// Renderização do pedido em texto. Nenhuma E/S acontece aqui: quem
// chama decide se imprime na tela ou grava em arquivo.
impl Pedido {
    /// Uma linha de texto por linha do pedido, na ordem de inclusão.
    /// Exemplo: `Burger x 2 @ $10.00 = $20.00`.
    pub fn resumo_itens(&self) -> String {
        if self.esta_vazio() {
            return PEDIDO_SEM_ITENS.to_string();
        }

        let mut linhas = Vec::new();

        for linha in self.itens() {
            let quantidade = BigDecimal::from(linha.quantidade);
            let total_linha = &linha.item.preco * &quantidade;

            linhas.push(format!(
                "{} x {} @ ${} = ${}",
                linha.item.nome,
                linha.quantidade,
                formatar_valor(&linha.item.preco),
                formatar_valor(&total_linha),
            ));
        }

        linhas.join("\n")
    }

    /// Monta o recibo completo como uma única string: banner, cliente,
    /// resumo dos itens e os quatro valores calculados, já com duas
    /// casas decimais.
    pub fn texto_recibo(
        &self,
        nome_cliente: &str,
        aliquota_imposto: &BigDecimal,
        aliquota_gorjeta: &BigDecimal,
    ) -> Result<String, ErroPedido> {
        let subtotal = self.subtotal();
        let imposto = self.imposto(aliquota_imposto)?;
        let gorjeta = self.gorjeta(aliquota_gorjeta)?;
        let total = self.total(aliquota_imposto, aliquota_gorjeta)?;

        let mut linhas = Vec::new();
        linhas.push("====================================".to_string());
        linhas.push("         RESTAURANT RECEIPT         ".to_string());
        linhas.push("====================================".to_string());
        linhas.push(format!("Customer: {}", nome_cliente));
        linhas.push(String::new());
        linhas.push("Items:".to_string());
        linhas.push(self.resumo_itens());
        linhas.push(String::new());
        linhas.push(format!("Subtotal: ${}", formatar_valor(&subtotal)));
        linhas.push(format!("Tax:      ${}", formatar_valor(&imposto)));
        linhas.push(format!("Tip:      ${}", formatar_valor(&gorjeta)));
        linhas.push("------------------------------------".to_string());
        linhas.push(format!("TOTAL:    ${}", formatar_valor(&total)));
        linhas.push("====================================".to_string());
        linhas.push(" Thank you for your order!".to_string());
        linhas.push("====================================".to_string());

        Ok(linhas.join("\n"))
    }
}
