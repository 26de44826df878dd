// src/pedido/pedido_calculos.rs

use bigdecimal::BigDecimal;

use super::pedido_structs::{ErroPedido, Pedido};

// Cálculos monetários do pedido. Tudo aqui é função pura do estado
// atual: chamar repetidas vezes devolve o mesmo valor e não tem efeito
// colateral. Os resultados ficam sem arredondamento; as duas casas
// decimais são aplicadas somente na renderização.
impl Pedido {
    /// Soma de preço x quantidade de todas as linhas. Pedido vazio
    /// devolve zero.
    pub fn subtotal(&self) -> BigDecimal {
        let mut subtotal = BigDecimal::from(0);

        for linha in self.itens() {
            let quantidade = BigDecimal::from(linha.quantidade);
            subtotal += &linha.item.preco * &quantidade;
        }

        subtotal
    }

    /// Imposto sobre o subtotal. A alíquota precisa ser uma fração em
    /// [0, 1] (ex.: 0.08 para 8%).
    pub fn imposto(&self, aliquota: &BigDecimal) -> Result<BigDecimal, ErroPedido> {
        validar_aliquota(aliquota)?;
        Ok(self.subtotal() * aliquota)
    }

    /// Gorjeta sobre o subtotal, com o mesmo contrato do imposto.
    pub fn gorjeta(&self, aliquota: &BigDecimal) -> Result<BigDecimal, ErroPedido> {
        validar_aliquota(aliquota)?;
        Ok(self.subtotal() * aliquota)
    }

    /// Subtotal + imposto + gorjeta.
    pub fn total(
        &self,
        aliquota_imposto: &BigDecimal,
        aliquota_gorjeta: &BigDecimal,
    ) -> Result<BigDecimal, ErroPedido> {
        let subtotal = self.subtotal();
        let imposto = self.imposto(aliquota_imposto)?;
        let gorjeta = self.gorjeta(aliquota_gorjeta)?;

        Ok(subtotal + imposto + gorjeta)
    }
}

// Alíquotas fora de [0, 1] são rejeitadas em vez de calculadas
// literalmente.
fn validar_aliquota(aliquota: &BigDecimal) -> Result<(), ErroPedido> {
    if *aliquota < BigDecimal::from(0) || *aliquota > BigDecimal::from(1) {
        return Err(ErroPedido::AliquotaInvalida { aliquota: aliquota.clone() });
    }

    Ok(())
}
