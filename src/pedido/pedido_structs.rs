// src/pedido/pedido_structs.rs

use bigdecimal::BigDecimal;
use thiserror::Error;

// O 'crate::' garante que estamos importando do módulo 'cardapio' no nível raiz do crate.
use crate::cardapio::cardapio_structs::ItemCardapio;

/// Usos inválidos do pedido. São devolvidos a quem chamou; o pedido em
/// si nunca fica em estado inconsistente por causa deles.
#[derive(Debug, Error, PartialEq)]
pub enum ErroPedido {
    #[error("quantity must be at least 1, got {quantidade}")]
    QuantidadeInvalida { quantidade: i32 },

    #[error("rate must be a fraction between 0 and 1, got {aliquota}")]
    AliquotaInvalida { aliquota: BigDecimal },
}

/// Estrutura que representa uma linha do pedido: um item do cardápio e
/// a quantidade acumulada dele.
#[derive(Debug, Clone)]
pub struct ItemPedido {
    pub item: ItemCardapio,
    pub quantidade: i32,
}

/// Estrutura que representa o pedido em construção de um cliente.
/// Começa vazio e só cresce: não existe remoção de linha neste fluxo.
/// As linhas ficam na ordem em que cada item entrou pela primeira vez.
#[derive(Debug, Default)] // Permite criar uma instância padrão (com vetor vazio)
pub struct Pedido {
    itens: Vec<ItemPedido>,
}

impl Pedido {
    pub fn novo() -> Self {
        Self::default()
    }

    /// Adiciona um item ao pedido. Se o item já tem uma linha, a
    /// quantidade é somada à existente; caso contrário entra uma linha
    /// nova no fim. Quantidade menor que 1 é rejeitada.
    pub fn adicionar_item(&mut self, item: ItemCardapio, quantidade: i32) -> Result<(), ErroPedido> {
        if quantidade <= 0 {
            return Err(ErroPedido::QuantidadeInvalida { quantidade });
        }

        // ItemCardapio compara pelo id, então a busca casa com qualquer
        // descritor da mesma entrada do cardápio.
        match self.itens.iter_mut().find(|linha| linha.item == item) {
            Some(linha) => linha.quantidade += quantidade,
            None => self.itens.push(ItemPedido { item, quantidade }),
        }

        Ok(())
    }

    /// Devolve true se nenhuma linha foi adicionada ainda.
    pub fn esta_vazio(&self) -> bool {
        self.itens.is_empty()
    }

    pub fn itens(&self) -> &[ItemPedido] {
        &self.itens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, nome: &str, preco: &str) -> ItemCardapio {
        ItemCardapio {
            id,
            nome: nome.to_string(),
            preco: preco.parse().unwrap(),
            categoria: "Entree".to_string(),
        }
    }

    #[test]
    fn adicionar_o_mesmo_item_acumula_a_quantidade() {
        let mut pedido = Pedido::novo();
        pedido.adicionar_item(item(1, "Burger", "10.00"), 2).unwrap();
        pedido.adicionar_item(item(1, "Burger", "10.00"), 3).unwrap();
        pedido.adicionar_item(item(1, "Burger", "10.00"), 1).unwrap();

        assert_eq!(pedido.itens().len(), 1);
        assert_eq!(pedido.itens()[0].quantidade, 6);
    }

    #[test]
    fn itens_diferentes_viram_linhas_na_ordem_de_entrada() {
        let mut pedido = Pedido::novo();
        pedido.adicionar_item(item(1, "Burger", "10.00"), 1).unwrap();
        pedido.adicionar_item(item(2, "Cola", "3.00"), 1).unwrap();
        pedido.adicionar_item(item(1, "Burger", "10.00"), 1).unwrap();

        assert_eq!(pedido.itens().len(), 2);
        assert_eq!(pedido.itens()[0].item.nome, "Burger");
        assert_eq!(pedido.itens()[0].quantidade, 2);
        assert_eq!(pedido.itens()[1].item.nome, "Cola");
    }

    #[test]
    fn quantidade_menor_que_um_e_rejeitada() {
        let mut pedido = Pedido::novo();

        assert_eq!(
            pedido.adicionar_item(item(1, "Burger", "10.00"), 0),
            Err(ErroPedido::QuantidadeInvalida { quantidade: 0 })
        );
        assert_eq!(
            pedido.adicionar_item(item(1, "Burger", "10.00"), -2),
            Err(ErroPedido::QuantidadeInvalida { quantidade: -2 })
        );
        assert!(pedido.esta_vazio());
    }

    #[test]
    fn esta_vazio_so_antes_da_primeira_adicao() {
        let mut pedido = Pedido::novo();
        assert!(pedido.esta_vazio());

        pedido.adicionar_item(item(1, "Burger", "10.00"), 1).unwrap();
        assert!(!pedido.esta_vazio());
    }
}
