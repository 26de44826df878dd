// src/cardapio/cardapio_structs.rs

use bigdecimal::BigDecimal;

/// Estrutura que representa um item do cardápio.
/// Imutável depois da carga: o programa nunca edita o cardápio.
/// O preço usa BigDecimal para manter o valor monetário exato.
#[derive(Debug, Clone)]
pub struct ItemCardapio {
    pub id: i32,
    pub nome: String,
    pub preco: BigDecimal,
    pub categoria: String,
}

// A identidade de um item é o seu id: dois descritores com o mesmo id
// são a mesma entrada do cardápio, mesmo que os demais campos tenham
// divergido entre linhas do arquivo.
impl PartialEq for ItemCardapio {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ItemCardapio {}

/// Estrutura que representa o cardápio completo carregado do arquivo.
/// Os itens ficam na ordem de primeira inserção, então a exibição e o
/// recibo saem sempre na ordem do arquivo.
#[derive(Debug, Default)] // Permite criar uma instância padrão (com vetor vazio)
pub struct Cardapio {
    itens: Vec<ItemCardapio>,
}

impl Cardapio {
    /// Insere um item no cardápio. Um id repetido substitui o descritor
    /// anterior mantendo a posição original (a última linha do arquivo
    /// vence).
    pub fn inserir(&mut self, item: ItemCardapio) {
        match self.itens.iter_mut().find(|existente| existente.id == item.id) {
            Some(existente) => *existente = item,
            None => self.itens.push(item),
        }
    }

    /// Busca um item pelo id.
    pub fn obter(&self, id: i32) -> Option<&ItemCardapio> {
        self.itens.iter().find(|item| item.id == id)
    }

    pub fn esta_vazio(&self) -> bool {
        self.itens.is_empty()
    }

    pub fn tamanho(&self) -> usize {
        self.itens.len()
    }

    pub fn itens(&self) -> &[ItemCardapio] {
        &self.itens
    }

    /// Agrupa os itens por categoria para exibição. As categorias saem
    /// na ordem em que aparecem pela primeira vez no cardápio e os
    /// itens na ordem do cardápio dentro de cada grupo.
    pub fn por_categoria(&self) -> Vec<(String, Vec<&ItemCardapio>)> {
        let mut grupos: Vec<(String, Vec<&ItemCardapio>)> = Vec::new();

        for item in self.itens() {
            match grupos.iter_mut().find(|(categoria, _)| *categoria == item.categoria) {
                Some((_, itens)) => itens.push(item),
                None => grupos.push((item.categoria.clone(), vec![item])),
            }
        }

        grupos
    }
}
