// src/components/order.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::iter;

use crate::components::ingredient::IngredientKind;
use crate::config::catalog::Catalog;

/// お客さんの注文だよ！🧑‍🍳 材料ごとに「何個ほしいか」を持つ。
///
/// 1ラウンドの間は変わらない。新しい注文が欲しいときは作り直す！
/// 数量がカタログの全体数の約数になっているのは生成側 (`logic::order_generator`) の約束。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Order {
    quantities: BTreeMap<IngredientKind, u32>,
}

impl Order {
    pub fn from_quantities<I>(quantities: I) -> Self
    where
        I: IntoIterator<Item = (IngredientKind, u32)>,
    {
        Self { quantities: quantities.into_iter().collect() }
    }

    /// 注文された個数。注文に無い材料は 0 個扱い。
    pub fn get(&self, kind: IngredientKind) -> u32 {
        self.quantities.get(&kind).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (IngredientKind, u32)> + '_ {
        self.quantities.iter().map(|(&kind, &count)| (kind, count))
    }

    /// 注文から「正しい積み方」を作る。カタログ順に、材料を個数分だけ並べるよ。
    /// 例: 卵1・パティ2 → [Egg, Patty, Patty]
    pub fn expected_sequence(&self, catalog: &Catalog) -> Vec<IngredientKind> {
        catalog
            .kinds()
            .flat_map(|kind| iter::repeat(kind).take(self.get(kind) as usize))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use IngredientKind::*;

    #[test]
    fn missing_kind_counts_as_zero() {
        let order = Order::from_quantities([(Egg, 2)]);
        assert_eq!(order.get(Egg), 2);
        assert_eq!(order.get(Cabbage), 0);
    }

    #[test]
    fn expected_sequence_groups_kinds_in_catalog_order() {
        let catalog = Catalog::standard();
        // わざとバラバラの順番で渡しても、カタログ順で並ぶはず
        let order = Order::from_quantities([(Cabbage, 4), (Egg, 1), (Cheese, 3), (Patty, 2)]);
        assert_eq!(
            order.expected_sequence(&catalog),
            vec![Egg, Patty, Patty, Cheese, Cheese, Cheese, Cabbage, Cabbage, Cabbage, Cabbage]
        );
    }

    #[test]
    fn empty_order_has_empty_sequence() {
        assert!(Order::default().expected_sequence(&Catalog::standard()).is_empty());
    }
}
