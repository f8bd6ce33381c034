// src/components/stack.rs

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::components::ingredient::{IngredientKind, Placement};

/// 2段階目でプレイヤーが積んでいるハンバーガーだよ！🍔
///
/// 下から順に `placements` に入っていく (0 が一番下)。
/// ドロップで増えて、「ひとつ戻す」で減って、「やり直し」で空になる。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BurgerStack {
    placements: Vec<Placement>,
}

impl BurgerStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// 一番上を取り除く。空なら None。
    pub fn undo(&mut self) -> Option<Placement> {
        self.placements.pop()
    }

    pub fn reset(&mut self) {
        self.placements.clear();
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// 空じゃなくて、一番上がトップバンズなら完成扱い。
    pub fn is_complete(&self) -> bool {
        self.placements.last() == Some(&Placement::TopBun)
    }

    /// トップバンズを全部取り除いた、材料だけの並び。
    pub fn stripped(&self) -> Vec<IngredientKind> {
        self.placements.iter().filter_map(|p| p.ingredient()).collect()
    }

    /// 同じものが連続している区間ごとにまとめる (画面の「×3」バッジ用)。
    /// 例: [Egg, Patty, Patty, TopBun] → [(Egg, 1), (Patty, 2), (TopBun, 1)]
    pub fn runs(&self) -> Vec<(Placement, usize)> {
        self.placements
            .iter()
            .copied()
            .dedup_with_count()
            .map(|(count, placement)| (placement, count))
            .collect()
    }
}

impl FromIterator<Placement> for BurgerStack {
    fn from_iter<T: IntoIterator<Item = Placement>>(iter: T) -> Self {
        Self { placements: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use IngredientKind::*;

    fn ing(kind: IngredientKind) -> Placement {
        Placement::Ingredient(kind)
    }

    #[test]
    fn push_undo_reset() {
        let mut stack = BurgerStack::new();
        assert!(stack.is_empty());
        stack.push(ing(Egg));
        stack.push(ing(Patty));
        assert_eq!(stack.len(), 2);

        assert_eq!(stack.undo(), Some(ing(Patty)));
        assert_eq!(stack.placements(), &[ing(Egg)]);

        stack.reset();
        assert!(stack.is_empty());
        assert_eq!(stack.undo(), None, "空のスタックから戻すものは無いはず");
    }

    #[test]
    fn complete_only_when_top_bun_is_last() {
        let mut stack = BurgerStack::new();
        assert!(!stack.is_complete(), "空のスタックは完成じゃない");
        stack.push(ing(Cheese));
        assert!(!stack.is_complete());
        stack.push(Placement::TopBun);
        assert!(stack.is_complete());
        stack.push(ing(Cabbage));
        assert!(!stack.is_complete(), "バンズの上に材料を乗せたら未完成に戻る");
    }

    #[test]
    fn stripped_drops_every_top_bun() {
        let stack: BurgerStack =
            vec![ing(Egg), Placement::TopBun, ing(Patty), Placement::TopBun].into_iter().collect();
        assert_eq!(stack.stripped(), vec![Egg, Patty]);
    }

    #[test]
    fn runs_group_consecutive_placements() {
        let stack: BurgerStack = vec![
            ing(Egg),
            ing(Patty),
            ing(Patty),
            ing(Cheese),
            ing(Patty),
            Placement::TopBun,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            stack.runs(),
            vec![
                (ing(Egg), 1),
                (ing(Patty), 2),
                (ing(Cheese), 1),
                (ing(Patty), 1),
                (Placement::TopBun, 1),
            ]
        );
        assert!(BurgerStack::new().runs().is_empty());
    }
}
