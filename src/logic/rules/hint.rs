//! 次に何を積めばいいかのヒントを計算するよ。状態は持たない純粋な関数！

use serde::{Deserialize, Serialize};

use crate::components::ingredient::IngredientKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "kind", rename_all = "snake_case")]
pub enum Hint {
    /// 次はこの材料
    Ingredient(IngredientKind),
    /// 材料はもう十分、トップバンズをかぶせよう
    TopBun,
}

/// 正しい並び `expected` と、今積んである材料 `stripped` (バンズ抜き) から次のヒントを出す。
///
/// - まだ足りない → 正しい並びの `stripped.len()` 番目の材料
/// - 同じ数かそれ以上 → トップバンズ
/// - 注文が空っぽ → ヒント無し
///
/// 中身が合っているかは見ない。個数だけで決まるよ。
pub fn next_hint(expected: &[IngredientKind], stripped: &[IngredientKind]) -> Option<Hint> {
    // ★ 積んだ数 = 次に見る位置 ★
    match expected.get(stripped.len()) {
        Some(&kind) => Some(Hint::Ingredient(kind)),
        None if !expected.is_empty() => Some(Hint::TopBun),
        None => None,
    }
}
