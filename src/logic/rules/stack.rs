//! 2段階目: 積んだハンバーガーが注文どおりかを判定するルールだよ。🍔

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::ingredient::{IngredientKind, Placement};

/// スタック判定の結果。失敗の種類を分けておくと、画面で的確なヒントを出せる！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackOutcome {
    /// 注文どおり！
    Ok,
    /// 一番上がトップバンズじゃない
    MissingTopBun,
    /// 材料の個数が合わない
    CountMismatch,
    /// 個数は合ってるけど積む順番が違う
    OrderMismatch,
}

impl StackOutcome {
    pub fn is_ok(self) -> bool {
        self == StackOutcome::Ok
    }
}

/// 積んだもの (`placements`) を正しい並び (`expected`) と比べるよ。
///
/// 判定の優先順位:
/// 1. 空じゃないのに一番上がトップバンズじゃない → MissingTopBun
/// 2. トップバンズを取り除いて、材料ごとの個数を比べる → 違えば CountMismatch
/// 3. 個数が同じなら1個ずつ順番に比べる → 違えば OrderMismatch
///
/// 空のスタックで呼ばないのは呼び出し側の約束。
/// 呼ばれた場合は材料ゼロとして個数比較まで進む。
pub fn validate_stack(expected: &[IngredientKind], placements: &[Placement]) -> StackOutcome {
    // ★ 1. 一番上のチェック (空のスタックはここを素通り) ★
    if matches!(placements.last(), Some(last) if *last != Placement::TopBun) {
        debug!("[Stack Rule] top bun missing: {:?}", placements);
        return StackOutcome::MissingTopBun;
    }

    // バンズは途中にあっても全部取り除く
    let stripped: Vec<IngredientKind> = placements.iter().filter_map(|p| p.ingredient()).collect();

    // ★ 2. 材料ごとの個数 (並びは無視) ★
    if stripped.iter().counts() != expected.iter().counts() {
        debug!("[Stack Rule] count mismatch: {:?} vs expected {:?}", stripped, expected);
        return StackOutcome::CountMismatch;
    }

    // ★ 3. 1個ずつ順番どおりか ★
    if stripped != expected {
        debug!("[Stack Rule] order mismatch: {:?} vs expected {:?}", stripped, expected);
        return StackOutcome::OrderMismatch;
    }

    debug!("[Stack Rule] stack matches the order");
    StackOutcome::Ok
}
