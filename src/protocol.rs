// src/protocol.rs

// このファイルは、Rust (WASM) と画面側の JavaScript の間で
// やり取りするデータの形式を定義するよ！💌
// JS には JSON 文字列で渡すので、全部 `serde` で Serialize/Deserialize できるようにしておく。
use serde::{Deserialize, Serialize};

use crate::app::session::GameStage;
use crate::components::fraction::PlayerFractions;
use crate::components::ingredient::{IngredientKind, Placement};
use crate::components::order::Order;
use crate::components::stack::BurgerStack;
use crate::config::catalog::Catalog;
use crate::logic::feedback;
use crate::logic::rules::{Hint, StackOutcome};

/// 注文書の1行分。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub kind: IngredientKind,
    pub name: String,
    pub total: u32,
    pub ordered: u32,
}

/// 注文をまるごと画面に渡すためのデータ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderView {
    pub stage: GameStage,
    /// カタログ順の注文書
    pub lines: Vec<OrderLine>,
    /// お客さんのセリフ用のまとめ
    pub summary: String,
}

impl OrderView {
    pub fn new(stage: GameStage, catalog: &Catalog, order: &Order) -> Self {
        let lines = catalog
            .iter()
            .map(|descriptor| OrderLine {
                kind: descriptor.kind,
                name: descriptor.name.clone(),
                total: descriptor.total,
                ordered: order.get(descriptor.kind),
            })
            .collect();
        Self { stage, lines, summary: feedback::order_summary(catalog, order) }
    }
}

/// 1段階目の答え合わせの結果。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FractionResult {
    pub correct: bool,
    pub message: String,
}

impl FractionResult {
    pub fn new(correct: bool) -> Self {
        Self { correct, message: feedback::fraction_message(correct).to_string() }
    }
}

/// 積んである1個分。連続した同じものの最後の1個にだけ「×N」バッジを出す。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StackItemView {
    pub placement: Placement,
    pub run_count: usize,
    pub show_count: bool,
}

/// 2段階目のスタックの表示用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StackView {
    /// 下から順
    pub items: Vec<StackItemView>,
    pub hint: Option<Hint>,
    pub hint_text: String,
}

impl StackView {
    pub fn new(catalog: &Catalog, stack: &BurgerStack, hint: Option<Hint>) -> Self {
        let items = stack
            .runs()
            .into_iter()
            .flat_map(|(placement, count)| {
                (1..=count).map(move |position| StackItemView {
                    placement,
                    run_count: if position == count { count } else { 1 },
                    show_count: position == count && count > 1,
                })
            })
            .collect();
        Self { items, hint, hint_text: feedback::hint_message(catalog, hint) }
    }
}

/// 2段階目の判定結果。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StackResult {
    pub outcome: StackOutcome,
    pub message: String,
}

impl StackResult {
    pub fn new(outcome: StackOutcome) -> Self {
        Self { outcome, message: feedback::stack_message(outcome).to_string() }
    }
}

/// 2段階目で表示する「完成した注文書」。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerFractionsView {
    pub fractions: PlayerFractions,
}
