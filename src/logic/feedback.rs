// src/logic/feedback.rs
//! 判定結果やヒントを、画面に出すメッセージに変えるよ！💬

use crate::components::order::Order;
use crate::config::catalog::Catalog;
use crate::logic::rules::{Hint, StackOutcome};

pub const FRACTIONS_CORRECT: &str = "주문 완료! 정확해요! 햄버거를 만들러 가요!";
pub const FRACTIONS_WRONG: &str = "수량을 다시 확인해볼까? 🤔";

pub const STACK_OK: &str = "맛있는 햄버거 완성! 🥳";
pub const STACK_MISSING_TOP_BUN: &str = "빵을 덮어주세요! 🍔";
pub const STACK_COUNT_MISMATCH: &str = "어? 주문서와 재료 개수가 다른 것 같아요!";
pub const STACK_ORDER_MISMATCH: &str = "재료를 쌓는 순서가 다른 것 같아요! 주문서를 확인해보세요.";

pub const HINT_TOP_BUN: &str = "윗면 빵을 올려주세요! 🍔";

/// お客さんのセリフ用の注文まとめ。0 個の材料は省くよ。
/// 例: "달걀부침 1개, 고기 패티 2개"
pub fn order_summary(catalog: &Catalog, order: &Order) -> String {
    catalog
        .iter()
        .filter_map(|descriptor| match order.get(descriptor.kind) {
            0 => None,
            count => Some(format!("{} {}개", descriptor.name, count)),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn fraction_message(correct: bool) -> &'static str {
    if correct {
        FRACTIONS_CORRECT
    } else {
        FRACTIONS_WRONG
    }
}

pub fn stack_message(outcome: StackOutcome) -> &'static str {
    match outcome {
        StackOutcome::Ok => STACK_OK,
        StackOutcome::MissingTopBun => STACK_MISSING_TOP_BUN,
        StackOutcome::CountMismatch => STACK_COUNT_MISMATCH,
        StackOutcome::OrderMismatch => STACK_ORDER_MISMATCH,
    }
}

/// ヒントの文言。ヒントが無ければ空文字。
pub fn hint_message(catalog: &Catalog, hint: Option<Hint>) -> String {
    match hint {
        Some(Hint::Ingredient(kind)) => format!("다음 재료: {}", catalog.name(kind)),
        Some(Hint::TopBun) => HINT_TOP_BUN.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ingredient::IngredientKind::*;

    #[test]
    fn summary_skips_zero_quantities() {
        let catalog = Catalog::standard();
        let order = Order::from_quantities([(Egg, 1), (Patty, 0), (Cheese, 3), (Cabbage, 0)]);
        assert_eq!(order_summary(&catalog, &order), "달걀부침 1개, 치즈 3개");
        assert_eq!(order_summary(&catalog, &Order::default()), "");
    }

    #[test]
    fn every_outcome_has_its_own_message() {
        let messages = [
            stack_message(StackOutcome::Ok),
            stack_message(StackOutcome::MissingTopBun),
            stack_message(StackOutcome::CountMismatch),
            stack_message(StackOutcome::OrderMismatch),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_ne!(fraction_message(true), fraction_message(false));
    }

    #[test]
    fn hint_text() {
        let catalog = Catalog::standard();
        assert_eq!(hint_message(&catalog, Some(Hint::Ingredient(Patty))), "다음 재료: 고기 패티");
        assert_eq!(hint_message(&catalog, Some(Hint::TopBun)), HINT_TOP_BUN);
        assert_eq!(hint_message(&catalog, None), "");
    }
}
