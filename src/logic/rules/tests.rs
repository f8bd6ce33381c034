//! 注文生成からスタック判定まで、ルールを通しで確かめるテスト。

use super::*;
use crate::components::fraction::{FractionEntry, FractionSheet};
use crate::components::ingredient::IngredientKind::{self, *};
use crate::components::ingredient::Placement;
use crate::components::order::Order;
use crate::components::stack::BurgerStack;
use crate::config::catalog::Catalog;
use crate::logic::order_generator::{generate_order, RandomChooser};
use rand::rngs::StdRng;
use rand::SeedableRng;

// --- テスト用ヘルパー関数 ---

/// 基本カタログ (3, 4, 6, 8) に対する注文 1, 2, 3, 4。
fn reference_order() -> Order {
    Order::from_quantities([(Egg, 1), (Patty, 2), (Cheese, 3), (Cabbage, 4)])
}

/// 材料を並べた順に積んで、最後にバンズをかぶせる。
fn stack_of(kinds: &[IngredientKind]) -> BurgerStack {
    kinds
        .iter()
        .map(|&kind| Placement::Ingredient(kind))
        .chain(std::iter::once(Placement::TopBun))
        .collect()
}

fn sheet_of(entries: &[(IngredientKind, &str, &str)]) -> FractionSheet {
    let mut sheet = FractionSheet::new();
    for &(kind, num, den) in entries {
        sheet.set_entry(kind, FractionEntry::new(num, den));
    }
    sheet
}

// --- 分数ルール ---

#[test]
fn test_fraction_sheet_accepts_reduced_and_unreduced() {
    let catalog = Catalog::standard();
    let order = reference_order();
    let sheet = sheet_of(&[
        (Egg, "1", "3"),
        (Patty, "1", "2"),
        (Cheese, "6", "12"),
        (Cabbage, "4", "8"),
    ]);
    assert!(validate_fractions(&catalog, &order, &sheet), "全部正しい分数のはず");
    assert_eq!(first_incorrect(&catalog, &order, &sheet), None);
}

#[test]
fn test_fraction_sheet_reports_first_wrong_kind_in_catalog_order() {
    let catalog = Catalog::standard();
    let order = reference_order();
    let sheet = sheet_of(&[
        (Egg, "1", "3"),
        (Patty, "3", "4"),
        (Cheese, "abc", "2"),
        (Cabbage, "4", "8"),
    ]);
    assert!(!validate_fractions(&catalog, &order, &sheet));
    assert_eq!(first_incorrect(&catalog, &order, &sheet), Some(Patty));
}

#[test]
fn test_blank_sheet_is_rejected() {
    let catalog = Catalog::standard();
    assert!(!validate_fractions(&catalog, &reference_order(), &FractionSheet::new()));
}

#[test]
fn test_egg_two_thirds_example() {
    let catalog = Catalog::standard();
    let order = Order::from_quantities([(Egg, 2), (Patty, 4), (Cheese, 6), (Cabbage, 8)]);
    let mut sheet = sheet_of(&[
        (Egg, "4", "6"),
        (Patty, "1", "1"),
        (Cheese, "6", "6"),
        (Cabbage, "2", "2"),
    ]);
    assert!(validate_fractions(&catalog, &order, &sheet));

    sheet.set_entry(Egg, FractionEntry::new("1", "2"));
    assert!(!validate_fractions(&catalog, &order, &sheet));

    sheet.set_entry(Egg, FractionEntry::new("3", "0"));
    assert!(!validate_fractions(&catalog, &order, &sheet), "分母 0 はダメ");
}

// --- スタックルール ---

#[test]
fn test_reference_scenario() {
    let catalog = Catalog::standard();
    let expected = reference_order().expected_sequence(&catalog);
    assert_eq!(
        expected,
        vec![Egg, Patty, Patty, Cheese, Cheese, Cheese, Cabbage, Cabbage, Cabbage, Cabbage]
    );

    let correct = stack_of(&expected);
    assert_eq!(validate_stack(&expected, correct.placements()), StackOutcome::Ok);

    let short_cheese = stack_of(&[Egg, Patty, Patty, Cheese, Cheese, Cabbage, Cabbage, Cabbage, Cabbage]);
    assert_eq!(
        validate_stack(&expected, short_cheese.placements()),
        StackOutcome::CountMismatch
    );

    let swapped = stack_of(&[Egg, Cheese, Cheese, Cheese, Patty, Patty, Cabbage, Cabbage, Cabbage, Cabbage]);
    assert_eq!(validate_stack(&expected, swapped.placements()), StackOutcome::OrderMismatch);

    let mut no_bun = correct.clone();
    no_bun.undo();
    assert_eq!(validate_stack(&expected, no_bun.placements()), StackOutcome::MissingTopBun);
    println!("基本シナリオのテスト、成功！🍔");
}

#[test]
fn test_generated_orders_round_trip_through_stack_rule() {
    let catalog = Catalog::standard();
    let mut chooser = RandomChooser::new(StdRng::seed_from_u64(2024));
    for _ in 0..100 {
        let order = generate_order(&catalog, &mut chooser);
        let expected = order.expected_sequence(&catalog);
        let stack = stack_of(&expected);
        assert_eq!(validate_stack(&expected, stack.placements()), StackOutcome::Ok);
        assert_eq!(next_hint(&expected, &stack.stripped()), Some(Hint::TopBun));
    }
}

#[test]
fn test_hint_follows_stack_progress() {
    let catalog = Catalog::standard();
    let order = Order::from_quantities([(Egg, 1), (Patty, 1), (Cheese, 0), (Cabbage, 0)]);
    let expected = order.expected_sequence(&catalog);

    let mut stack = BurgerStack::new();
    assert_eq!(next_hint(&expected, &stack.stripped()), Some(Hint::Ingredient(Egg)));
    stack.push(Placement::Ingredient(Egg));
    assert_eq!(next_hint(&expected, &stack.stripped()), Some(Hint::Ingredient(Patty)));
    stack.push(Placement::Ingredient(Patty));
    assert_eq!(next_hint(&expected, &stack.stripped()), Some(Hint::TopBun));
    stack.push(Placement::TopBun);
    // バンズは数えないので、かぶせた後もヒントは変わらない
    assert_eq!(next_hint(&expected, &stack.stripped()), Some(Hint::TopBun));
}
