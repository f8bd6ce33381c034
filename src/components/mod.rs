// src/components/mod.rs

// ゲームで扱うデータ部品をまとめるモジュールだよ！
// ここにあるのはただのデータで、判定ロジックは logic モジュールにある。
pub mod fraction;
pub mod ingredient;
pub mod order;
pub mod stack;

pub use fraction::{FractionEntry, FractionPart, FractionSheet, PlayerFractions};
pub use ingredient::{IngredientKind, Placement, ALL_KINDS};
pub use order::Order;
pub use stack::BurgerStack;
