// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod logic;
pub mod protocol;

// よく使う型はクレートのルートからも使えるようにしておく
pub use crate::app::game_app::GameApp;
pub use crate::app::session::{GameSession, GameStage};
pub use crate::components::{
    BurgerStack, FractionEntry, FractionPart, FractionSheet, IngredientKind, Order, Placement,
    PlayerFractions,
};
pub use crate::config::catalog::{Catalog, IngredientDescriptor};
pub use crate::error::GameError;
pub use crate::logic::order_generator::{
    divisors, generate_order, IndexChooser, RandomChooser, ScriptedChooser,
};
pub use crate::logic::rules::{next_hint, validate_fractions, validate_stack, Hint, StackOutcome};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::info!("hamburger_fractions: panic hook and logger set!");
}
