// src/logic/mod.rs
//! ゲームのロジック (注文の生成、判定ルール、メッセージ) をまとめるモジュールだよ！

pub mod feedback;
pub mod order_generator;
pub mod rules;
