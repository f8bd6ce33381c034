// src/logic/rules/mod.rs
//! 注文の判定ルール関連モジュールをまとめるよ！

pub mod fraction;
pub mod hint;
pub mod stack;

#[cfg(test)]
mod tests;

// 各モジュールから公開したい関数をここで再エクスポート！
pub use fraction::*;
pub use hint::*;
pub use stack::*;
