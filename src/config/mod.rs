// src/config/mod.rs
//! ゲームの設定 (材料カタログ) を置くモジュール。

pub mod catalog;
