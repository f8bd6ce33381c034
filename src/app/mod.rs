// src/app/mod.rs
//! ラウンドの進行 (session) と、それを JS に公開する GameApp を置くモジュールだよ！

pub mod game_app;
pub mod session;
