// src/error.rs
//! API の使い方を間違えたときのエラー型だよ。
//!
//! プレイヤーの入力ミス（分数が違う、順番が違う…）はエラーじゃなくて「結果」として返すので、
//! ここに入るのは呼び出し側（JS やテスト）のミスだけ！

use thiserror::Error;

use crate::app::session::GameStage;

#[derive(Debug, Error)]
pub enum GameError {
    /// 知らない材料 ID が渡された。
    #[error("unknown ingredient id: {0:?}")]
    UnknownIngredient(String),

    /// 知らない置き物 ID (材料でも "bun-top" でもない) が渡された。
    #[error("unknown placement id: {0:?}")]
    UnknownPlacement(String),

    /// 分子/分母以外の入力欄が指定された。
    #[error("unknown fraction part: {0:?}")]
    UnknownFractionPart(String),

    /// カタログの定義がおかしい (合計 0、材料の重複や抜け)。
    #[error("invalid ingredient catalog: {0}")]
    InvalidCatalog(String),

    /// 今のステージでは呼べない操作。
    #[error("operation requires stage {expected:?}, but the game is in {actual:?}")]
    WrongStage { expected: GameStage, actual: GameStage },

    /// 空のスタックは判定できない。
    #[error("cannot check an empty burger stack")]
    EmptyStack,

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
