// src/components/ingredient.rs

// serde を使う宣言！JS 側とは "egg" みたいな文字列 ID でやり取りするよ。
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// ハンバーガーに入れられる材料の種類だよ！🍳🥩🧀🥬
///
/// 宣言の順番がそのまま「カタログ順」= 積む順番になるので、並べ替えちゃダメ！
/// Ord を derive してるのは BTreeMap のキーにするため。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Egg,
    Patty,
    Cheese,
    Cabbage,
}

/// 全ての材料の種類 (カタログ順)。
pub const ALL_KINDS: [IngredientKind; 4] = [
    IngredientKind::Egg,
    IngredientKind::Patty,
    IngredientKind::Cheese,
    IngredientKind::Cabbage,
];

impl IngredientKind {
    /// JS とやり取りする文字列 ID。
    pub fn id(self) -> &'static str {
        match self {
            IngredientKind::Egg => "egg",
            IngredientKind::Patty => "patty",
            IngredientKind::Cheese => "cheese",
            IngredientKind::Cabbage => "cabbage",
        }
    }
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for IngredientKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| GameError::UnknownIngredient(s.to_string()))
    }
}

/// トップバンズの文字列 ID。
pub const TOP_BUN_ID: &str = "bun-top";

/// スタックに置かれる1個分だよ。材料か、最後にかぶせるトップバンズ🍔のどちらか。
///
/// JSON では材料と同じ ID か "bun-top" の文字列になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Placement {
    Ingredient(IngredientKind),
    TopBun,
}

impl Placement {
    pub fn id(self) -> &'static str {
        match self {
            Placement::Ingredient(kind) => kind.id(),
            Placement::TopBun => TOP_BUN_ID,
        }
    }

    /// 材料ならその種類、トップバンズなら None。
    pub fn ingredient(self) -> Option<IngredientKind> {
        match self {
            Placement::Ingredient(kind) => Some(kind),
            Placement::TopBun => None,
        }
    }
}

impl From<IngredientKind> for Placement {
    fn from(kind: IngredientKind) -> Self {
        Placement::Ingredient(kind)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Placement {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == TOP_BUN_ID {
            return Ok(Placement::TopBun);
        }
        s.parse::<IngredientKind>()
            .map(Placement::Ingredient)
            .map_err(|_| GameError::UnknownPlacement(s.to_string()))
    }
}

impl TryFrom<String> for Placement {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        placement.id().to_string()
    }
}
