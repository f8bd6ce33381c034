// src/components/fraction.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::components::ingredient::{IngredientKind, ALL_KINDS};
use crate::error::GameError;

/// プレイヤーが入力した分数1つ分 (入力欄の生の文字列) だよ。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FractionEntry {
    pub numerator: String,
    pub denominator: String,
}

impl FractionEntry {
    pub fn new(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        Self { numerator: numerator.into(), denominator: denominator.into() }
    }
}

/// 分子か分母か。どっちの入力欄が変わったかを示す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractionPart {
    Numerator,
    Denominator,
}

impl FromStr for FractionPart {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numerator" => Ok(FractionPart::Numerator),
            "denominator" => Ok(FractionPart::Denominator),
            other => Err(GameError::UnknownFractionPart(other.to_string())),
        }
    }
}

/// 1段階目の注文書。材料ごとの入力を持っていて、入力中はどんどん書き換わる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionSheet {
    entries: BTreeMap<IngredientKind, FractionEntry>,
}

impl FractionSheet {
    /// 全部空欄の注文書。
    pub fn new() -> Self {
        Self {
            entries: ALL_KINDS.iter().map(|&kind| (kind, FractionEntry::default())).collect(),
        }
    }

    pub fn set(&mut self, kind: IngredientKind, part: FractionPart, text: impl Into<String>) {
        let entry = self.entries.entry(kind).or_default();
        match part {
            FractionPart::Numerator => entry.numerator = text.into(),
            FractionPart::Denominator => entry.denominator = text.into(),
        }
    }

    pub fn set_entry(&mut self, kind: IngredientKind, entry: FractionEntry) {
        self.entries.insert(kind, entry);
    }

    pub fn entry(&self, kind: IngredientKind) -> Option<&FractionEntry> {
        self.entries.get(&kind)
    }

    /// 新しい注文が来たら全部空欄に戻す。
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 正解した時点の入力をコピーして固める。
    pub fn freeze(&self) -> PlayerFractions {
        PlayerFractions { entries: self.entries.clone() }
    }
}

impl Default for FractionSheet {
    fn default() -> Self {
        Self::new()
    }
}

/// 1段階目をクリアした時の入力のスナップショット。2段階目で表示するだけなので読み取り専用！
/// JSON では `{"egg": {"numerator": "1", "denominator": "3"}, ...}` のように材料 ID がそのままキーになる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerFractions {
    entries: BTreeMap<IngredientKind, FractionEntry>,
}

impl PlayerFractions {
    pub fn entry(&self, kind: IngredientKind) -> Option<&FractionEntry> {
        self.entries.get(&kind)
    }
}
