// src/config/catalog.rs
//! 材料カタログ (表示名と全体数) の定数と、それを引くための型だよ！

use serde::{Deserialize, Serialize};

use crate::components::ingredient::{IngredientKind, ALL_KINDS};
use crate::error::GameError;

/// 材料1種類分の情報。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDescriptor {
    pub kind: IngredientKind,
    /// 画面に出す名前
    pub name: String,
    /// 用意されている全体の個数 (分数の分母になる数)
    pub total: u32,
}

// --- 基本のカタログ ---
pub const EGG_NAME: &str = "달걀부침";
pub const EGG_TOTAL: u32 = 3;
pub const PATTY_NAME: &str = "고기 패티";
pub const PATTY_TOTAL: u32 = 4;
pub const CHEESE_NAME: &str = "치즈";
pub const CHEESE_TOTAL: u32 = 6;
pub const CABBAGE_NAME: &str = "양배추";
pub const CABBAGE_TOTAL: u32 = 8;

/// 材料カタログ。全種類が1つずつ、カタログ順 (= IngredientKind の宣言順) に並んでる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<IngredientDescriptor>,
}

impl Catalog {
    /// ゲームで使う基本のカタログ。
    pub fn standard() -> Self {
        let entries = vec![
            descriptor(IngredientKind::Egg, EGG_NAME, EGG_TOTAL),
            descriptor(IngredientKind::Patty, PATTY_NAME, PATTY_TOTAL),
            descriptor(IngredientKind::Cheese, CHEESE_NAME, CHEESE_TOTAL),
            descriptor(IngredientKind::Cabbage, CABBAGE_NAME, CABBAGE_TOTAL),
        ];
        Self { entries }
    }

    /// 自前のカタログを作る。渡す順番は自由だけど、全種類がちょうど1回ずつ必要！
    /// 合計が 0 の材料は割り切れる注文が作れないので弾くよ。
    pub fn new(mut entries: Vec<IngredientDescriptor>) -> Result<Self, GameError> {
        entries.sort_by_key(|entry| entry.kind);
        let kinds: Vec<IngredientKind> = entries.iter().map(|entry| entry.kind).collect();
        if kinds != ALL_KINDS {
            return Err(GameError::InvalidCatalog(format!(
                "expected exactly one entry per ingredient, got {:?}",
                kinds
            )));
        }
        if let Some(zero) = entries.iter().find(|entry| entry.total == 0) {
            return Err(GameError::InvalidCatalog(format!(
                "total for {} must be positive",
                zero.kind
            )));
        }
        Ok(Self { entries })
    }

    pub fn descriptor(&self, kind: IngredientKind) -> &IngredientDescriptor {
        // entries は宣言順にソート済みなので、enum の判別値がそのまま添字になる
        &self.entries[kind as usize]
    }

    pub fn total(&self, kind: IngredientKind) -> u32 {
        self.descriptor(kind).total
    }

    pub fn name(&self, kind: IngredientKind) -> &str {
        &self.descriptor(kind).name
    }

    /// カタログ順に全ての材料情報を回す。
    pub fn iter(&self) -> impl Iterator<Item = &IngredientDescriptor> {
        self.entries.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = IngredientKind> + '_ {
        self.entries.iter().map(|entry| entry.kind)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn descriptor(kind: IngredientKind, name: &str, total: u32) -> IngredientDescriptor {
    IngredientDescriptor { kind, name: name.to_string(), total }
}
