// src/app/session.rs
//! 1ラウンド分のゲーム状態と、ステージの進め方をまとめたモジュール。
//!
//! 画面側 (JS) からの操作はここを通る。判定そのものは `logic::rules` の純粋な関数に任せて、
//! ここでは「今どのステージか」「何を持っているか」だけを管理するよ。

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::components::fraction::{FractionPart, FractionSheet, PlayerFractions};
use crate::components::ingredient::{IngredientKind, Placement};
use crate::components::order::Order;
use crate::components::stack::BurgerStack;
use crate::config::catalog::Catalog;
use crate::error::GameError;
use crate::logic::order_generator::{generate_order, IndexChooser};
use crate::logic::rules::{self, Hint, StackOutcome};

/// ゲームの進み具合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStage {
    /// タイトル画面
    Welcome,
    /// 1段階目: 注文を分数で書く
    Stage1,
    /// 2段階目: ハンバーガーを積む
    Stage2,
    /// 完成！🎉
    Complete,
}

impl GameStage {
    pub fn id(self) -> &'static str {
        match self {
            GameStage::Welcome => "welcome",
            GameStage::Stage1 => "stage1",
            GameStage::Stage2 => "stage2",
            GameStage::Complete => "complete",
        }
    }
}

pub struct GameSession<C> {
    catalog: Catalog,
    chooser: C,
    stage: GameStage,
    order: Order,
    sheet: FractionSheet,
    player_fractions: Option<PlayerFractions>,
    stack: BurgerStack,
}

impl<C: IndexChooser> GameSession<C> {
    /// タイトル画面から始まるセッションを作る。注文は最初から1つ用意しておく。
    pub fn new(catalog: Catalog, mut chooser: C) -> Self {
        let order = generate_order(&catalog, &mut chooser);
        Self {
            catalog,
            chooser,
            stage: GameStage::Welcome,
            order,
            sheet: FractionSheet::new(),
            player_fractions: None,
            stack: BurgerStack::new(),
        }
    }

    /// 新しいラウンドを始める。どのステージからでも呼べる (「もう一度」ボタンもこれ)。
    pub fn start(&mut self) {
        self.order = generate_order(&self.catalog, &mut self.chooser);
        self.sheet.reset();
        self.player_fractions = None;
        self.stack.reset();
        self.stage = GameStage::Stage1;
        info!("[Session] round started: {:?}", self.order);
    }

    /// 1段階目で注文を取り直す。入力欄も空に戻る。
    pub fn new_order(&mut self) -> Result<(), GameError> {
        self.require(GameStage::Stage1)?;
        self.order = generate_order(&self.catalog, &mut self.chooser);
        self.sheet.reset();
        info!("[Session] new order: {:?}", self.order);
        Ok(())
    }

    pub fn set_fraction(
        &mut self,
        kind: IngredientKind,
        part: FractionPart,
        text: impl Into<String>,
    ) -> Result<(), GameError> {
        self.require(GameStage::Stage1)?;
        self.sheet.set(kind, part, text);
        Ok(())
    }

    /// 分数を答え合わせする。正解なら入力を固めて2段階目へ進むよ。
    pub fn submit_fractions(&mut self) -> Result<bool, GameError> {
        self.require(GameStage::Stage1)?;
        let correct = rules::validate_fractions(&self.catalog, &self.order, &self.sheet);
        if correct {
            // ★ 正解した入力を固めておく (2段階目で注文書として表示する) ★
            self.player_fractions = Some(self.sheet.freeze());
            self.stack.reset();
            self.stage = GameStage::Stage2;
            info!("[Session] fractions accepted, moving to stage 2");
        }
        Ok(correct)
    }

    pub fn drop_placement(&mut self, placement: Placement) -> Result<(), GameError> {
        self.require(GameStage::Stage2)?;
        self.stack.push(placement);
        debug!("[Session] dropped {} ({} on stack)", placement, self.stack.len());
        Ok(())
    }

    pub fn undo_placement(&mut self) -> Result<Option<Placement>, GameError> {
        self.require(GameStage::Stage2)?;
        Ok(self.stack.undo())
    }

    pub fn reset_stack(&mut self) -> Result<(), GameError> {
        self.require(GameStage::Stage2)?;
        self.stack.reset();
        Ok(())
    }

    /// 積んだハンバーガーを判定する。OK ならラウンド完了！ 完成したスタックはそこで片付ける。
    /// 空のスタックは判定しない (`GameError::EmptyStack`)。
    pub fn submit_stack(&mut self) -> Result<StackOutcome, GameError> {
        self.require(GameStage::Stage2)?;
        if self.stack.is_empty() {
            return Err(GameError::EmptyStack);
        }
        let expected = self.expected_sequence();
        let outcome = rules::validate_stack(&expected, self.stack.placements());
        if outcome.is_ok() {
            // ★ 完成！ スタックはもう要らないので捨てる ★
            self.stack.reset();
            self.stage = GameStage::Complete;
            info!("[Session] burger complete!");
        } else {
            // ★ 失敗してもスタックはそのまま。直してもう一回出せる ★
            debug!("[Session] stack rejected: {:?}", outcome);
        }
        Ok(outcome)
    }

    fn require(&self, expected: GameStage) -> Result<(), GameError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(GameError::WrongStage { expected, actual: self.stage })
        }
    }

    // --- 読み取り用 ---

    pub fn stage(&self) -> GameStage {
        self.stage
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn sheet(&self) -> &FractionSheet {
        &self.sheet
    }

    /// 1段階目をクリアした時の入力。2段階目以降でだけ Some。
    pub fn player_fractions(&self) -> Option<&PlayerFractions> {
        self.player_fractions.as_ref()
    }

    pub fn stack(&self) -> &BurgerStack {
        &self.stack
    }

    pub fn expected_sequence(&self) -> Vec<IngredientKind> {
        self.order.expected_sequence(&self.catalog)
    }

    pub fn hint(&self) -> Option<Hint> {
        rules::next_hint(&self.expected_sequence(), &self.stack.stripped())
    }
}
