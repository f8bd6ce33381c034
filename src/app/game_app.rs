// src/app/game_app.rs

// --- 必要なものをインポート ---
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::app::session::GameSession;
use crate::components::fraction::FractionPart;
use crate::components::ingredient::{IngredientKind, Placement};
use crate::config::catalog::Catalog;
use crate::error::GameError;
use crate::logic::order_generator::RandomChooser;
use crate::protocol::{FractionResult, OrderView, PlayerFractionsView, StackResult, StackView};

/// Rust 側のエラーを JS の Error オブジェクトにする。
fn to_js_error(err: GameError) -> JsValue {
    warn!("GameApp: {}", err);
    js_sys::Error::new(&err.to_string()).into()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js_error(GameError::from(e)))
}

// --- ゲーム全体のアプリケーション状態を JS に公開する構造体 ---
#[wasm_bindgen]
pub struct GameApp {
    session: GameSession<RandomChooser<StdRng>>,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: 初期化中...");
        let chooser = RandomChooser::new(StdRng::from_entropy());
        let session = GameSession::new(Catalog::standard(), chooser);
        info!("GameApp: 初期化完了。");
        Self { session }
    }

    /// "welcome" / "stage1" / "stage2" / "complete"
    pub fn stage(&self) -> String {
        self.session.stage().id().to_string()
    }

    /// ゲーム開始・もう一度遊ぶ。
    pub fn start_game(&mut self) {
        self.session.start();
    }

    pub fn new_order(&mut self) -> Result<(), JsValue> {
        self.session.new_order().map_err(to_js_error)
    }

    /// 今の注文 (OrderView) を JSON で返す。
    pub fn order_json(&self) -> Result<String, JsValue> {
        let view = OrderView::new(self.session.stage(), self.session.catalog(), self.session.order());
        to_json(&view)
    }

    /// 入力欄が変わった時に呼ぶ。`kind` は "egg" など、`part` は "numerator" / "denominator"。
    pub fn set_fraction(&mut self, kind: &str, part: &str, value: String) -> Result<(), JsValue> {
        let kind: IngredientKind = kind.parse().map_err(to_js_error)?;
        let part: FractionPart = part.parse().map_err(to_js_error)?;
        self.session.set_fraction(kind, part, value).map_err(to_js_error)
    }

    /// 答え合わせ。結果 (FractionResult) を JSON で返す。
    pub fn submit_fractions(&mut self) -> Result<String, JsValue> {
        let correct = self.session.submit_fractions().map_err(to_js_error)?;
        to_json(&FractionResult::new(correct))
    }

    /// 2段階目で表示する、確定した分数 (PlayerFractionsView) を JSON で返す。
    pub fn player_fractions_json(&self) -> Result<String, JsValue> {
        let fractions = self
            .session
            .player_fractions()
            .cloned()
            .ok_or_else(|| JsValue::from(js_sys::Error::new("fractions have not been accepted yet")))?;
        to_json(&PlayerFractionsView { fractions })
    }

    /// ドロップされたもの ("egg" や "bun-top") をスタックに積む。
    pub fn drop_placement(&mut self, placement: &str) -> Result<(), JsValue> {
        let placement: Placement = placement.parse().map_err(to_js_error)?;
        self.session.drop_placement(placement).map_err(to_js_error)
    }

    /// 一番上を取り除く。取り除いたものの ID を返す (空なら None)。
    pub fn undo_placement(&mut self) -> Result<Option<String>, JsValue> {
        let removed = self.session.undo_placement().map_err(to_js_error)?;
        Ok(removed.map(|placement| placement.id().to_string()))
    }

    pub fn reset_stack(&mut self) -> Result<(), JsValue> {
        self.session.reset_stack().map_err(to_js_error)
    }

    /// スタックとヒント (StackView) を JSON で返す。
    pub fn stack_json(&self) -> Result<String, JsValue> {
        let view = StackView::new(self.session.catalog(), self.session.stack(), self.session.hint());
        to_json(&view)
    }

    /// 完成チェック。結果 (StackResult) を JSON で返す。
    pub fn submit_stack(&mut self) -> Result<String, JsValue> {
        let outcome = self.session.submit_stack().map_err(to_js_error)?;
        to_json(&StackResult::new(outcome))
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
