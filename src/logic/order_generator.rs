// src/logic/order_generator.rs
//! ランダムな注文を作るロジックだよ！🎲
//!
//! 注文の個数は必ず全体数の約数から選ぶ。だから「注文数 / 全体数」は
//! いつでもきれいな分数になるんだ。

use log::debug;
use rand::Rng;

use crate::components::order::Order;
use crate::config::catalog::Catalog;

/// `n` の正の約数を小さい順に全部返す (1 と n 自身も含む)。
///
/// 全体数は小さい定数なので、1..=n を素直に調べるだけで十分。
pub fn divisors(n: u32) -> Vec<u32> {
    (1..=n).filter(|i| n % i == 0).collect()
}

/// 候補リストから何番目を選ぶかを決める役。
///
/// テストでは決まった番号を返すものに差し替えられるように、トレイトにしてあるよ。
pub trait IndexChooser {
    /// `0 <= 戻り値 < len` を返すこと。`len` は 1 以上で呼ばれる。
    fn choose_index(&mut self, len: usize) -> usize;
}

/// rand の乱数生成器で一様に選ぶ Chooser。
#[derive(Debug, Clone)]
pub struct RandomChooser<R> {
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexChooser for RandomChooser<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// 決めておいた番号を順番に返す Chooser。最後まで行ったら最初に戻る。
/// 番号が `len` 以上なら `len` で割った余りを使う。
#[derive(Debug, Clone)]
pub struct ScriptedChooser {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedChooser {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl IndexChooser for ScriptedChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let raw = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        raw % len
    }
}

/// カタログの材料ごとに、全体数の約数から1つ選んで注文を作る。
/// 材料ごとの選択はお互いに独立だよ。
pub fn generate_order<C: IndexChooser + ?Sized>(catalog: &Catalog, chooser: &mut C) -> Order {
    let order = Order::from_quantities(catalog.iter().map(|descriptor| {
        let candidates = divisors(descriptor.total);
        let picked = candidates[chooser.choose_index(candidates.len())];
        (descriptor.kind, picked)
    }));
    debug!("[OrderGenerator] generated order: {:?}", order);
    order
}
