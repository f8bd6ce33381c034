//! 1段階目: 入力された分数が注文と等しいかを判定するルールだよ。

use log::debug;

use crate::components::fraction::{FractionEntry, FractionSheet};
use crate::components::ingredient::IngredientKind;
use crate::components::order::Order;
use crate::config::catalog::Catalog;

/// 入力欄の文字列を 0 以上の整数の「数字の並び」として読む。前後の空白は無視。
/// 負の数、小数、文字混じり、空欄は全部 None。
/// 桁数に上限は無いので、u64 に入らない大きな数もそのまま扱えるよ。
fn parse_digits(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // 先頭の 0 は取り除く ("007" → "7"、"000" → "")
    Some(trimmed.trim_start_matches('0'))
}

/// 10進の数字の並びを小さな数 `divisor` で割る (筆算と同じやり方)。
/// 戻り値は (商の数字の並び、余り)。商の先頭に 0 は付かない。
fn div_rem_digits(digits: &str, divisor: u32) -> (String, u32) {
    let divisor = u64::from(divisor);
    let mut quotient = String::with_capacity(digits.len());
    let mut remainder = 0u64;
    for b in digits.bytes() {
        let current = remainder * 10 + u64::from(b - b'0');
        let q = current / divisor;
        // ★ 先頭の 0 は書かない ★
        if !(quotient.is_empty() && q == 0) {
            quotient.push(char::from(b'0' + q as u8));
        }
        remainder = current % divisor;
    }
    (quotient, remainder as u32)
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// 1つの材料について、入力した分数が `ordered / total` と同じ値かチェックする。
///
/// 約分してなくても OK (3分の1 に対して 2/6 は正解)。
/// 浮動小数点は使わずに、たすき掛け `num * total == ordered * den` と同じ判定を整数だけで行う。
///
/// `ordered / total` を約分して `p / q` にすると、`num * q == p * den` が成り立つのは
/// `num = p * k` かつ `den = q * k` となる整数 k があるときだけ。
/// だから入力をそれぞれ p と q で割って、割り切れて商が同じかを見れば、何桁の入力でも正確に比べられる。
pub fn fraction_matches(entry: &FractionEntry, ordered: u32, total: u32) -> bool {
    let (Some(num), Some(den)) = (parse_digits(&entry.numerator), parse_digits(&entry.denominator))
    else {
        return false;
    };
    // 分母 0 はダメ (0 除算ガード)
    if den.is_empty() || total == 0 {
        return false;
    }

    // ★ 注文の分数を約分する (ordered == 0 なら 0/1 になる) ★
    let g = gcd(ordered, total);
    let (p, q) = (ordered / g, total / g);

    if p == 0 {
        // 注文 0 個のときは、分子が 0 なら正解
        return num.is_empty();
    }

    let (num_quotient, num_rem) = div_rem_digits(num, p);
    let (den_quotient, den_rem) = div_rem_digits(den, q);
    num_rem == 0 && den_rem == 0 && num_quotient == den_quotient
}

/// カタログ順に見て、最初に間違っている材料を返す。全部正しければ None。
/// 入力が無い材料も間違い扱い。
pub fn first_incorrect(
    catalog: &Catalog,
    order: &Order,
    sheet: &FractionSheet,
) -> Option<IngredientKind> {
    // ★ カタログに並んでいる順に見る ★
    catalog.iter().map(|descriptor| descriptor.kind).find(|&kind| {
        sheet
            .entry(kind)
            .map_or(true, |entry| !fraction_matches(entry, order.get(kind), catalog.total(kind)))
    })
}

/// 全ての材料の分数が正しいか判定する。1つでも違えばそこで打ち切って false。
pub fn validate_fractions(catalog: &Catalog, order: &Order, sheet: &FractionSheet) -> bool {
    match first_incorrect(catalog, order, sheet) {
        Some(kind) => {
            debug!("[Fraction Rule] incorrect fraction for {}: {:?}", kind, sheet.entry(kind));
            false
        }
        None => {
            debug!("[Fraction Rule] all fractions match the order");
            true
        }
    }
}
