//! 数値正規化モジュール
//!
//! トラッカーが返す任意形状のフィールド値をf64へ変換する。
//! 変換規則（上から順に適用）:
//! 1. null → 変換不可
//! 2. 数値（boolは型上ここに来ない）→ そのままf64
//! 3. 文字列 → カンマを小数点に置換してパース（"2,5"のようなロケール表記を許容）
//! 4. オブジェクト → value / amount / number キーを優先順に探し、最初に
//!    見つかったキーの値へ再帰（カスタムフィールドは数値をラップして返すことがある）
//! 5. それ以外（bool・配列など）→ 変換不可

use serde_json::Value;

/// ラップ形式のカスタムフィールドが数値を包むキー（優先順）
const WRAPPER_KEYS: [&str; 3] = ["value", "amount", "number"];

/// 値をf64に変換できるなら変換する
///
/// 返る値は必ず有限。"inf"等のパース結果は変換不可として扱う。
/// ラップキーが存在して中身が変換不可の場合、後続キーは試さない。
pub fn to_float_maybe(value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite()),
        Value::Object(map) => WRAPPER_KEYS
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(to_float_maybe),
        _ => None,
    }
}
