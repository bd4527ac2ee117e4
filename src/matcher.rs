//! フィールド走査と候補選定
//!
//! issueの全フィールドを出現順に走査し、数値化できたものを候補として
//! 目標値への距離で順位付けする。
//!
//! ## 処理フロー
//! 1. 表示名とschema型の解決（issueのnames → フィールド定義 → ID）
//! 2. 値の数値化（できなければ候補から除外）
//! 3. 許容誤差内の完全一致を記録
//! 4. 距離の昇順に整列して最良候補を選定

use crate::jira::FieldCatalog;
use crate::normalizer;
use serde::Serialize;
use serde_json::{Map, Value};

/// 数値化できなかったフィールドの生値プレビューの最大文字数
const RAW_PREVIEW_CHARS: usize = 80;

/// 走査パラメータ
#[derive(Debug, Clone, Copy)]
pub struct ScanParams {
    /// 探索する目標値
    pub target: f64,
    /// 一致とみなす許容誤差
    pub tolerance: f64,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            target: 2.5,
            tolerance: 1e-9,
        }
    }
}

/// 数値化に成功したフィールド
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericCandidate {
    pub id: String,
    pub name: String,
    pub schema: Option<String>,
    pub value: f64,
}

impl NumericCandidate {
    /// 目標値との距離
    pub fn distance(&self, target: f64) -> f64 {
        (self.value - target).abs()
    }

    /// 許容誤差内で目標値に一致するか
    pub fn is_hit(&self, params: &ScanParams) -> bool {
        params.target.is_finite() && self.distance(params.target) <= params.tolerance
    }
}

/// 数値化できなかったフィールド（--show-all表示用）
#[derive(Debug, Clone)]
pub struct NonNumericField {
    pub id: String,
    pub name: String,
    pub schema: Option<String>,
    /// 生値のJSONプレビュー
    pub raw_preview: String,
}

/// 走査結果。candidates / hits / non_numericはいずれも出現順
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub candidates: Vec<NumericCandidate>,
    pub hits: Vec<NumericCandidate>,
    pub non_numeric: Vec<NonNumericField>,
}

/// 選定された最良候補
#[derive(Debug, Clone, PartialEq)]
pub struct Chosen {
    pub candidate: NumericCandidate,
    /// 許容誤差内の完全一致だったか
    pub exact: bool,
}

/// issueの全フィールドを走査する
pub fn scan_fields(
    fields: &Map<String, Value>,
    names: &Map<String, Value>,
    catalog: &FieldCatalog,
    params: &ScanParams,
) -> ScanResult {
    let mut result = ScanResult::default();

    for (field_id, raw_value) in fields {
        let name = resolve_name(field_id, names, catalog);
        let schema = catalog.schema_type(field_id).map(str::to_string);

        match normalizer::to_float_maybe(raw_value) {
            Some(value) => {
                let candidate = NumericCandidate {
                    id: field_id.clone(),
                    name,
                    schema,
                    value,
                };
                if candidate.is_hit(params) {
                    result.hits.push(candidate.clone());
                }
                result.candidates.push(candidate);
            }
            None => {
                result.non_numeric.push(NonNumericField {
                    id: field_id.clone(),
                    name,
                    schema,
                    raw_preview: preview(raw_value),
                });
            }
        }
    }

    result
}

/// 候補を目標値への距離の昇順に並べる。同距離は出現順を保つ
pub fn ranked(candidates: &[NumericCandidate], target: f64) -> Vec<NumericCandidate> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| a.distance(target).total_cmp(&b.distance(target)));
    sorted
}

/// 最良候補を選ぶ
///
/// 完全一致があれば走査順で最初の一致（距離順ではない）。
/// なければ距離順で最も近い候補。候補ゼロならNone。
pub fn choose(scan: &ScanResult, params: &ScanParams) -> Option<Chosen> {
    if let Some(hit) = scan.hits.first() {
        return Some(Chosen {
            candidate: hit.clone(),
            exact: true,
        });
    }

    ranked(&scan.candidates, params.target)
        .into_iter()
        .next()
        .map(|candidate| Chosen {
            candidate,
            exact: false,
        })
}

/// 表示名の解決（issueのnames → フィールド定義の名前 → フィールドID）
///
/// 空文字列の名前は未設定として次のフォールバックへ進む。
fn resolve_name(field_id: &str, names: &Map<String, Value>, catalog: &FieldCatalog) -> String {
    names
        .get(field_id)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| catalog.default_name(field_id).filter(|s| !s.is_empty()))
        .unwrap_or(field_id)
        .to_string()
}

fn preview(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() <= RAW_PREVIEW_CHARS {
        text
    } else {
        text.chars().take(RAW_PREVIEW_CHARS).collect()
    }
}
