//! 結果出力モジュール
//!
//! 候補一覧・選定結果の表示と、結果JSONファイルの書き出し。

use crate::error::Result;
use crate::matcher::{Chosen, NonNumericField, NumericCandidate, ScanParams};
use serde::Serialize;
use std::path::Path;

/// 結果ファイル名（カレントディレクトリに書き出す）
pub const RESULT_FILE_NAME: &str = "find_sp_field_result.json";

/// 数値化できなかったフィールドの一覧を表示する（--show-all時のみ呼ばれる）
pub fn print_non_numeric(fields: &[NonNumericField]) {
    for field in fields {
        println!(
            "  - {:>18}  {}  [schema:{}]  = {}",
            field.id,
            field.name,
            field.schema.as_deref().unwrap_or("-"),
            field.raw_preview
        );
    }
}

/// 候補一覧を距離の昇順で表示する
pub fn print_candidates(ranked: &[NumericCandidate], params: &ScanParams) {
    println!("\n=== 数値候補 ===");

    if ranked.is_empty() {
        println!("  （数値フィールドなし）");
        return;
    }

    for candidate in ranked {
        let marker = if candidate.is_hit(params) { "★ match" } else { "" };
        println!(
            "{:7} {:>18}  {}  [schema:{}]  = {}",
            marker,
            candidate.id,
            candidate.name,
            candidate.schema.as_deref().unwrap_or("-"),
            candidate.value
        );
    }
}

/// 選定結果と実用上のヒント（設定すべきフィールドID）を表示する
pub fn print_result(chosen: &Chosen, hits: &[NumericCandidate], params: &ScanParams) {
    println!("\n=== 結果 ===");

    if chosen.exact {
        println!("目標値に完全一致したフィールド:");
        for hit in hits {
            println!(
                "  -> {} ({}) = {}  [schema:{}]",
                hit.name,
                hit.id,
                hit.value,
                hit.schema.as_deref().unwrap_or("-")
            );
        }
    } else {
        let candidate = &chosen.candidate;
        println!("完全一致なし。最も近いフィールド:");
        println!(
            "  -> {} ({}) = {}  [schema:{}]  (Δ={})",
            candidate.name,
            candidate.id,
            candidate.value,
            candidate.schema.as_deref().unwrap_or("-"),
            candidate.distance(params.target)
        );
    }

    println!("\n拡張機能に設定するStory PointsフィールドID:");
    println!(
        "  spFieldIdFixed = \"{}\"    # 表示名: {}",
        chosen.candidate.id, chosen.candidate.name
    );
}

/// 1回の実行結果。成功時に1度だけシリアライズされる
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub issue: String,
    pub target: f64,
    pub tolerance: f64,
    pub best: NumericCandidate,
    pub all_numeric: Vec<NumericCandidate>,
}

/// 結果JSONを書き出す（既存ファイルは無条件で上書き）
pub fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
