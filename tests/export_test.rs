//! 結果ファイル書き出しの統合テスト

use sp_field_finder::export::{self, RunReport};
use sp_field_finder::matcher::{self, NumericCandidate, ScanParams, ScanResult};
use tempfile::tempdir;

fn candidate(id: &str, name: &str, schema: Option<&str>, value: f64) -> NumericCandidate {
    NumericCandidate {
        id: id.to_string(),
        name: name.to_string(),
        schema: schema.map(str::to_string),
        value,
    }
}

#[test]
fn test_write_report_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("result.json");

    let best = candidate("customfield_10016", "Story Points", Some("number"), 2.5);
    let report = RunReport {
        issue: "FGC-9446".to_string(),
        target: 2.5,
        tolerance: 1e-9,
        best: best.clone(),
        all_numeric: vec![best, candidate("customfield_10020", "Sprint数", None, 3.0)],
    };

    export::write_report(&report, &path).expect("書き出しに失敗");

    let content = std::fs::read_to_string(&path).expect("結果ファイルが読めない");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("結果ファイルが不正なJSON");

    assert_eq!(parsed["issue"], "FGC-9446");
    assert_eq!(parsed["target"], 2.5);
    assert_eq!(parsed["tolerance"], 1e-9);
    assert_eq!(parsed["best"]["id"], "customfield_10016");
    assert_eq!(parsed["best"]["name"], "Story Points");
    assert_eq!(parsed["best"]["schema"], "number");
    assert_eq!(parsed["best"]["value"], 2.5);
    assert_eq!(parsed["all_numeric"].as_array().unwrap().len(), 2);
    // schema未解決はnullで書き出される
    assert_eq!(parsed["all_numeric"][1]["schema"], serde_json::Value::Null);

    // 整形出力（人間可読なインデント付き）であること
    assert!(content.contains('\n'));
}

#[test]
fn test_write_report_overwrites_existing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("result.json");

    let first = RunReport {
        issue: "FGC-1".to_string(),
        target: 2.5,
        tolerance: 1e-9,
        best: candidate("a", "A", None, 2.5),
        all_numeric: vec![candidate("a", "A", None, 2.5)],
    };
    let second = RunReport {
        issue: "FGC-2".to_string(),
        ..first.clone()
    };

    export::write_report(&first, &path).unwrap();
    export::write_report(&second, &path).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["issue"], "FGC-2");
}

/// 書き出されるbestは選定結果そのもの（表示と結果ファイルの一致）
#[test]
fn test_report_best_matches_chosen() {
    let params = ScanParams::default();
    let scan = ScanResult {
        candidates: vec![
            candidate("a", "A", None, 1.9),
            candidate("b", "B", None, 2.5),
        ],
        hits: vec![candidate("b", "B", None, 2.5)],
        non_numeric: vec![],
    };

    let chosen = matcher::choose(&scan, &params).unwrap();
    let report = RunReport {
        issue: "FGC-9446".to_string(),
        target: params.target,
        tolerance: params.tolerance,
        best: chosen.candidate.clone(),
        all_numeric: matcher::ranked(&scan.candidates, params.target),
    };

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("result.json");
    export::write_report(&report, &path).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["best"]["id"], chosen.candidate.id.as_str());
    assert_eq!(parsed["best"]["value"], chosen.candidate.value);
}
