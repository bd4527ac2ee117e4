use clap::Parser;
use sp_field_finder::{cli, config, error, export, jira, matcher};
use cli::Cli;
use config::Config;
use error::{Result, SpFinderError};
use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = tokio::select! {
        result = run(cli) => match result {
            Ok(()) => 0,
            Err(e @ SpFinderError::NoNumericField) => {
                eprintln!("{}", e);
                2
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                1
            }
        },
        _ = tokio::signal::ctrl_c() => {
            println!("\n中断されました。");
            130
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    println!("🔍 sp-field-finder - Story Pointsフィールド探索\n");
    println!("→ Issue: {}", cli.issue);

    let config = Config::load()?;
    let token = config.resolve_token(cli.token.clone())?;
    let params = matcher::ScanParams {
        target: cli.target,
        tolerance: cli.tolerance,
    };

    let client = jira::JiraClient::new(&cli.base_url, &cli.email, &token)?;

    // 1. issue取得（フィールド値 + 表示名マップ）
    println!("\n[1/3] issueを取得中...");
    let issue = client.fetch_issue_with_names(&cli.issue).await?;
    if cli.verbose {
        println!("  フィールド数: {}", issue.fields.len());
    }

    // 2. フィールド定義の取得（schema型・表示名のフォールバック用）
    println!("[2/3] フィールド定義を取得中...");
    let defs = client.fetch_all_fields().await?;
    if cli.verbose {
        println!("  定義数: {}", defs.len());
    }
    let catalog = jira::FieldCatalog::from_defs(defs);

    // 3. 走査と選定
    println!("[3/3] フィールドを走査中...");
    let scan = matcher::scan_fields(&issue.fields, &issue.names, &catalog, &params);

    if cli.show_all {
        export::print_non_numeric(&scan.non_numeric);
    }

    let ranked = matcher::ranked(&scan.candidates, params.target);
    export::print_candidates(&ranked, &params);

    let chosen = matcher::choose(&scan, &params).ok_or(SpFinderError::NoNumericField)?;
    export::print_result(&chosen, &scan.hits, &params);

    let report = export::RunReport {
        issue: cli.issue.clone(),
        target: params.target,
        tolerance: params.tolerance,
        best: chosen.candidate.clone(),
        all_numeric: ranked,
    };
    export::write_report(&report, Path::new(export::RESULT_FILE_NAME))?;
    println!("\n✔ 結果を保存: {}", export::RESULT_FILE_NAME);

    Ok(())
}
