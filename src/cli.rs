use clap::Parser;

#[derive(Parser)]
#[command(name = "sp-finder")]
#[command(about = "Jira issueの全フィールドを走査してStory Pointsフィールドを特定するツール", long_about = None)]
pub struct Cli {
    /// JiraのベースURL（例: https://tenant.atlassian.net）
    #[arg(long)]
    pub base_url: String,

    /// Jiraアカウントのメールアドレス
    #[arg(long)]
    pub email: String,

    /// Jira APIトークン（省略時は環境変数JIRA_API_TOKEN→設定ファイルの順に参照）
    #[arg(long)]
    pub token: Option<String>,

    /// Issueキー（例: FGC-9446）
    #[arg(long)]
    pub issue: String,

    /// 探索する目標値
    #[arg(long, default_value = "2.5")]
    pub target: f64,

    /// 数値比較の許容誤差
    #[arg(long, default_value = "1e-9")]
    pub tolerance: f64,

    /// 数値化できなかったフィールドも表示する
    #[arg(long)]
    pub show_all: bool,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}
