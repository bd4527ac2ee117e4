use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpFinderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIトークンが設定されていません。--token オプション、環境変数 JIRA_API_TOKEN、または設定ファイルで指定してください")]
    MissingToken,

    #[error("HTTPエラー: {status} {body}")]
    Http { status: u16, body: String },

    #[error("HTTP通信エラー: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("数値フィールドが見つかりませんでした。権限またはissueキーを確認してください")]
    NoNumericField,
}

pub type Result<T> = std::result::Result<T, SpFinderError>;
