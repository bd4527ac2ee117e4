//! Jira REST APIクライアント
//!
//! 使用するエンドポイントは2つのみ:
//! - `GET /rest/api/3/issue/{key}?expand=names` （フィールド値 + 表示名マップ）
//! - `GET /rest/api/3/field` （全フィールド定義）
//!
//! 失敗時はリトライせず即時終了する。

use crate::error::{Result, SpFinderError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;

/// リクエストタイムアウト（秒）
const REQUEST_TIMEOUT_SECS: u64 = 25;

/// エラーレスポンス本文をメッセージに残す最大文字数
const BODY_EXCERPT_CHARS: usize = 300;

/// Basic認証 + JSON送受信ヘッダを構築する
pub fn basic_headers(email: &str, token: &str) -> HashMap<&'static str, String> {
    let auth = STANDARD.encode(format!("{}:{}", email, token));
    HashMap::from([
        ("Authorization", format!("Basic {}", auth)),
        ("Accept", "application/json".to_string()),
        ("Content-Type", "application/json".to_string()),
    ])
}

/// issue本体。fields/namesは欠損・不正時に空マップとして扱う
#[derive(Debug, Clone, Deserialize, Default)]
pub struct IssueWithNames {
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub names: Map<String, Value>,
}

/// `/rest/api/3/field` の1エントリ
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FieldDef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub schema: Option<FieldSchema>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FieldSchema {
    #[serde(rename = "type", default)]
    pub schema_type: Option<String>,
    #[serde(default)]
    pub items: Option<String>,
}

impl FieldSchema {
    /// type、なければitemsの型を返す
    pub fn effective_type(&self) -> Option<&str> {
        self.schema_type.as_deref().or(self.items.as_deref())
    }
}

/// フィールド定義から導出する検索用マップ
///
/// issue側のnamesマップに無いフィールドの表示名・schema型の
/// フォールバックとして使う。
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    schema_by_id: HashMap<String, String>,
    name_by_id: HashMap<String, String>,
}

impl FieldCatalog {
    pub fn from_defs(defs: Vec<FieldDef>) -> Self {
        let mut schema_by_id = HashMap::new();
        let mut name_by_id = HashMap::new();

        for def in defs {
            if def.id.is_empty() {
                continue;
            }
            if let Some(schema_type) = def.schema.as_ref().and_then(FieldSchema::effective_type) {
                schema_by_id.insert(def.id.clone(), schema_type.to_string());
            }
            if !def.name.is_empty() {
                name_by_id.insert(def.id.clone(), def.name);
            }
        }

        Self {
            schema_by_id,
            name_by_id,
        }
    }

    pub fn schema_type(&self, field_id: &str) -> Option<&str> {
        self.schema_by_id.get(field_id).map(String::as_str)
    }

    pub fn default_name(&self, field_id: &str) -> Option<&str> {
        self.name_by_id.get(field_id).map(String::as_str)
    }
}

pub struct JiraClient {
    client: reqwest::Client,
    base_url: String,
    email: String,
    token: String,
}

impl JiraClient {
    pub fn new(base_url: &str, email: &str, token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            email: email.to_string(),
            token: token.to_string(),
        })
    }

    /// issueをfields + 表示名マップ付きで取得する
    pub async fn fetch_issue_with_names(&self, issue_key: &str) -> Result<IssueWithNames> {
        let url = format!(
            "{}/rest/api/3/issue/{}?expand=names",
            self.base_url, issue_key
        );
        self.get_json(&url).await
    }

    /// 全フィールド定義を取得する
    pub async fn fetch_all_fields(&self) -> Result<Vec<FieldDef>> {
        let url = format!("{}/rest/api/3/field", self.base_url);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut request = self.client.get(url);
        for (key, value) in basic_headers(&self.email, &self.token) {
            request = request.header(key, value);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SpFinderError::Http {
                status,
                body: excerpt(&body),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

fn excerpt(body: &str) -> String {
    if body.chars().count() <= BODY_EXCERPT_CHARS {
        body.to_string()
    } else {
        body.chars().take(BODY_EXCERPT_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_headers() {
        let headers = basic_headers("a", "b");

        // "a:b" → "YTpi"
        assert_eq!(headers["Authorization"], "Basic YTpi");
        assert_eq!(headers["Accept"], "application/json");
        assert_eq!(headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_effective_type_prefers_type() {
        let schema = FieldSchema {
            schema_type: Some("number".to_string()),
            items: Some("string".to_string()),
        };
        assert_eq!(schema.effective_type(), Some("number"));
    }

    #[test]
    fn test_effective_type_falls_back_to_items() {
        let schema = FieldSchema {
            schema_type: None,
            items: Some("option".to_string()),
        };
        assert_eq!(schema.effective_type(), Some("option"));
    }

    #[test]
    fn test_catalog_lookups() {
        let defs: Vec<FieldDef> = serde_json::from_value(serde_json::json!([
            {"id": "customfield_10016", "name": "Story Points", "schema": {"type": "number"}},
            {"id": "summary", "name": "要約", "schema": {"type": "string"}},
            {"id": "labels", "name": "ラベル", "schema": {"type": "array", "items": "string"}},
            {"id": "noname", "name": "", "schema": null}
        ]))
        .unwrap();

        let catalog = FieldCatalog::from_defs(defs);

        assert_eq!(catalog.schema_type("customfield_10016"), Some("number"));
        assert_eq!(catalog.schema_type("labels"), Some("array"));
        assert_eq!(catalog.schema_type("noname"), None);
        assert_eq!(catalog.default_name("summary"), Some("要約"));
        assert_eq!(catalog.default_name("noname"), None);
        assert_eq!(catalog.default_name("unknown"), None);
    }

    #[test]
    fn test_issue_with_names_tolerates_missing_maps() {
        let issue: IssueWithNames = serde_json::from_value(serde_json::json!({
            "key": "FGC-9446"
        }))
        .unwrap();

        assert!(issue.fields.is_empty());
        assert!(issue.names.is_empty());
    }
}
