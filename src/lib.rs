//! Jira Story Pointsフィールド探索ツール
//!
//! issueの全フィールドと全フィールド定義をREST APIから取得し、
//! 目標値に一致（または最も近い）数値フィールドのIDを特定する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod jira;
pub mod matcher;
pub mod normalizer;
