use crate::history::{ChangeRecord, FieldDelta};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// JIRAのchangelogを解析して変更履歴レコードを生成するパーサー
pub struct ChangelogParser;

impl ChangelogParser {
    /// `expand=changelog`付きで取得した課題JSONから履歴を取り出す
    ///
    /// changelogやhistoriesが存在しない場合は空の履歴として扱う。
    /// changelogがオブジェクト以外の場合はエラー。
    pub fn parse_issue(issue_json: &Value) -> Result<Vec<ChangeRecord>> {
        match issue_json.get("changelog") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(changelog) => Self::parse_changelog(changelog),
        }
    }

    /// changelogオブジェクト（`{ "histories": [...] }`）を解析
    pub fn parse_changelog(changelog_json: &Value) -> Result<Vec<ChangeRecord>> {
        if !changelog_json.is_object() {
            return Err(Error::MalformedHistory(
                "changelog is not an object".to_string(),
            ));
        }

        let histories = match changelog_json.get("histories") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(histories)) => histories,
            Some(_) => {
                return Err(Error::MalformedHistory(
                    "histories is not an array".to_string(),
                ));
            }
        };

        histories
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::parse_history_entry(index, entry))
            .collect()
    }

    fn parse_history_entry(index: usize, entry: &Value) -> Result<ChangeRecord> {
        let created = entry
            .get("created")
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                Error::MalformedHistory(format!("history #{} has no created timestamp", index))
            })?;

        let created_at = parse_changelog_timestamp(created).map_err(|e| {
            Error::MalformedHistory(format!(
                "history #{} has invalid timestamp '{}': {}",
                index, created, e
            ))
        })?;

        let items = entry
            .get("items")
            .and_then(|i| i.as_array())
            .ok_or_else(|| {
                Error::MalformedHistory(format!("history #{} has no items array", index))
            })?;

        let items = items
            .iter()
            .map(|item| {
                let field = item.get("field").and_then(|f| f.as_str()).ok_or_else(|| {
                    Error::MalformedHistory(format!(
                        "history #{} has an item without field name",
                        index
                    ))
                })?;

                Ok(FieldDelta::new(
                    field,
                    string_value(item, "fromString"),
                    string_value(item, "toString"),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ChangeRecord { created_at, items })
    }
}

fn string_value(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// changelogのタイムスタンプをパース
///
/// RFC3339形式と、JIRAの`2024-01-15T10:30:00.000+0000`形式を受け付ける。
pub fn parse_changelog_timestamp(timestamp: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(timestamp)
        .or_else(|_| DateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map(|dt| dt.with_timezone(&Utc))
}
