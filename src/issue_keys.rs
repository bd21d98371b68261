use crate::{Error, Result};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// 課題キーのデフォルトパターン（例: `PROJ-123`）
pub const DEFAULT_ISSUE_PATTERN: &str = r"(?i)([a-zA-Z][a-zA-Z0-9_]+-[1-9][0-9]*)";

/// テキストから課題キーを抽出する
#[derive(Debug, Clone)]
pub struct IssueKeyMatcher {
    pattern: Regex,
}

impl IssueKeyMatcher {
    /// 任意のパターンでマッチャーを作成
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            Error::InvalidConfiguration(format!("Invalid issue pattern '{}': {}", pattern, e))
        })?;

        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// テキスト中の課題キーをプロジェクトキーごとにまとめる
    ///
    /// プロジェクトキーは最初の`-`より前の部分。
    pub fn match_issues(&self, text: &str) -> BTreeMap<String, BTreeSet<String>> {
        let mut issues: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for found in self.pattern.find_iter(text) {
            let key = found.as_str();
            let project = key.split('-').next().unwrap_or(key);

            issues
                .entry(project.to_string())
                .or_default()
                .insert(key.to_string());
        }

        issues
    }
}

impl Default for IssueKeyMatcher {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_ISSUE_PATTERN).expect("default issue pattern is valid"),
        }
    }
}
