use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// 課題取得時のオプション
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct IssueQuery {
    /// 取得するサブリソース（例: `comment`）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,

    #[serde(rename = "orderBy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl IssueQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(mut self, tree: impl Into<String>) -> Self {
        self.tree = Some(tree.into());
        self
    }

    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// changelogを作成日時順で展開するクエリ
    pub fn changelog() -> Self {
        Self::new().expand("changelog").order_by("created")
    }

    /// 空でないクエリパラメータ
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [("expand", &self.expand), ("orderBy", &self.order_by)]
            .into_iter()
            .filter_map(|(name, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (name, v))
            })
            .collect()
    }
}

/// 担当者変更用の更新ボディを作成
pub fn assignee_update(assignee: &str) -> Value {
    json!({
        "fields": {
            "assignee": { "name": assignee }
        }
    })
}
