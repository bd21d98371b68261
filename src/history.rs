use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ステータス変更を表すフィールド名
pub const STATUS_FIELD: &str = "status";

/// 課題の変更履歴レコード（changelog.historiesの1エントリ）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeRecord {
    /// 変更が発生した日時
    pub created_at: DateTime<Utc>,
    /// このレコードに含まれるフィールド単位の変更
    pub items: Vec<FieldDelta>,
}

/// フィールド単位の変更
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDelta {
    /// 変更されたフィールド名
    pub field: String,
    /// 変更前の表示値
    pub from_value: Option<String>,
    /// 変更後の表示値
    pub to_value: Option<String>,
}

/// ステータス遷移
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transition {
    pub timestamp: DateTime<Utc>,
    pub from: String,
    pub to: String,
}

impl ChangeRecord {
    /// 新しい履歴レコードを作成
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            items: Vec::new(),
        }
    }

    /// フィールド変更を追加
    pub fn with_item(mut self, item: FieldDelta) -> Self {
        self.items.push(item);
        self
    }

    /// ステータス変更を追加
    pub fn with_status_change(self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.with_item(FieldDelta::new(STATUS_FIELD, Some(from.into()), Some(to.into())))
    }

    /// このレコード内のステータス遷移
    pub fn status_transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.items
            .iter()
            .filter(|item| item.is_status_change())
            .map(|item| Transition {
                timestamp: self.created_at,
                from: item.from_value.clone().unwrap_or_default(),
                to: item.to_value.clone().unwrap_or_default(),
            })
    }
}

impl FieldDelta {
    pub fn new(
        field: impl Into<String>,
        from_value: Option<String>,
        to_value: Option<String>,
    ) -> Self {
        Self {
            field: field.into(),
            from_value,
            to_value,
        }
    }

    pub fn is_status_change(&self) -> bool {
        self.field == STATUS_FIELD
    }
}

impl Transition {
    pub fn new(timestamp: DateTime<Utc>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            timestamp,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// 変更履歴からステータス遷移を時系列順に抽出
///
/// 入力レコードの順序は問わない。同一時刻の遷移は入力順を保持する（安定ソート）。
/// nullのfrom/to値は空文字列のステータス名として扱う。
pub fn extract_transitions(history: &[ChangeRecord]) -> Vec<Transition> {
    let mut transitions: Vec<Transition> = history
        .iter()
        .flat_map(ChangeRecord::status_transitions)
        .collect();

    transitions.sort_by_key(|t| t.timestamp);
    transitions
}
