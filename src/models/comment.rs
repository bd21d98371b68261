use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// コメントの公開範囲
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentVisibility {
    #[serde(rename = "type")]
    pub visibility_type: String,
    pub value: String,
}

impl CommentVisibility {
    /// ロール限定（デフォルトの公開範囲タイプ）
    pub fn role(value: impl Into<String>) -> Self {
        Self {
            visibility_type: "role".to_string(),
            value: value.into(),
        }
    }

    pub fn group(value: impl Into<String>) -> Self {
        Self {
            visibility_type: "group".to_string(),
            value: value.into(),
        }
    }
}

/// 課題のコメント
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub body: Value, // 文字列またはADF形式のオブジェクト
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<CommentVisibility>,
}

/// `/issue/{key}/comment`のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentPage {
    #[serde(rename = "startAt")]
    #[serde(default)]
    pub start_at: u32,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    pub comments: Vec<Comment>,
}

/// コメント追加用の更新ボディを作成
pub fn comment_update(body: &str, visibility: Option<&CommentVisibility>) -> Value {
    let mut add = json!({ "body": body });
    if let Some(visibility) = visibility {
        add["visibility"] = json!(visibility);
    }

    json!({
        "update": {
            "comment": [ { "add": add } ]
        }
    })
}
