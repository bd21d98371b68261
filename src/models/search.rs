use serde::{Deserialize, Serialize};

/// キーのみを要求した検索結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "startAt")]
    #[serde(default)]
    pub start_at: u32,

    #[serde(rename = "maxResults")]
    #[serde(default)]
    pub max_results: i64,

    #[serde(default)]
    pub total: u32,

    pub issues: Vec<IssueRef>,
}

/// 検索結果中の課題参照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRef {
    pub id: String,
    pub key: String,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
}

impl SearchResult {
    pub fn keys(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.key.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_result_deserialization() {
        let json_data = json!({
            "startAt": 0,
            "maxResults": 1000,
            "total": 2,
            "issues": [
                { "id": "10000", "key": "WE-1", "self": "https://example.atlassian.net/rest/api/2/issue/10000" },
                { "id": "10001", "key": "WE-2" }
            ]
        });

        let result: SearchResult = serde_json::from_value(json_data).unwrap();

        assert_eq!(result.total, 2);
        assert_eq!(result.keys(), vec!["WE-1", "WE-2"]);
    }
}
