use serde::{Deserialize, Serialize};

use super::flexible_bool;

/// A task as listed by `GET /tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub done: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_shared: bool,
    pub owner_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /tasks/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    /// Ignored by the server unless the caller is an admin.
    pub is_shared: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_optional_fields() {
        let task: TaskRecord = serde_json::from_str(
            r#"{"title":"Write report","description":null,"done":0,"is_shared":1,"owner_id":3}"#,
        )
        .unwrap();
        assert_eq!(task.title, "Write report");
        assert!(task.description.is_none());
        assert!(!task.done);
        assert!(task.is_shared);
        assert_eq!(task.owner_id, 3);
        assert!(task.id.is_none());
    }
}
