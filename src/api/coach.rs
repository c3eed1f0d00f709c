//! AI coaching endpoint client.
//!
//! The coaching endpoint accepts free-text input plus context and returns
//! suggested tasks with priority, complexity, and subtask hints. The
//! response is an untyped object with optional fields, so it is parsed into
//! a typed record at this boundary and validated on ingress: titles are
//! required, complexity is clamped into range, and unrecognized priority
//! text is dropped. Nothing untyped crosses into the rest of the crate.

use crate::libs::config::CoachConfig;
use crate::libs::task::{Priority, Task};
use anyhow::Result;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

const COACH_PATH: &str = "v1/coach";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "snake_case")]
pub enum CoachRequestKind {
    Task,
    BrainDump,
}

#[derive(Serialize, Debug)]
pub struct CoachContext {
    pub existing_tasks: Vec<String>,
    pub include_historical_data: bool,
}

#[derive(Serialize, Debug)]
pub struct CoachRequest {
    pub input: String,
    #[serde(rename = "type")]
    pub kind: CoachRequestKind,
    pub context: CoachContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl CoachRequest {
    /// Builds a request carrying the existing task titles as context and the
    /// configured model hint, when one is set.
    pub fn new(input: String, kind: CoachRequestKind, existing: &[Task], config: &CoachConfig) -> Self {
        CoachRequest {
            input,
            kind,
            context: CoachContext {
                existing_tasks: existing.iter().map(|t| t.title.clone()).collect(),
                include_historical_data: true,
            },
            model: config.model.clone(),
        }
    }
}

/// A single task suggested by the coach, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSuggestion {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_time: Option<String>,
    pub subtasks: Vec<String>,
    pub tags: Vec<String>,
    pub complexity: i64,
}

impl TaskSuggestion {
    /// Parses one suggestion object. Returns `None` when the title is
    /// missing or empty; every other field falls back to a default.
    fn from_value(value: &Value) -> Option<Self> {
        let title = value.get("title")?.as_str()?.trim();
        if title.is_empty() {
            return None;
        }
        Some(TaskSuggestion {
            title: title.to_string(),
            description: string_field(value, "description"),
            priority: priority_field(value, "priority").unwrap_or_default(),
            estimated_time: value.get("estimated_time").and_then(Value::as_str).map(str::to_string),
            subtasks: string_list(value, "subtasks"),
            tags: string_list(value, "tags"),
            complexity: Task::clamp_complexity(value.get("complexity").and_then(Value::as_i64).unwrap_or(crate::libs::task::DEFAULT_COMPLEXITY)),
        })
    }
}

/// The coach's full reply, with every field optional at the wire level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoachResponse {
    pub message: Option<String>,
    pub priority_suggestion: Option<Priority>,
    pub tasks: Vec<TaskSuggestion>,
    pub subtasks: Vec<String>,
}

impl CoachResponse {
    /// Validates the raw endpoint payload into the typed record.
    pub fn from_value(value: &Value) -> Self {
        let tasks = value
            .get("tasks")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(TaskSuggestion::from_value).collect())
            .unwrap_or_default();

        CoachResponse {
            message: value.get("message").and_then(Value::as_str).map(str::to_string),
            priority_suggestion: priority_field(value, "priority_suggestion"),
            tasks,
            subtasks: string_list(value, "subtasks"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.subtasks.is_empty() && self.priority_suggestion.is_none()
    }
}

pub struct Coach {
    client: Client,
    config: CoachConfig,
}

impl Coach {
    pub fn new(config: &CoachConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Sends a coaching request and returns the validated response.
    ///
    /// Network and endpoint failures surface as errors; callers degrade to
    /// working without suggestions rather than retrying.
    pub async fn get_coaching_response(&self, request: &CoachRequest) -> Result<CoachResponse> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), COACH_PATH);
        let mut req = self.client.post(url).json(request);
        if let Some(token) = &self.config.auth_token {
            req = req.bearer_auth(token);
        }

        let res = req.send().await?;
        if !res.status().is_success() {
            anyhow::bail!("Coach endpoint returned {}", res.status());
        }

        let value = res.json::<Value>().await?;
        Ok(CoachResponse::from_value(&value))
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

fn priority_field(value: &Value, key: &str) -> Option<Priority> {
    match value.get(key).and_then(Value::as_str) {
        Some("low") => Some(Priority::Low),
        Some("medium") => Some(Priority::Medium),
        Some("high") => Some(Priority::High),
        _ => None,
    }
}
