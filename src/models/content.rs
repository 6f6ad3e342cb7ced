//! Collection-backed portfolio content: projects, experiences, posts, skills.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_vec, deserialize_optional_id};

/// A showcased project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A work history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub company: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    /// `None` while the position is current.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub highlights: Vec<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    /// "Mar 2021 - Present" style range.
    pub fn period(&self) -> String {
        let start = self.start_date.format("%b %Y");
        match self.end_date {
            Some(end) => format!("{} - {}", start, end.format("%b %Y")),
            None => format!("{} - Present", start),
        }
    }
}

/// A blog post. `content` is markdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// A skill shown on the about page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Proficiency from 1 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_from_camel_case() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "termfolio",
            "techStack": ["rust", "ratatui"],
            "repoUrl": "https://example.com/repo",
        }))
        .unwrap();
        assert_eq!(project.id.as_deref(), Some("7"));
        assert_eq!(project.tech_stack, vec!["rust", "ratatui"]);
        assert_eq!(project.repo_url.as_deref(), Some("https://example.com/repo"));
        assert!(!project.featured);
    }

    #[test]
    fn test_project_serializes_without_missing_id() {
        let project = Project {
            title: "New".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&project).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("techStack").is_some());
    }

    #[test]
    fn test_experience_period() {
        let current: Experience = serde_json::from_value(serde_json::json!({
            "company": "Acme",
            "role": "Engineer",
            "startDate": "2021-03-01",
        }))
        .unwrap();
        assert!(current.is_current());
        assert_eq!(current.period(), "Mar 2021 - Present");

        let past = Experience {
            end_date: NaiveDate::from_ymd_opt(2023, 1, 15),
            ..current
        };
        assert_eq!(past.period(), "Mar 2021 - Jan 2023");
    }

    #[test]
    fn test_post_null_tags() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "title": "Hello",
            "tags": null,
        }))
        .unwrap();
        assert!(post.tags.is_empty());
    }
}
