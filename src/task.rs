use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One item in the fetched collection. Immutable once fetched; nothing in
/// this crate mutates a record's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// The active display filter. `Open` keeps records whose completion flag is
/// false, `Completed` those where it is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Open,
    Completed,
}

impl Filter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Open => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "open" => Ok(Filter::Open),
            "completed" => Ok(Filter::Completed),
            other => Err(format!(
                "unknown filter: {other} (expected: all, open, completed)"
            )),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Filter::All => "all",
            Filter::Open => "open",
            Filter::Completed => "completed",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, completed: bool) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            completed,
        }
    }

    #[test]
    fn test_default_filter_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(Filter::All.matches(&task(1, false)));
        assert!(Filter::All.matches(&task(2, true)));
    }

    #[test]
    fn test_open_matches_incomplete_only() {
        assert!(Filter::Open.matches(&task(1, false)));
        assert!(!Filter::Open.matches(&task(2, true)));
    }

    #[test]
    fn test_completed_matches_complete_only() {
        assert!(!Filter::Completed.matches(&task(1, false)));
        assert!(Filter::Completed.matches(&task(2, true)));
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("open".parse::<Filter>().unwrap(), Filter::Open);
        assert_eq!("completed".parse::<Filter>().unwrap(), Filter::Completed);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "done".parse::<Filter>().unwrap_err();
        assert!(err.contains("unknown filter"));
    }

    #[test]
    fn test_display_roundtrip() {
        for mode in [Filter::All, Filter::Open, Filter::Completed] {
            assert_eq!(mode.to_string().parse::<Filter>().unwrap(), mode);
        }
    }

    #[test]
    fn test_task_deserializes_from_wire_shape() {
        let json = r#"{"id": 1, "title": "Buy milk", "completed": false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_ignores_extra_fields() {
        let json = r#"{"userId": 1, "id": 2, "title": "Pay bills", "completed": true}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 2);
        assert!(task.completed);
    }
}
