// Query filtering for tasks

use crate::task::{Priority, Task};

/// Criteria for a non-mutating task query.
///
/// Every criterion is independently optional; absent or blank criteria impose
/// no constraint, and the set criteria combine with logical AND. The UI's
/// "All" priority sentinel maps to `priority: None` here.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring match against the task name.
    pub name_contains: Option<String>,
    /// Exact priority match.
    pub priority: Option<Priority>,
    /// Exact match against the stored due date string.
    pub due_date: Option<String>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(needle) = &self.name_contains {
            let needle = needle.trim();
            if !needle.is_empty() && !task.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }

        if let Some(priority) = &self.priority {
            if task.priority != *priority {
                return false;
            }
        }

        if let Some(due_date) = &self.due_date {
            if !due_date.trim().is_empty() && task.due_date != *due_date {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> Task {
        Task::new("Groceries", "weekly shop", Priority::Medium, "2024-03-05")
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(TaskFilter::new().matches(&groceries()));
    }

    #[test]
    fn test_blank_criteria_impose_no_constraint() {
        let filter = TaskFilter {
            name_contains: Some("   ".to_string()),
            priority: None,
            due_date: Some("".to_string()),
        };
        assert!(filter.matches(&groceries()));
    }

    #[test]
    fn test_name_substring_is_case_insensitive() {
        let mut filter = TaskFilter::new();

        filter.name_contains = Some("cer".to_string());
        assert!(filter.matches(&groceries()));

        filter.name_contains = Some("GROC".to_string());
        assert!(filter.matches(&groceries()));

        // "group" is not a substring of "groceries"
        filter.name_contains = Some("group".to_string());
        assert!(!filter.matches(&groceries()));
    }

    #[test]
    fn test_priority_is_exact_match() {
        let filter = TaskFilter {
            priority: Some(Priority::High),
            ..Default::default()
        };
        assert!(!filter.matches(&groceries()));

        let filter = TaskFilter {
            priority: Some(Priority::Medium),
            ..Default::default()
        };
        assert!(filter.matches(&groceries()));
    }

    #[test]
    fn test_due_date_is_exact_string_match() {
        let filter = TaskFilter {
            due_date: Some("2024-03-05".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&groceries()));

        let filter = TaskFilter {
            due_date: Some("2024-03-06".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&groceries()));
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let filter = TaskFilter {
            name_contains: Some("groc".to_string()),
            priority: Some(Priority::Medium),
            due_date: Some("2024-03-05".to_string()),
        };
        assert!(filter.matches(&groceries()));

        let filter = TaskFilter {
            name_contains: Some("groc".to_string()),
            priority: Some(Priority::High),
            due_date: Some("2024-03-05".to_string()),
        };
        assert!(!filter.matches(&groceries()));
    }
}
