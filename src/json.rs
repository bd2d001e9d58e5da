// JSON file round-trip for the task sequence

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Result, StoreError};
use crate::task::Task;

/// Read the full task sequence from `path`.
///
/// A missing file is not an error; it yields an empty sequence. A file that
/// does not parse as a JSON array of task records (including records missing
/// one of the four fields) is logged and also yields an empty sequence, so a
/// corrupt file never takes the process down. Other I/O failures, such as a
/// permission error, are surfaced to the caller.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        info!(path = ?path, "no task file found, starting empty");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match serde_json::from_str::<Vec<Task>>(&content) {
        Ok(tasks) => {
            info!(path = ?path, count = tasks.len(), "loaded tasks");
            Ok(tasks)
        }
        Err(e) => {
            warn!(path = ?path, error = ?e, "task file is not valid, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Write the full task sequence to `path`, replacing any previous contents.
///
/// The sequence is pretty-printed (2-space indentation) and written to a
/// temporary file in the same directory, synced, then renamed over the
/// target, so a crash mid-write leaves the previous file intact.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    if let Some(parent) = path.parent() {
        // a bare relative filename has an empty parent
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(tasks)?;

    let tmp_path = path.with_extension("tmp");
    let write = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(&tmp_path).map_err(write)?;
    file.write_all(json.as_bytes()).map_err(write)?;
    file.sync_all().map_err(write)?;
    fs::rename(&tmp_path, path).map_err(write)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("Pay bills", "electricity and rent", Priority::High, "2024-01-01"),
            Task::new("Walk dog", "", Priority::Low, "2024-01-02"),
            Task::new("Groceries", "weekly shop", Priority::Medium, "2024-01-03"),
        ]
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        let tasks = sample_tasks();
        save_tasks(&path, &tasks).unwrap();

        let loaded = load_tasks(&path).unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_load_missing_file_yields_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let loaded = load_tasks(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_yields_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "{not json at all").unwrap();

        let loaded = load_tasks(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_record_missing_field_yields_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, r#"[{"name": "Pay bills", "priority": "High"}]"#).unwrap();

        let loaded = load_tasks(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        save_tasks(&path, &sample_tasks()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("  {\n    \"name\": \"Pay bills\""));
    }

    #[test]
    fn test_save_empty_sequence_writes_empty_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        save_tasks(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[]");
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        save_tasks(&path, &sample_tasks()).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        save_tasks(&path, &sample_tasks()).unwrap();
        let shorter = vec![sample_tasks().remove(0)];
        save_tasks(&path, &shorter).unwrap();

        let loaded = load_tasks(&path).unwrap();
        assert_eq!(loaded, shorter);
    }
}
