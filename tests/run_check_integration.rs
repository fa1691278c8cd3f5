//! Integration tests for `run_check`: config in, outcome and response file out.

use clap::Parser;
use serde_json::json;
use tempfile::TempDir;

use course_link_check::{run_check, Config};

fn write_fixtures(dir: &TempDir) -> (String, String) {
    let task_dir = dir.path().join("task");
    std::fs::create_dir(&task_dir).unwrap();
    std::fs::write(
        task_dir.join("status.json"),
        r#"{"state": "succeeded", "completed_steps": 2,
            "created": "2026-08-23T12:00:00Z"}"#,
    )
    .unwrap();
    std::fs::write(
        task_dir.join("BrokenLinks.json"),
        r#"[["page", "http://dead.example"]]"#,
    )
    .unwrap();

    let tree_path = dir.path().join("tree.json");
    std::fs::write(
        &tree_path,
        r#"[
            {"location": "unit", "display_name": "Unit", "category": "vertical",
             "course_id": "course-v1:X+Y+Z"},
            {"location": "page", "display_name": "Page", "category": "html",
             "course_id": "course-v1:X+Y+Z", "parent": "unit"}
        ]"#,
    )
    .unwrap();

    (
        task_dir.to_string_lossy().into_owned(),
        tree_path.to_string_lossy().into_owned(),
    )
}

#[tokio::test]
async fn test_run_check_writes_response_file() {
    let dir = TempDir::new().unwrap();
    let (task_dir, tree_path) = write_fixtures(&dir);
    let output_path = dir.path().join("response.json");

    let config = Config::parse_from([
        "course_link_check",
        task_dir.as_str(),
        "--tree",
        tree_path.as_str(),
        "--output",
        output_path.to_string_lossy().as_ref(),
    ]);

    let outcome = run_check(config).await.unwrap();
    assert_eq!(outcome.status, 3);
    assert_eq!(outcome.broken_links, 1);
    assert_eq!(outcome.skipped_entries, 0);

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({
            "LinkCheckStatus": 3,
            "LinkCheckOutput": {
                "unit": {
                    "display_name": "Unit",
                    "page": {
                        "display_name": "Page",
                        "url": "/course/course-v1:X+Y+Z/editor/html/page",
                        "broken_links": ["http://dead.example"],
                    }
                }
            }
        })
    );
}

#[tokio::test]
async fn test_run_check_before_task_exists() {
    let dir = TempDir::new().unwrap();
    let (_, tree_path) = write_fixtures(&dir);
    let empty_task_dir = dir.path().join("empty");
    std::fs::create_dir(&empty_task_dir).unwrap();
    let output_path = dir.path().join("response.json");

    let config = Config::parse_from([
        "course_link_check",
        empty_task_dir.to_string_lossy().as_ref(),
        "--tree",
        tree_path.as_str(),
        "--output",
        output_path.to_string_lossy().as_ref(),
    ]);

    let outcome = run_check(config).await.unwrap();
    assert_eq!(outcome.status, 0);
    assert_eq!(outcome.broken_links, 0);

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(written, json!({"LinkCheckStatus": 0}));
}

#[tokio::test]
async fn test_run_check_fails_on_missing_tree() {
    let dir = TempDir::new().unwrap();
    let (task_dir, _) = write_fixtures(&dir);

    let config = Config::parse_from([
        "course_link_check",
        task_dir.as_str(),
        "--tree",
        "nonexistent_tree.json",
    ]);

    let result = run_check(config).await;
    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(
        message.contains("Failed to read course tree"),
        "Expected tree-loading context, got: {}",
        message
    );
}

#[tokio::test]
async fn test_run_check_skip_policy_counts_skips() {
    let dir = TempDir::new().unwrap();
    let (task_dir, tree_path) = write_fixtures(&dir);
    std::fs::write(
        dir.path().join("task").join("BrokenLinks.json"),
        r#"[["page", "http://dead.example"], ["ghost", "http://dead2.example"]]"#,
    )
    .unwrap();
    let output_path = dir.path().join("response.json");

    let config = Config::parse_from([
        "course_link_check",
        task_dir.as_str(),
        "--tree",
        tree_path.as_str(),
        "--skip-unresolved",
        "--output",
        output_path.to_string_lossy().as_ref(),
    ]);

    let outcome = run_check(config).await.unwrap();
    assert_eq!(outcome.status, 3);
    assert_eq!(outcome.broken_links, 1);
    assert_eq!(outcome.skipped_entries, 1);
}
