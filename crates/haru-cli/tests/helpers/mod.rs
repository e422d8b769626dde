use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness running CLI commands from an isolated working directory,
/// so config.toml lookups never leak in from the developer's checkout.
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("haru").expect("Failed to find haru binary");
        cmd.current_dir(self.temp_dir.path());
        cmd
    }

    /// Write an event definition file into the harness directory
    pub fn write_event(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write event file");
        path
    }

    /// Write a config.toml into the harness directory
    pub fn write_config(&self, contents: &str) {
        fs::write(self.temp_dir.path().join("config.toml"), contents)
            .expect("Failed to write config file");
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Daily event covering 2025-10-01 through 2025-10-30
    pub fn daily_event_json() -> &'static str {
        r#"{
  "title": "Daily standup",
  "date": "2025-10-01",
  "startTime": "14:00",
  "endTime": "15:00",
  "description": "Morning sync",
  "location": "Room A",
  "category": "work",
  "repeat": { "type": "daily", "interval": 1, "endDate": "2025-10-30" },
  "notificationTime": 10
}"#
    }

    /// Monthly event anchored on the 31st; September has no matching day
    pub fn monthly_31st_event_json() -> &'static str {
        r#"{
  "title": "Month-end review",
  "date": "2025-08-31",
  "startTime": "09:00",
  "endTime": "10:00",
  "description": "",
  "location": "",
  "category": "work",
  "repeat": { "type": "monthly", "interval": 1, "endDate": "2025-10-30" },
  "notificationTime": 10
}"#
    }

    /// Daily event whose requested end lies past the default horizon
    pub fn long_daily_event_json() -> &'static str {
        r#"{
  "title": "Daily workout",
  "date": "2025-10-25",
  "startTime": "07:00",
  "endTime": "08:00",
  "description": "",
  "location": "",
  "category": "personal",
  "repeat": { "type": "daily", "interval": 1, "endDate": "2025-12-31" },
  "notificationTime": 10
}"#
    }

    /// Event with a repeat type outside the closed set
    pub fn invalid_repeat_event_json() -> &'static str {
        r#"{
  "title": "Broken",
  "date": "2025-10-01",
  "startTime": "14:00",
  "endTime": "15:00",
  "description": "",
  "location": "",
  "category": "work",
  "repeat": { "type": "biweekly", "interval": 1 },
  "notificationTime": 10
}"#
    }

    /// Event whose end time precedes its start time
    pub fn inverted_times_event_json() -> &'static str {
        r#"{
  "title": "Backwards",
  "date": "2025-10-01",
  "startTime": "15:00",
  "endTime": "14:00",
  "description": "",
  "location": "",
  "category": "work",
  "repeat": { "type": "daily", "interval": 1, "endDate": "2025-10-30" },
  "notificationTime": 10
}"#
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains the occurrence table headers
    pub fn has_occurrence_table_headers() -> impl Predicate<str> {
        predicate::str::contains("Date").and(predicate::str::contains("Day"))
    }

    /// Predicate to check if output indicates a successful expansion
    pub fn expansion_succeeded() -> impl Predicate<str> {
        predicate::str::contains("✓").and(predicate::str::contains("Expanded"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
