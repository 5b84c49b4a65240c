//! Shared integration-test harness: a throwaway course project and a way to
//! run the `coursegen` binary against it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// A two-week plan used by most tests.
pub const TWO_WEEK_PLAN: &str = r#"{
  "metadata": {
    "title": "Física General",
    "code": "FI1101",
    "semester": "I Semestre 2025",
    "authors": ["Ada Lovelace"]
  },
  "weeks": [
    {
      "week": 1,
      "title": "Introducción",
      "content": ["Unidades", "Vectores"],
      "objectives": ["Repasar unidades"],
      "activities": ["Laboratorio de medición. Incertidumbre"]
    },
    {
      "week": 2,
      "title": "Cinemática",
      "objectives": "Describir el movimiento",
      "activities": ["Quiz"]
    }
  ]
}"#;

/// A course project in a temporary directory.
pub struct CourseProject {
    dir: TempDir,
}

impl CourseProject {
    /// Creates an empty project directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Creates a project whose `planeamiento.json` holds `plan`.
    pub fn with_plan(plan: &str) -> Self {
        let project = Self::new();
        project.write("planeamiento.json", plan);
        project
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a project file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Writes a project file, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(path, content).expect("failed to write project file");
    }

    /// Reads a project file.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    /// Runs `coursegen` with `--root` pointing at this project.
    pub fn run(&self, args: &[&str]) -> Output {
        run_command(args, Some(self.root()))
    }
}

/// Runs `coursegen` with closed stdin and a clean environment.
pub fn run_command(args: &[&str], root: Option<&Path>) -> Output {
    let bin = env!("CARGO_BIN_EXE_coursegen");
    let mut cmd = Command::new(bin);
    cmd.args(args)
        .env_remove("COURSEGEN_ROOT")
        .env_remove("COURSEGEN_CONFIG")
        .env_remove("COURSEGEN_LOG_LEVEL")
        .env("COURSEGEN_COLOR", "never")
        .stdin(Stdio::null());
    if let Some(root) = root {
        cmd.arg("--root").arg(root);
    }
    cmd.output().expect("failed to run coursegen")
}

/// Standard output as text.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Standard error as text.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
