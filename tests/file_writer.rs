// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::path::PathBuf;

use logroll::Level;
use logroll::RotatingFileWriter;
use logroll::RotationPolicy;
use logroll::policy::DailyPolicy;
use logroll::trap::Testing;
use tempfile::TempDir;

fn logfile(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("app.log")
}

#[test]
fn test_writes_exact_lines_and_refuses_after_close() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = logfile(&temp_dir);
    let trap = Testing::default();
    let probe = trap.clone();

    let mut writer = RotatingFileWriter::builder()
        .policy(DailyPolicy::new())
        .trap(trap)
        .build(&path)
        .unwrap();
    writer.write(Level::Info, "Hello\n");
    writer.write(Level::Info, "World\n");
    writer.close();
    assert!(probe.messages().is_empty());

    writer.write(Level::Info, "Won't be written\n");
    assert_eq!(probe.messages().len(), 1);

    assert_eq!(fs::read_to_string(&path).unwrap(), "Hello\nWorld\n");
}

#[test]
fn test_continues_previous_file_within_same_period() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = logfile(&temp_dir);

    let mut writer = RotatingFileWriter::builder()
        .policy(DailyPolicy::new())
        .build(&path)
        .unwrap();
    writer.write(Level::Info, "one\n");
    writer.close();

    // a fresh writer instance in the same period picks the file up again
    let mut writer = RotatingFileWriter::builder()
        .policy(DailyPolicy::new())
        .build(&path)
        .unwrap();
    writer.write(Level::Info, "two\n");
    writer.close();

    assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}

#[test]
fn test_startup_policy_discards_previous_file() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = logfile(&temp_dir);

    let mut writer = RotatingFileWriter::builder().build(&path).unwrap();
    writer.write(Level::Info, "old\n");
    writer.close();

    let mut writer = RotatingFileWriter::builder()
        .policy(RotationPolicy::Startup)
        .build(&path)
        .unwrap();
    writer.write(Level::Info, "new\n");
    writer.close();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
}

#[test]
fn test_creates_missing_directories_and_file() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("nested").join("dir").join("app.log");

    let mut writer = RotatingFileWriter::builder()
        .policy(DailyPolicy::new())
        .build(&path)
        .unwrap();
    writer.write(Level::Info, "created\n");
    writer.close();

    assert_eq!(fs::read_to_string(&path).unwrap(), "created\n");
}
