/*
 * SPDX-License-Identifier: MIT
 *
 * Permission is hereby granted, free of charge, to any person obtaining a
 * copy of this software and associated documentation files (the "Software"),
 * to deal in the Software without restriction, including without limitation
 * the rights to use, copy, modify, merge, publish, distribute, sublicense,
 * and/or sell copies of the Software, and to permit persons to whom the
 * Software is furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in
 * all copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL
 * THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
 * FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
 * DEALINGS IN THE SOFTWARE.
 */
//! Task-poll loop behavior against scripted state sequences, with
//! `spinner_delay` zeroed so nothing sleeps.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use redfish_ops::model::Task;
use redfish_ops::{monitor_task, PollConfig, ProgressSink, RedfishError, TaskSource};
use reqwest::StatusCode;

const TASK_URI: &str = "/redfish/v1/TaskService/Tasks/7";

/// Feeds a prepared sequence of fetch results to the loop.
struct ScriptedSource {
    responses: RefCell<VecDeque<Result<Task, RedfishError>>>,
}

impl ScriptedSource {
    fn new(states: &[&str]) -> ScriptedSource {
        ScriptedSource {
            responses: RefCell::new(states.iter().map(|s| Ok(task(s))).collect()),
        }
    }

    fn push_err(self, err: RedfishError) -> ScriptedSource {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }
}

impl TaskSource for ScriptedSource {
    fn fetch_task(&self, uri: &str) -> Result<Task, RedfishError> {
        assert_eq!(uri, TASK_URI);
        self.responses
            .borrow_mut()
            .pop_front()
            .expect("loop fetched more often than scripted")
    }
}

fn task(state: &str) -> Task {
    Task {
        task_state: state.to_string(),
        ..Default::default()
    }
}

#[derive(Debug, Default)]
struct RecordingSink {
    announcements: Vec<String>,
    glyphs: Vec<char>,
    transients: Vec<String>,
}

impl ProgressSink for RecordingSink {
    fn state_changed(&mut self, state: &str) {
        self.announcements.push(state.to_string());
    }

    fn still_running(&mut self, glyph: char) {
        self.glyphs.push(glyph);
    }

    fn transient(&mut self, state: &str) {
        self.transients.push(state.to_string());
    }
}

fn fast() -> PollConfig {
    PollConfig {
        spinner_delay: Duration::ZERO,
        max_polls: Some(100),
    }
}

#[test]
fn announces_each_distinct_running_state_exactly_once() {
    let source = ScriptedSource::new(&["Pending", "Pending", "Running", "Completed"]);
    let mut sink = RecordingSink::default();

    let state = monitor_task(&source, TASK_URI, &fast(), &mut sink).unwrap();

    assert_eq!(state, "Completed");
    assert_eq!(sink.announcements, vec!["Pending", "Running"]);
    // the repeated Pending produced a spinner tick, not a second announcement
    assert_eq!(sink.glyphs, vec!['|']);
}

#[test]
fn every_ended_state_terminates_with_its_exact_string() {
    for ended in ["Cancelled", "Completed", "Exception", "Interrupted", "Suspended"] {
        let source = ScriptedSource::new(&[ended]);
        let mut sink = RecordingSink::default();
        let state = monitor_task(&source, TASK_URI, &fast(), &mut sink).unwrap();
        assert_eq!(state, ended);
        assert!(sink.announcements.is_empty());
    }
}

#[test]
fn cancelled_after_running_still_ends_the_loop() {
    let source = ScriptedSource::new(&["Running", "Cancelled"]);
    let mut sink = RecordingSink::default();

    let state = monitor_task(&source, TASK_URI, &fast(), &mut sink).unwrap();

    // "Cancelled" is a clean loop exit; mapping it to overall update failure
    // is the submitter's job
    assert_eq!(state, "Cancelled");
    assert_eq!(sink.announcements, vec!["Running"]);
}

#[test]
fn unrecognized_state_is_a_schema_violation() {
    let source = ScriptedSource::new(&["Rebooting"]);
    let mut sink = RecordingSink::default();

    let err = monitor_task(&source, TASK_URI, &fast(), &mut sink).unwrap_err();

    assert!(matches!(
        err,
        RedfishError::TaskSchemaViolation { ref state } if state == "Rebooting"
    ));
}

#[test]
fn transitional_states_are_progress_not_terminal() {
    let source = ScriptedSource::new(&[
        "Downloading 10%",
        "Downloading 90%",
        "Update applying bundle",
        "Completed",
    ]);
    let mut sink = RecordingSink::default();

    let state = monitor_task(&source, TASK_URI, &fast(), &mut sink).unwrap();

    assert_eq!(state, "Completed");
    assert_eq!(
        sink.transients,
        vec!["Downloading 10%", "Downloading 90%", "Update applying bundle"]
    );
    assert!(sink.announcements.is_empty());
}

#[test]
fn fetch_failure_stops_the_loop_and_carries_the_status() {
    let source = ScriptedSource::new(&["Pending"]).push_err(RedfishError::HttpErrorCode {
        url: TASK_URI.to_string(),
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        detail: "task service restarting".to_string(),
    });
    let mut sink = RecordingSink::default();

    let err = monitor_task(&source, TASK_URI, &fast(), &mut sink).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("500"), "{message}");
    assert!(message.contains(TASK_URI), "{message}");
}

#[test]
fn spinner_cycles_through_all_four_glyphs() {
    let source = ScriptedSource::new(&[
        "Running", "Running", "Running", "Running", "Running", "Running", "Completed",
    ]);
    let mut sink = RecordingSink::default();

    monitor_task(&source, TASK_URI, &fast(), &mut sink).unwrap();

    assert_eq!(sink.glyphs, vec!['|', '\\', '-', '/', '|']);
}

#[test]
fn poll_limit_guards_against_a_stuck_task() {
    let source = ScriptedSource::new(&["Running", "Running", "Running", "Running"]);
    let mut sink = RecordingSink::default();
    let config = PollConfig {
        spinner_delay: Duration::ZERO,
        max_polls: Some(3),
    };

    let err = monitor_task(&source, TASK_URI, &config, &mut sink).unwrap_err();

    assert!(matches!(err, RedfishError::PollLimitExceeded { polls: 3, .. }));
}
