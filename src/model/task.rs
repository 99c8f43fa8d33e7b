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
use serde::{Deserialize, Serialize};

use crate::model::OData;

/// https://redfish.dmtf.org/schemas/v1/Task.v1_4_3.json
/// Server-side handle for an asynchronous operation, polled until terminal.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    #[serde(flatten)]
    pub odata: OData,
    pub id: Option<String>,
    pub name: Option<String>,
    pub task_state: String,
    pub task_status: Option<String>,
    pub percent_complete: Option<u8>,
}

/// States the server may report while the task is still making progress.
const RUNNING_TASK_STATES: [&str; 8] = [
    "New",
    "Pending",
    "Service",
    "Starting",
    "Stopping",
    "Running",
    "Cancelling",
    "Verifying",
];

/// Terminal states. "Completed" is the only one the caller treats as an
/// overall success.
const ENDED_TASK_STATES: [&str; 5] = [
    "Cancelled",
    "Completed",
    "Exception",
    "Interrupted",
    "Suspended",
];

/// Classification of a `TaskState` string. Some firmware reports free-form
/// progress strings ("Downloading 40%", "Update bundle staged") outside the
/// schema vocabulary; those are informational, not terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStateClass {
    Running,
    Ended,
    Transient,
    Unrecognized,
}

impl TaskStateClass {
    pub fn of(state: &str) -> TaskStateClass {
        if RUNNING_TASK_STATES.contains(&state) {
            TaskStateClass::Running
        } else if ENDED_TASK_STATES.contains(&state) {
            TaskStateClass::Ended
        } else if state.starts_with("Downloading") || state.starts_with("Update") {
            TaskStateClass::Transient
        } else {
            TaskStateClass::Unrecognized
        }
    }
}

impl Task {
    pub fn state_class(&self) -> TaskStateClass {
        TaskStateClass::of(&self.task_state)
    }
}

#[cfg(test)]
mod test {
    use super::TaskStateClass;

    #[test]
    fn parse_task() {
        let data = include_str!("testdata/task.json");
        let task: super::Task = serde_json::from_str(data).unwrap();
        assert_eq!(task.task_state, "Running");
        assert_eq!(task.state_class(), TaskStateClass::Running);
        assert_eq!(task.odata.odata_id, "/redfish/v1/TaskService/Tasks/0");
    }

    #[test]
    fn state_classes_are_disjoint() {
        for s in super::RUNNING_TASK_STATES {
            assert_eq!(TaskStateClass::of(s), TaskStateClass::Running, "{s}");
        }
        for s in super::ENDED_TASK_STATES {
            assert_eq!(TaskStateClass::of(s), TaskStateClass::Ended, "{s}");
        }
    }

    #[test]
    fn transitional_prefixes_are_progress() {
        assert_eq!(
            TaskStateClass::of("Downloading 42%"),
            TaskStateClass::Transient
        );
        assert_eq!(
            TaskStateClass::of("Update bundle staged"),
            TaskStateClass::Transient
        );
    }

    #[test]
    fn anything_else_is_unrecognized() {
        assert_eq!(TaskStateClass::of("Rebooting"), TaskStateClass::Unrecognized);
        assert_eq!(TaskStateClass::of(""), TaskStateClass::Unrecognized);
        // Vocabulary matching is exact, not prefix or case folded
        assert_eq!(TaskStateClass::of("running"), TaskStateClass::Unrecognized);
        assert_eq!(TaskStateClass::of("Completed "), TaskStateClass::Unrecognized);
    }
}
