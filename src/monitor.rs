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
//! Polling loop for long-running Redfish tasks.
//!
//! A task is a remote, server-owned resource; the loop fetches it by URI and
//! classifies its `TaskState` until a terminal outcome is known. Pacing is
//! intentionally simple: a state transition is announced once and re-polled
//! immediately, an unchanged running state only advances a spinner glyph
//! (holding it for `PollConfig::spinner_delay`). There is no backoff and no
//! cancellation; callers that need an upper bound set `max_polls`.

use std::io::Write;
use std::time::Duration;

use crate::model::{Task, TaskStateClass};
use crate::network::Session;
use crate::RedfishError;

pub const SPINNER_GLYPHS: [char; 4] = ['|', '\\', '-', '/'];

#[derive(Debug, Clone)]
pub struct PollConfig {
    /// How long each spinner glyph is held while the task state is unchanged.
    pub spinner_delay: Duration,
    /// Abort after this many fetches of the task resource. `None` polls
    /// forever, which is what the CLI operations use.
    pub max_polls: Option<u64>,
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig {
            spinner_delay: Duration::from_millis(100),
            max_polls: None,
        }
    }
}

/// Where the loop reads task resources from. The live implementation is
/// [`Session`]; tests script a state sequence instead.
pub trait TaskSource {
    fn fetch_task(&self, uri: &str) -> Result<Task, RedfishError>;
}

impl TaskSource for Session {
    fn fetch_task(&self, uri: &str) -> Result<Task, RedfishError> {
        self.get(uri)
    }
}

/// Progress feedback emitted while the task runs.
pub trait ProgressSink {
    /// The task moved to a different running state.
    fn state_changed(&mut self, state: &str);
    /// The task is still in the same running state; show the next glyph.
    fn still_running(&mut self, glyph: char);
    /// A free-form "Downloading…"/"Update…" progress string.
    fn transient(&mut self, state: &str);
}

/// Console feedback in the style of the interactive updater: one line per
/// state transition, a carriage-return spinner otherwise.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn state_changed(&mut self, state: &str) {
        println!("Task state is {state}, wait a minute");
    }

    fn still_running(&mut self, glyph: char) {
        let mut out = std::io::stdout();
        // overwrite the previous glyph in place
        let _ = write!(out, "{:100}\r{glyph}\r", ' ');
        let _ = out.flush();
    }

    fn transient(&mut self, state: &str) {
        let mut out = std::io::stdout();
        let _ = write!(out, "{:100}\r{state}\r", ' ');
        let _ = out.flush();
    }
}

/// Poll `task_uri` until the task reaches an ended state.
///
/// Returns the exact ended-state string; mapping "Completed" versus the other
/// ended states to an overall outcome is the caller's business, as is
/// deleting the remote task afterwards. Transport failures, unrecognized
/// states and an exceeded poll budget surface as errors.
pub fn monitor_task(
    source: &dyn TaskSource,
    task_uri: &str,
    config: &PollConfig,
    progress: &mut dyn ProgressSink,
) -> Result<String, RedfishError> {
    let mut current_state = String::new();
    let mut glyphs = SPINNER_GLYPHS.iter().cycle();
    let mut polls: u64 = 0;
    loop {
        if let Some(max) = config.max_polls {
            if polls >= max {
                return Err(RedfishError::PollLimitExceeded {
                    url: task_uri.to_string(),
                    polls,
                });
            }
        }
        polls += 1;
        let task = source.fetch_task(task_uri)?;
        match task.state_class() {
            TaskStateClass::Running => {
                if task.task_state != current_state {
                    current_state = task.task_state;
                    progress.state_changed(&current_state);
                } else {
                    // unchanged: throttle visual feedback instead of announcing again
                    let glyph = *glyphs.next().unwrap_or(&SPINNER_GLYPHS[0]);
                    progress.still_running(glyph);
                    std::thread::sleep(config.spinner_delay);
                }
            }
            TaskStateClass::Transient => progress.transient(&task.task_state),
            TaskStateClass::Ended => return Ok(task.task_state),
            TaskStateClass::Unrecognized => {
                return Err(RedfishError::TaskSchemaViolation {
                    state: task.task_state,
                })
            }
        }
    }
}
