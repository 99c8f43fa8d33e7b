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
//! Administrative operations against a BMC's Redfish API: clearing system
//! event logs and pushing firmware updates. Each operation opens one
//! authenticated session, walks the resource graph from the service root,
//! and reports a single `{success, message}` outcome.

pub mod config;
mod error;
pub mod model;
pub mod monitor;
pub mod network;
pub mod ops;

pub use config::{ConfigError, ConnectArgs, FileConfig, FileServerArgs};
pub use error::RedfishError;
pub use model::{Task, TaskStateClass, TransferProtocolType};
pub use monitor::{monitor_task, ConsoleProgress, PollConfig, ProgressSink, TaskSource};
pub use network::{Endpoint, RedfishClient, RedfishClientBuilder, Session, REDFISH_SERVICE_ROOT};
pub use ops::update_firmware::UpdateRequest;
pub use ops::OperationResult;
