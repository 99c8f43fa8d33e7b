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
//! Clear every system event log the BMC exposes.
//!
//! Walks ServiceRoot → Managers → each manager's LogServices → each log
//! service, and invokes the `#LogService.ClearLog` action wherever one is
//! advertised. Outcomes are aggregated per log service; the operation only
//! succeeds when at least one ClearLog action was found and all of them
//! returned 2XX.

use tracing::debug;

use crate::model::log_service::ClearLogRequest;
use crate::model::{LogService, LogServices, Manager, Managers, ServiceRoot};
use crate::network::{Session, REDFISH_SERVICE_ROOT};
use crate::ops::OperationResult;
use crate::RedfishError;

pub fn run(session: &Session) -> OperationResult {
    match clear_logs(session) {
        Ok(outcomes) => summarize(outcomes),
        Err(e) => e.into(),
    }
}

#[derive(Debug)]
struct ClearOutcome {
    log_service: String,
    result: Result<(), RedfishError>,
}

fn clear_logs(session: &Session) -> Result<Vec<ClearOutcome>, RedfishError> {
    let root: ServiceRoot = session.get(REDFISH_SERVICE_ROOT)?;
    let managers_url = root.managers.ok_or_else(|| RedfishError::MissingKey {
        key: "Managers".to_string(),
        url: REDFISH_SERVICE_ROOT.to_string(),
    })?;

    let managers: Managers = session.get(&managers_url.odata_id)?;
    debug!(
        "Found {} manager(s) under {}",
        managers.members_count, managers_url.odata_id
    );

    let mut outcomes = Vec::new();
    for member in &managers.members {
        let manager: Manager = session.get(&member.odata_id)?;
        let Some(log_services_url) = manager.log_services else {
            debug!("Manager {} has no log services", member.odata_id);
            continue;
        };

        let log_services: LogServices = session.get(&log_services_url.odata_id)?;
        for ls_member in &log_services.members {
            let log_service: LogService = session.get(&ls_member.odata_id)?;
            let Some(target) = log_service.clear_log_target() else {
                debug!("Log service {} has no ClearLog action", ls_member.odata_id);
                continue;
            };
            let result = session
                .post(target, &ClearLogRequest::default())
                .map(|_status| ());
            outcomes.push(ClearOutcome {
                log_service: ls_member.odata_id.clone(),
                result,
            });
        }
    }
    Ok(outcomes)
}

fn summarize(outcomes: Vec<ClearOutcome>) -> OperationResult {
    if outcomes.is_empty() {
        return OperationResult::fail("No log service advertises a ClearLog action");
    }
    let success = outcomes.iter().all(|o| o.result.is_ok());
    if success && outcomes.len() == 1 {
        return OperationResult::ok("Clear log successfully");
    }
    let lines: Vec<String> = outcomes
        .iter()
        .map(|o| match &o.result {
            Ok(()) => format!("Cleared {}", o.log_service),
            Err(e) => format!("Failed clearing {}: {}", o.log_service, e),
        })
        .collect();
    OperationResult {
        success,
        message: lines.join("\n"),
    }
}
