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

use crate::model::{ActionTarget, OData, ODataId};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct LogServices {
    #[serde(flatten)]
    pub odata: OData,
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<ODataId>,
}

/// https://redfish.dmtf.org/schemas/v1/LogService.v1_3_0.json
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct LogService {
    #[serde(flatten)]
    pub odata: OData,
    pub id: Option<String>,
    pub name: Option<String>,
    pub actions: Option<LogServiceActions>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct LogServiceActions {
    #[serde(rename = "#LogService.ClearLog")]
    pub clear_log: Option<ActionTarget>,
}

impl LogService {
    /// Target URI of the ClearLog action, if this log service advertises one.
    pub fn clear_log_target(&self) -> Option<&str> {
        self.actions
            .as_ref()
            .and_then(|a| a.clear_log.as_ref())
            .map(|a| a.target.as_str())
    }
}

/// Body POSTed to the ClearLog target.
#[derive(Debug, Serialize, Clone)]
pub struct ClearLogRequest {
    #[serde(rename = "Action")]
    pub action: &'static str,
}

impl Default for ClearLogRequest {
    fn default() -> Self {
        ClearLogRequest {
            action: "LogService.ClearLog",
        }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn parse_log_service_with_clear_action() {
        let data = include_str!("testdata/log_service.json");
        let svc: super::LogService = serde_json::from_str(data).unwrap();
        assert_eq!(
            svc.clear_log_target(),
            Some("/redfish/v1/Managers/1/LogServices/StandardLog/Actions/LogService.ClearLog")
        );
    }

    #[test]
    fn log_service_without_actions_has_no_target() {
        let svc: super::LogService = serde_json::from_str(
            r#"{"@odata.id": "/redfish/v1/Managers/1/LogServices/Audit", "Name": "Audit Log"}"#,
        )
        .unwrap();
        assert_eq!(svc.clear_log_target(), None);
    }

    #[test]
    fn clear_log_request_body() {
        let body = serde_json::to_value(super::ClearLogRequest::default()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"Action": "LogService.ClearLog"})
        );
    }
}
