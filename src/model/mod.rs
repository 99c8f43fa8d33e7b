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

pub mod log_service;
pub mod manager;
pub mod service_root;
pub mod task;
pub mod update_service;

pub use log_service::{LogService, LogServices};
pub use manager::{Manager, Managers};
pub use service_root::ServiceRoot;
pub use task::{Task, TaskStateClass};
pub use update_service::{SimpleUpdateRequest, TransferProtocolType, UpdateService};

/// The `@odata.*` annotations every Redfish resource carries.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct OData {
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.etag")]
    pub odata_etag: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct ODataId {
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
}

impl From<String> for ODataId {
    fn from(item: String) -> Self {
        ODataId { odata_id: item }
    }
}

impl From<&str> for ODataId {
    fn from(item: &str) -> Self {
        ODataId {
            odata_id: item.to_string(),
        }
    }
}

/// A named action advertised in a resource's `Actions` object.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct ActionTarget {
    pub target: String,
    #[serde(rename = "title")]
    pub title: Option<String>,
}

/// Pull the human readable text out of a Redfish error payload.
///
/// BMCs return useful messages in `error.@Message.ExtendedInfo[].Message`
/// even on non-2XX responses. Falls back to the raw body when the payload
/// doesn't follow that shape, and to the bare status line when there is no
/// body at all.
pub fn extended_error(body: Option<&serde_json::Value>) -> String {
    let Some(body) = body else {
        return "None".to_string();
    };
    let messages: Vec<&str> = body
        .get("error")
        .and_then(|e| e.get("@Message.ExtendedInfo"))
        .and_then(|info| info.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e.get("Message").and_then(|m| m.as_str()))
                .collect()
        })
        .unwrap_or_default();
    if messages.is_empty() {
        body.to_string()
    } else {
        messages.join("; ")
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    #[test]
    fn extended_error_prefers_message_entries() {
        let body = json!({
            "error": {
                "code": "Base.1.8.GeneralError",
                "@Message.ExtendedInfo": [
                    {"Message": "The request failed", "Severity": "Critical"},
                    {"Message": "Insufficient privilege"},
                ]
            }
        });
        assert_eq!(
            super::extended_error(Some(&body)),
            "The request failed; Insufficient privilege"
        );
    }

    #[test]
    fn extended_error_falls_back_to_raw_body() {
        let body = json!({"Oem": {"Vendor": "something nonstandard"}});
        assert_eq!(super::extended_error(Some(&body)), body.to_string());
        assert_eq!(super::extended_error(None), "None");
    }
}
