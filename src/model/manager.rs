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

use crate::model::{OData, ODataId};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Managers {
    #[serde(flatten)]
    pub odata: OData,
    pub name: Option<String>,
    #[serde(rename = "Members@odata.count")]
    pub members_count: u64,
    #[serde(default)]
    pub members: Vec<ODataId>,
}

/// https://redfish.dmtf.org/schemas/v1/Manager.v1_13_0.json
/// A BMC. The log-clear walk only needs the link to its log services.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Manager {
    #[serde(flatten)]
    pub odata: OData,
    pub id: Option<String>,
    pub name: Option<String>,
    pub manager_type: Option<String>,
    pub log_services: Option<ODataId>,
}

#[cfg(test)]
mod test {
    #[test]
    fn parse_managers_collection() {
        let data = include_str!("testdata/managers.json");
        let managers: super::Managers = serde_json::from_str(data).unwrap();
        assert_eq!(managers.members_count, 1);
        assert_eq!(managers.members.len(), 1);
        assert_eq!(managers.members[0].odata_id, "/redfish/v1/Managers/1");
    }

    #[test]
    fn parse_manager() {
        let data = include_str!("testdata/manager.json");
        let manager: super::Manager = serde_json::from_str(data).unwrap();
        assert_eq!(
            manager.log_services.unwrap().odata_id,
            "/redfish/v1/Managers/1/LogServices"
        );
    }
}
