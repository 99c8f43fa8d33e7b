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
//! CLI flags plus their `config.toml` fallbacks.
//!
//! Every connection and file-server value can come from a flag or from the
//! config file; flags win. Only values missing from both are an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::TransferProtocolType;
use crate::network::Endpoint;
use crate::ops::update_firmware::UpdateRequest;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}. {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse config file {path}. {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Missing required parameter: pass {flag} or set {key} in the config file")]
    Missing {
        flag: &'static str,
        key: &'static str,
    },
}

/// Contents of `config.toml`. All keys optional; a missing file is an empty
/// config.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub connect: ConnectSection,
    #[serde(default)]
    pub file_server: FileServerSection,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ConnectSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileServerSection {
    pub protocol: Option<String>,
    pub port: Option<u16>,
    pub ip: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub dir: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<FileConfig, ConfigError> {
        if !path.exists() {
            return Ok(FileConfig::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Connection flags shared by every operation.
#[derive(Debug, Clone, clap::Args)]
pub struct ConnectArgs {
    /// Hostname or IP address of the BMC Redfish API
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// BMC HTTPS port, default 443
    #[arg(long)]
    pub port: Option<u16>,

    /// BMC username
    #[arg(short = 'U', long)]
    pub user: Option<String>,

    /// BMC password
    #[arg(short = 'P', long)]
    pub password: Option<String>,

    /// Configuration file supplying values for unspecified flags
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Log at DEBUG level. Default is INFO
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConnectArgs {
    pub fn endpoint(&self, config: &FileConfig) -> Result<Endpoint, ConfigError> {
        let host = self
            .host
            .clone()
            .or_else(|| config.connect.host.clone())
            .ok_or(ConfigError::Missing {
                flag: "--host",
                key: "[connect].host",
            })?;
        Ok(Endpoint {
            host,
            port: self.port.or(config.connect.port),
            user: self
                .user
                .clone()
                .or_else(|| config.connect.user.clone())
                .unwrap_or_default(),
            password: self
                .password
                .clone()
                .or_else(|| config.connect.password.clone())
                .unwrap_or_default(),
        })
    }
}

/// Flags describing the staged firmware image and the file server holding it.
#[derive(Debug, Clone, clap::Args)]
pub struct FileServerArgs {
    /// File name of the firmware image to apply
    #[arg(long)]
    pub image: String,

    /// Firmware inventory URIs the image applies to
    #[arg(long, required = true, num_args = 1..)]
    pub targets: Vec<String>,

    /// File server transfer protocol
    #[arg(long, value_enum)]
    pub fsprotocol: Option<TransferProtocolType>,

    /// File server port. Accepted for config parity; the image URI does not
    /// carry it
    #[arg(long)]
    pub fsport: Option<u16>,

    /// File server hostname or IP address
    #[arg(long)]
    pub fsip: Option<String>,

    /// File server username
    #[arg(long)]
    pub fsusername: Option<String>,

    /// File server password
    #[arg(long)]
    pub fspassword: Option<String>,

    /// Directory on the file server holding the image
    #[arg(long)]
    pub fsdir: Option<String>,
}

impl FileServerArgs {
    pub fn update_request(&self, config: &FileConfig) -> Result<UpdateRequest, ConfigError> {
        let fs = &config.file_server;
        let protocol = match self.fsprotocol {
            Some(p) => p,
            None => fs
                .protocol
                .as_deref()
                .and_then(|s| s.parse().ok())
                .ok_or(ConfigError::Missing {
                    flag: "--fsprotocol",
                    key: "[file_server].protocol",
                })?,
        };
        Ok(UpdateRequest {
            image: self.image.clone(),
            targets: self.targets.clone(),
            protocol,
            fsip: self
                .fsip
                .clone()
                .or_else(|| fs.ip.clone())
                .ok_or(ConfigError::Missing {
                    flag: "--fsip",
                    key: "[file_server].ip",
                })?,
            fsusername: self
                .fsusername
                .clone()
                .or_else(|| fs.username.clone())
                .ok_or(ConfigError::Missing {
                    flag: "--fsusername",
                    key: "[file_server].username",
                })?,
            fspassword: self
                .fspassword
                .clone()
                .or_else(|| fs.password.clone())
                .ok_or(ConfigError::Missing {
                    flag: "--fspassword",
                    key: "[file_server].password",
                })?,
            fsdir: self
                .fsdir
                .clone()
                .or_else(|| fs.dir.clone())
                .ok_or(ConfigError::Missing {
                    flag: "--fsdir",
                    key: "[file_server].dir",
                })?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &str = r#"
[connect]
host = "10.240.10.25"
user = "USERID"
password = "PASSW0RD"

[file_server]
protocol = "SFTP"
port = 22
ip = "10.0.0.5"
username = "fwadmin"
password = "secret"
dir = "firmware"
"#;

    fn args() -> ConnectArgs {
        ConnectArgs {
            host: None,
            port: None,
            user: None,
            password: None,
            config: PathBuf::from("config.toml"),
            verbose: false,
        }
    }

    fn fs_args() -> FileServerArgs {
        FileServerArgs {
            image: "fw.uxz".to_string(),
            targets: vec!["/redfish/v1/UpdateService/FirmwareInventory/BMC".to_string()],
            fsprotocol: None,
            fsport: None,
            fsip: None,
            fsusername: None,
            fspassword: None,
            fsdir: None,
        }
    }

    #[test]
    fn file_values_fill_unspecified_flags() {
        let config: FileConfig = toml::from_str(SAMPLE).unwrap();
        let endpoint = args().endpoint(&config).unwrap();
        assert_eq!(endpoint.host, "10.240.10.25");
        assert_eq!(endpoint.user, "USERID");

        let req = fs_args().update_request(&config).unwrap();
        assert_eq!(req.fsip, "10.0.0.5");
        assert_eq!(req.protocol, TransferProtocolType::SFTP);
    }

    #[test]
    fn flags_win_over_file_values() {
        let config: FileConfig = toml::from_str(SAMPLE).unwrap();
        let mut a = args();
        a.host = Some("192.168.1.9".to_string());
        a.user = Some("operator".to_string());
        let endpoint = a.endpoint(&config).unwrap();
        assert_eq!(endpoint.host, "192.168.1.9");
        assert_eq!(endpoint.user, "operator");
        assert_eq!(endpoint.password, "PASSW0RD");
    }

    #[test]
    fn missing_host_everywhere_is_an_error() {
        let err = args().endpoint(&FileConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--host"));
    }

    #[test]
    fn missing_file_server_values_name_the_flag() {
        let err = fs_args()
            .update_request(&FileConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("--fsprotocol"));
    }

    #[test]
    fn empty_config_parses() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.connect.host.is_none());
        assert!(config.file_server.ip.is_none());
    }
}
