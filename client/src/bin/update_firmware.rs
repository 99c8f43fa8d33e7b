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

/* Push a firmware image staged on a file server to the BMC and wait for the
 * resulting task to finish.
 *
 * USAGE: ./update-firmware -H 10.240.10.25 -U USERID -P PASSW0RD \
 *            --image lnvgy_fw_uefi_ive160g.uxz \
 *            --targets /redfish/v1/UpdateService/FirmwareInventory/UEFI \
 *            --fsprotocol sftp --fsip 10.0.0.5 --fsusername fwadmin \
 *            --fspassword secret --fsdir firmware
 * Unspecified flags fall back to [connect] / [file_server] in config.toml.
 * Run with `-v` for request/response logging.
 */

use clap::Parser;
use redfish_ops::{
    ops, ConnectArgs, ConsoleProgress, FileConfig, FileServerArgs, OperationResult, PollConfig,
    RedfishClient,
};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "update-firmware")]
struct Cli {
    #[command(flatten)]
    connect: ConnectArgs,

    #[command(flatten)]
    file_server: FileServerArgs,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.connect.verbose);

    let result = run(&cli);
    if result.success {
        println!("{}", serde_json::Value::String(result.message));
    } else {
        eprintln!("{}", result.message);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> OperationResult {
    let config = match FileConfig::load(&cli.connect.config) {
        Ok(c) => c,
        Err(e) => return OperationResult::fail(e.to_string()),
    };
    let endpoint = match cli.connect.endpoint(&config) {
        Ok(e) => e,
        Err(e) => return OperationResult::fail(e.to_string()),
    };
    let request = match cli.file_server.update_request(&config) {
        Ok(r) => r,
        Err(e) => return OperationResult::fail(e.to_string()),
    };
    let client = match RedfishClient::builder().build() {
        Ok(c) => c,
        Err(e) => return e.into(),
    };
    let session = match client.login(&endpoint) {
        Ok(s) => s,
        Err(e) => return e.into(),
    };
    // session logs out when dropped, on every path out of here
    ops::update_firmware::run(
        &session,
        &request,
        &PollConfig::default(),
        &mut ConsoleProgress,
    )
}

fn init_logging(verbose: bool) {
    let log_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::from_default_env()
        .add_directive(log_level.into())
        .add_directive("hyper=warn".parse().unwrap());
    tracing_subscriber::registry()
        .with(Layer::default().compact())
        .with(env_filter)
        .init();
}
