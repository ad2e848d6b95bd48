// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! modeltap binary entry point.

use std::sync::Arc;

use clap::Parser;

use modeltap::cli::Cli;
use modeltap::config::RunConfig;
use modeltap::http::HttpConnector;
use modeltap::output::{exit_codes, print_artifacts, print_error, print_warning};
use modeltap::runner::Runner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match RunConfig::resolve(&cli) {
        Ok(config) => config,
        Err(err) => {
            print_error(err);
            std::process::exit(exit_codes::ERROR);
        }
    };

    if let Err(err) = modeltap_capture::set_transport(Arc::new(HttpConnector::new())) {
        print_error(err);
        std::process::exit(exit_codes::ERROR);
    }

    let runner = Runner::new(config);
    match runner.execute().await {
        Ok(summary) => {
            if let Some(error) = &summary.error {
                print_warning(format_args!("session failed: {}", error));
            }
            print_artifacts(&summary, &runner.config().paths.summary);
        }
        Err(err) => {
            print_error(err);
            std::process::exit(exit_codes::ERROR);
        }
    }
}
