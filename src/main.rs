/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Main executable for symdegen-rs

use clap::Parser;
use env_logger::Env;

fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    log::info!("symdegen-rs v{}", symdegen_rs::VERSION);

    let cli = symdegen_rs::cli::Cli::parse();
    symdegen_rs::cli::run(&cli)
}
