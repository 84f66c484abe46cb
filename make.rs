#!/usr/bin/env run-cargo-script
//! ```cargo
//! [package]
//! name = "tendigit-make"
//! version = "1.0.0"
//! edition = "2021"
//!
//! [dependencies]
//! nob = { git = "https://gitlab.isae-supaero.fr/a.stevan/nob.rs", rev = "7ea6be855cf5600558440def6e59a83f78b8b543" }
//! clap = { version = "4.5.17", features = ["derive"] }
//! ```
extern crate clap;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Formats the code, or only checks it with `--check`.
    Fmt {
        #[arg(short, long)]
        check: bool,
    },
    /// Checks every target and runs Clippy on them.
    Lint,
    /// Runs the unit tests.
    Test {
        #[arg(short, long)]
        verbose: bool,
    },
    /// Runs the Criterion benchmarks.
    Bench,
    /// Builds the documentation.
    Doc {
        #[arg(short, long)]
        open: bool,
    },
    /// Generates a few numbers with each random source.
    Demo,
}

#[rustfmt::skip]
fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Fmt { check }) => {
            if *check {
                nob::run_cmd_and_fail!("cargo", "fmt", "--all", "--", "--check");
            } else {
                nob::run_cmd_and_fail!("cargo", "fmt", "--all");
            }
        }
        Some(Commands::Lint) => {
            nob::run_cmd_and_fail!("cargo", "check", "--all-targets");
            nob::run_cmd_and_fail!("cargo", "clippy", "--all-targets", "--", "-D", "warnings");
        }
        Some(Commands::Test { verbose }) => {
            let mut cmd = vec!["cargo", "test"];
            if *verbose { cmd.push("--verbose") }
            nob::run_cmd_as_vec_and_fail!(cmd);
        }
        Some(Commands::Bench) => {
            nob::run_cmd_and_fail!("cargo", "bench", "--bench", "pipeline");
        }
        Some(Commands::Doc { open }) => {
            let mut cmd = vec!["cargo", "doc", "--no-deps"];
            if *open { cmd.push("--open") }
            nob::run_cmd_as_vec_and_fail!(cmd);
        }
        Some(Commands::Demo) => {
            nob::run_cmd_and_fail!("cargo", "run", "--release", "--", "--source", "secure", "-n", "3");
            nob::run_cmd_and_fail!("cargo", "run", "--release", "--", "--source", "insecure", "-n", "3");
            nob::run_cmd_and_fail!(
                "cargo", "run", "--release", "--",
                "--seed", "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
                "-n", "3"
            );
        }
        None => {}
    }
}
