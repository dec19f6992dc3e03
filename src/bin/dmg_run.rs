//! Minimal headless entry point: `dmg_run <rom-path>`.
//!
//! Drives the frame driver for a bounded number of frames and prints a
//! one-line summary. The interactive windowing host is an external
//! collaborator and deliberately not linked into this binary.

use dmg_core::frame::Emulator;
use std::env;
use std::fs;
use std::process::ExitCode;

const FRAMES_TO_RUN: u32 = 60;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: {} <rom-path>", args.first().map(String::as_str).unwrap_or("dmg_run"));
        return ExitCode::FAILURE;
    }
    let rom_path = &args[1];

    let rom_data = match fs::read(rom_path) {
        Ok(data) => data,
        Err(err) => {
            log::error!("failed to read ROM '{rom_path}': {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut emulator = match Emulator::new(rom_data, true) {
        Ok(emulator) => emulator,
        Err(err) => {
            log::error!("failed to load cartridge: {err}");
            return ExitCode::FAILURE;
        }
    };

    for frame in 0..FRAMES_TO_RUN {
        if let Err(err) = emulator.run_frame() {
            log::error!("emulation aborted on frame {frame}: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!(
        "ran {FRAMES_TO_RUN} frames, {} total T-cycles",
        emulator.total_cycles()
    );
    ExitCode::SUCCESS
}
