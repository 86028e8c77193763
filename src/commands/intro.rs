use crate::core::config::HubConfig;
use crate::core::error::Result;
use colored::*;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const PROGRESS_STEPS: usize = 20;

const TERMINAL_ART: &[&str] = &[
    " _______________________",
    "|                       |",
    "|    CVHUB TERMINAL     |",
    "|   >_ Welcome to CVHUB |",
    "|_______________________|",
    "    /===============\\",
    "   | [ ] [ ] [ ] [ ] |",
    "   | [____SPACE____] |",
    "    \\===============/",
];

/// Render one frame of the start-up progress bar
pub fn progress_bar(step: usize) -> String {
    let filled = step.min(PROGRESS_STEPS);
    let percentage = filled * 100 / PROGRESS_STEPS;
    format!(
        "[{}{}] {percentage}%",
        "#".repeat(filled).green(),
        " ".repeat(PROGRESS_STEPS - filled)
    )
}

/// Progress bar animation followed by the welcome banner.
pub fn show_intro(config: &HubConfig) -> Result<()> {
    let mut stdout = io::stdout();
    for step in 0..=PROGRESS_STEPS {
        write!(stdout, "\r{}", progress_bar(step))?;
        stdout.flush()?;
        thread::sleep(Duration::from_millis(config.intro_step_ms));
    }
    writeln!(stdout, "\r{}\r", " ".repeat(PROGRESS_STEPS + 8))?;

    for line in TERMINAL_ART {
        writeln!(stdout, "{line}")?;
    }
    writeln!(stdout, "\n{}", ">_ CvHub".red().bold())?;
    Ok(())
}

pub fn print_farewell() {
    println!();
    println!("{}", "------------   Thank You!  ------------".green());
    println!("{}", "-> We truly appreciate your support!".green());
    println!(
        "{}",
        "-> Keep committing, keep pushing, and keep building amazing things".green()
    );
}
