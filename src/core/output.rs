//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all cvhub output,
//! ensuring consistent colors, spacing, and message structure across menus.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, yellow for warnings and prompts,
//!   cyan for menu numbers
//! - **Standardized spacing**: Newline before messages so menus stay readable
//! - **User-friendly formatting**: Clear visual hierarchy and readable output

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a warning message
///
/// # Format
/// ```text
///
/// ! <message>
/// ```
pub fn print_warning(message: &str) {
    println!("\n{} {}", "!".yellow().bold(), message.yellow());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Prints a boxed menu title, e.g. `------ Hub Menu ------`
pub fn print_banner(title: &str) {
    println!("\n{}", format!("------------ {title} ------------").yellow());
}

/// Prints one numbered entry of a listing
///
/// # Format
/// ```text
/// [<index>] <text>
/// ```
pub fn print_numbered_item(index: usize, text: &str) {
    println!(
        "{}{}{} {}",
        "[".bright_black(),
        index.to_string().cyan().bold(),
        "]".bright_black(),
        text.white()
    );
}

/// Prints a titled menu with 1-based numbered options
pub fn print_menu(title: &str, options: &[&str]) {
    print_banner(title);
    println!();
    for (i, option) in options.iter().enumerate() {
        print_numbered_item(i + 1, option);
    }
}
