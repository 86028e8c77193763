//! Scripted stdin sessions and predefined scenarios
//!
//! Every menu reads one line per prompt, so a session is just the answers
//! joined by newlines.

#![allow(dead_code)]

pub const USERNAME: &str = "alice";
pub const EMAIL: &str = "alice@gmail.com";
pub const PASSWORD: &str = "Secret#123";

/// Join answers into a stdin script, one line each
pub fn script(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Sign up, sign in, run `hub_lines` in the hub menu, then exit the hub and
/// leave
pub fn signed_in_session(hub_lines: &[&str]) -> String {
    let mut lines = vec!["1", USERNAME, EMAIL, PASSWORD, "2", EMAIL, PASSWORD];
    lines.extend_from_slice(hub_lines);
    lines.extend_from_slice(&["5", "3"]);
    script(&lines)
}

/// Hub-menu answers that create `name`, open it, run `actions` in its
/// repository menu and go back
pub fn with_repository<'a>(name: &'a str, actions: &[&'a str]) -> Vec<&'a str> {
    let mut lines = vec!["1", name, "2", "1"];
    lines.extend_from_slice(actions);
    lines.push("5");
    lines
}
