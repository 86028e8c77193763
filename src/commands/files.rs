use crate::core::{
    error::Result, format_commit_line, print_error, print_info, print_menu,
    print_numbered_item, print_section_header, print_success, print_warning, prompt::Prompt,
    repository::Repository,
};
use std::io::BufRead;
use std::path::Path;

/// Action menu for one repository, until the user goes back.
pub fn execute_repository_actions<R: BufRead>(
    repo: &mut Repository,
    prompt: &mut Prompt<R>,
) -> Result<()> {
    loop {
        print_menu(
            &format!("Repository '{}'", repo.name()),
            &[
                "Add File",
                "Remove File",
                "Open File",
                "View Commit History",
                "Back to Repository List",
            ],
        );
        match prompt.ask_choice("Enter your choice", 5)? {
            1 => execute_add_file(repo, prompt)?,
            2 => execute_remove_file(repo, prompt)?,
            3 => execute_open_file(repo, prompt)?,
            4 => execute_commit_history(repo),
            _ => return Ok(()),
        }
    }
}

pub fn execute_add_file<R: BufRead>(repo: &mut Repository, prompt: &mut Prompt<R>) -> Result<()> {
    let path = prompt.ask("Enter the full file path to add")?;
    let message = prompt.ask("Enter commit message")?;

    match repo.add_file(&path, &message) {
        Ok(()) => print_success("File added successfully."),
        Err(e) => print_error(&e.to_string()),
    }
    Ok(())
}

pub fn execute_remove_file<R: BufRead>(
    repo: &mut Repository,
    prompt: &mut Prompt<R>,
) -> Result<()> {
    if repo.is_empty() {
        print_error("No files available to remove");
        return Ok(());
    }

    print_section_header("Available files in the repository");
    for (i, path) in repo.file_names().iter().enumerate() {
        print_numbered_item(i + 1, path);
    }

    let choice = prompt.ask_choice("Enter the file number to remove", repo.file_count())?;
    let selected = repo.file_names()[choice - 1].to_string();
    warn_if_ambiguous(repo, &selected);

    let message = prompt.ask("Enter commit message")?;
    match repo.remove_file(&selected, &message) {
        Ok(removed) => print_success(&format!("File '{removed}' removed successfully.")),
        Err(e) => print_error(&e.to_string()),
    }
    Ok(())
}

pub fn execute_open_file<R: BufRead>(repo: &Repository, prompt: &mut Prompt<R>) -> Result<()> {
    if repo.is_empty() {
        print_error("No files available in this repository");
        return Ok(());
    }

    print_section_header(&format!("Available files in repository '{}'", repo.name()));
    let paths = repo.file_names();
    for (i, path) in paths.iter().enumerate() {
        print_numbered_item(i + 1, display_name(path));
    }

    let choice = prompt.ask_choice("Enter the file number to open", paths.len())?;
    let selected = paths[choice - 1];
    warn_if_ambiguous(repo, selected);

    match repo.open_file(selected) {
        Ok(content) => {
            print_section_header(&format!("Content of the file '{}'", display_name(selected)));
            println!("{content}");
        }
        Err(e) => print_error(&e.to_string()),
    }
    Ok(())
}

pub fn execute_commit_history(repo: &Repository) {
    let history = repo.commit_history();
    if history.is_empty() {
        print_info("No commits yet.");
        return;
    }

    print_section_header("Commit History");
    for (i, record) in history.iter().enumerate() {
        println!("{}", format_commit_line(i + 1, record));
    }
}

/// Last path component, or the whole path when there is none
fn display_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

fn warn_if_ambiguous(repo: &Repository, path: &str) {
    let matches = repo.matching_paths(path);
    if matches.len() > 1 {
        log::warn!("'{path}' is a suffix of {} tracked paths", matches.len());
        print_warning(&format!(
            "'{path}' matches {} tracked paths; using '{}'",
            matches.len(),
            matches[0]
        ));
    }
}
