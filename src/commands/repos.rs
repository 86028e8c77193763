use crate::commands::files::execute_repository_actions;
use crate::core::{
    catalog::RepositoryCatalog, error::Result, print_error, print_info, print_numbered_item,
    print_section_header, print_success, prompt::Prompt, session::Session,
};
use std::io::BufRead;

pub fn execute_create_repository<R: BufRead>(
    session: &mut Session,
    prompt: &mut Prompt<R>,
) -> Result<()> {
    let catalog = session.catalog_mut();
    let name = prompt.ask_until("Enter repository name", |line| {
        catalog.create(line).map(|repo| repo.name().to_string())
    })?;
    print_success(&format!("Repository '{name}' created successfully!"));
    Ok(())
}

/// Print the numbered listing used by the view and delete flows
pub fn print_repository_list(catalog: &RepositoryCatalog) {
    for (i, repo) in catalog.list().iter().enumerate() {
        print_numbered_item(i + 1, repo.name());
    }
}

pub fn execute_view_repositories<R: BufRead>(
    session: &mut Session,
    prompt: &mut Prompt<R>,
) -> Result<()> {
    let catalog = session.catalog_mut();
    if catalog.is_empty() {
        print_info("No repositories found.");
        return Ok(());
    }

    print_section_header("View Repositories");
    print_repository_list(catalog);

    let index = prompt.ask_choice("Select a repository by number", catalog.len())?;
    let repo = catalog.select_mut(index)?;
    execute_repository_actions(repo, prompt)
}

pub fn execute_delete_repository<R: BufRead>(
    session: &mut Session,
    prompt: &mut Prompt<R>,
) -> Result<()> {
    let catalog = session.catalog_mut();
    if catalog.is_empty() {
        print_error("No repositories available to delete");
        return Ok(());
    }

    print_section_header("Select a repository to delete");
    print_repository_list(catalog);

    let index = prompt.ask_choice("Enter the repository number to delete", catalog.len())?;
    let name = catalog.select(index)?.name().to_string();

    if prompt.confirm(&format!(
        "Are you sure you want to delete the repository '{name}'?"
    ))? {
        catalog.delete_by_selection(index)?;
        print_success(&format!("Repository '{name}' deleted successfully."));
    } else {
        print_info("Deletion canceled.");
    }
    Ok(())
}
