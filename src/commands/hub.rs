use crate::commands::account::{execute_account_settings, execute_sign_in, execute_sign_up};
use crate::commands::intro::{print_farewell, show_intro};
use crate::commands::repos::{
    execute_create_repository, execute_delete_repository, execute_view_repositories,
};
use crate::core::{
    config::HubConfig,
    error::{HubError, Result},
    print_menu,
    prompt::Prompt,
    session::Session,
};
use std::io::{self, BufRead};

/// Run an interactive session on stdin with the given configuration.
pub fn execute_hub(config: HubConfig) -> Result<()> {
    let mut session = Session::new(config);
    if session.config().show_intro {
        show_intro(session.config())?;
    }

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock());
    run_hub(&mut session, &mut prompt)
}

/// Main menu loop. Running out of input ends the session without an error.
pub fn run_hub<R: BufRead>(session: &mut Session, prompt: &mut Prompt<R>) -> Result<()> {
    match main_menu(session, prompt) {
        Err(HubError::InputClosed) => {
            log::debug!("Input closed, leaving the hub");
            Ok(())
        }
        other => other,
    }
}

fn main_menu<R: BufRead>(session: &mut Session, prompt: &mut Prompt<R>) -> Result<()> {
    loop {
        print_menu(
            "Select the option",
            &["Join the Hub", "Enter the Hub", "Leave the Hub"],
        );
        match prompt.ask_choice("Enter your choice", 3)? {
            1 => execute_sign_up(session, prompt)?,
            2 => {
                if execute_sign_in(session, prompt)? {
                    hub_menu(session, prompt)?;
                }
            }
            _ => {
                print_farewell();
                return Ok(());
            }
        }
    }
}

fn hub_menu<R: BufRead>(session: &mut Session, prompt: &mut Prompt<R>) -> Result<()> {
    loop {
        print_menu(
            "Hub Menu",
            &[
                "Create Repository",
                "View Repositories",
                "Delete Repository",
                "Account Settings",
                "Exit",
            ],
        );
        match prompt.ask_choice("Please select an option (1-5)", 5)? {
            1 => execute_create_repository(session, prompt)?,
            2 => execute_view_repositories(session, prompt)?,
            3 => execute_delete_repository(session, prompt)?,
            4 => execute_account_settings(session, prompt)?,
            _ => return Ok(()),
        }
    }
}
