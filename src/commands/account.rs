use crate::core::{
    account::{validate_email, validate_password, validate_username, AccountField},
    error::{HubError, Result},
    print_banner, print_error, print_menu, print_success,
    prompt::Prompt,
    session::Session,
};
use std::io::BufRead;

/// Collect valid credentials one field at a time and register the user.
pub fn execute_sign_up<R: BufRead>(session: &mut Session, prompt: &mut Prompt<R>) -> Result<()> {
    print_banner("Signup process");

    let username = prompt.ask_until("Enter username", |line| {
        validate_username(line).map(|_| line.to_string())
    })?;
    let email = prompt.ask_until("Enter email", |line| {
        validate_email(line).map(|_| line.to_string())
    })?;
    let password = prompt.ask_until("Enter password", |line| {
        validate_password(line).map(|_| line.to_string())
    })?;

    session.sign_up(&username, &email, &password)?;
    print_success("Signup successful!");
    Ok(())
}

/// Returns whether the user got in.
pub fn execute_sign_in<R: BufRead>(session: &Session, prompt: &mut Prompt<R>) -> Result<bool> {
    print_banner("Signin process");

    if session.user().is_none() {
        print_error(&HubError::NoUser.to_string());
        return Ok(false);
    }

    let email = prompt.ask("Enter registered email")?;
    let email = email.trim();
    if session
        .verify_account_field(AccountField::Email, email)
        .is_err()
    {
        print_error(&HubError::UnknownEmail.to_string());
        return Ok(false);
    }

    let password = prompt.ask("Enter registered password")?;
    match session.sign_in(email, &password) {
        Ok(user) => {
            print_success("Signin successful!");
            print_success(&format!("Welcome, {}!", user.username()));
            Ok(true)
        }
        Err(e) => {
            print_error(&e.to_string());
            Ok(false)
        }
    }
}

pub fn execute_account_settings<R: BufRead>(
    session: &mut Session,
    prompt: &mut Prompt<R>,
) -> Result<()> {
    loop {
        print_menu(
            "Account Settings",
            &[
                "Update Username",
                "Update Email",
                "Update Password",
                "Go back",
            ],
        );
        let field = match prompt.ask_choice("Enter your choice", 4)? {
            1 => AccountField::Username,
            2 => AccountField::Email,
            3 => AccountField::Password,
            _ => return Ok(()),
        };
        update_account_field(session, prompt, field)?;
    }
}

fn update_account_field<R: BufRead>(
    session: &mut Session,
    prompt: &mut Prompt<R>,
    field: AccountField,
) -> Result<()> {
    print_banner(&format!("Update {field}"));

    if session.user().is_none() {
        print_error("No user found. Please sign in first");
        return Ok(());
    }

    prompt.ask_until(&format!("Enter current {field}"), |line| {
        session.verify_account_field(field, line)
    })?;
    prompt.ask_until(&format!("Enter new {field}"), |line| {
        session.update_account_field(field, line)
    })?;

    print_success(&format!("{} updated successfully!", capitalize(field.as_str())));
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
