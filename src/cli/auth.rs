//! Login, register and logout commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;

use crate::cli::{AppContext, GlobalOptions};
use crate::client::models::{LoginRequest, RegisterRequest, Role};
use crate::error::Result;

/// Run the login command, prompting for anything not given as a flag
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    let theme = ColorfulTheme::default();

    let email = match email {
        Some(email) => email,
        None => Input::with_theme(&theme)
            .with_prompt("Email")
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?,
    };

    debug!("Logging in as {}", email);
    let claims = ctx.store.login(&LoginRequest { email, password }).await?;

    println!(
        "{} Logged in as {} ({})",
        "✓".green(),
        claims.email.bold(),
        claims.role
    );
    Ok(())
}

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    first_name: String,
    last_name: String,
    email: String,
    role: Role,
    password: Option<String>,
) -> Result<()> {
    let ctx = AppContext::new(opts).await?;

    // A password from the flag or environment is its own confirmation
    let (password, confirmation) = match password {
        Some(password) => (password.clone(), password),
        None => {
            let theme = ColorfulTheme::default();
            let password = Password::with_theme(&theme)
                .with_prompt("Password")
                .interact()?;
            let confirmation = Password::with_theme(&theme)
                .with_prompt("Confirm password")
                .interact()?;
            (password, confirmation)
        }
    };

    let request = RegisterRequest {
        first_name,
        last_name,
        email,
        password,
        role,
    };
    let claims = ctx.store.register(&request, &confirmation).await?;

    println!(
        "{} Account created. Logged in as {} ({})",
        "✓".green(),
        claims.email.bold(),
        claims.role
    );
    Ok(())
}

/// Run the logout command
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.store.logout().await?;
    println!("{} Logged out", "✓".green());
    Ok(())
}
