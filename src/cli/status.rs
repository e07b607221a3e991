//! Status command implementation

use chrono::Utc;
use colored::Colorize;

use crate::cli::{AppContext, GlobalOptions};
use crate::error::Result;

/// Show where configuration lives and the state of the session
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = AppContext::new(opts).await?;

    println!("{}\n", "Hirelink Status".bold());
    println!(
        "Config file: {}",
        ctx.config_path.display().to_string().cyan()
    );
    println!("API: {}", ctx.client.base_url().cyan());
    println!();

    match ctx.store.session().decoded() {
        Some(claims) if claims.is_valid() => {
            let remaining = claims
                .expires_at_utc()
                .map(|exp| exp.signed_duration_since(Utc::now()));
            println!(
                "{} Logged in as {} ({})",
                "✓".green(),
                claims.email.bold(),
                claims.role
            );
            if let Some(remaining) = remaining {
                println!(
                    "  Session expires in {}h {}m",
                    remaining.num_hours(),
                    remaining.num_minutes() % 60
                );
            }
        }
        Some(claims) => {
            println!(
                "{} Session for {} has expired",
                "⚠".yellow(),
                claims.email
            );
            println!("  → Run 'hirelink login' to sign in again");
        }
        None => {
            println!("{} Not logged in", "○".dimmed());
            println!("  → Run 'hirelink login' to sign in");
        }
    }

    Ok(())
}
