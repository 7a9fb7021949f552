//! User commands
//!
//! Usage: monomodel user <add|find|show|verify> ...

use crate::models::User;
use clap::{Args, Subcommand};
use monomodel_core::Entity;
use monomodel_store::{Db, Persistent};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a user and print its id
    Add {
        #[arg(long)]
        alias: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "MONOMODEL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the alias of the user with this email
    Find {
        #[arg(long)]
        email: String,
    },
    /// Print alias and email of a live user
    Show { id: i64 },
    /// Check a password against the stored digest
    Verify {
        #[arg(long)]
        email: String,
        #[arg(long, env = "MONOMODEL_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

/// Execute user command
pub fn execute(db: &Db, args: UserArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        UserCommand::Add {
            alias,
            email,
            password,
        } => {
            let mut user = User::default();
            user.set_alias(alias).set_email(email).set_password(&password);
            user.save(db)?;
            println!("{}", user.id().unwrap_or_default());
        }
        UserCommand::Find { email } => {
            let user = find(db, &email)?;
            println!("{}", user.alias().unwrap_or_default());
        }
        UserCommand::Show { id } => {
            let user = User::find(db, id)?.ok_or_else(|| format!("user {} not found", id))?;
            println!(
                "{} <{}>",
                user.alias().unwrap_or_default(),
                user.email().unwrap_or_default()
            );
        }
        UserCommand::Verify { email, password } => {
            let user = find(db, &email)?;
            if !user.verify_password(&password) {
                return Err("password does not match".into());
            }
            println!("ok");
        }
    }

    Ok(())
}

fn find(db: &Db, email: &str) -> Result<User, Box<dyn std::error::Error>> {
    User::find_by_email(db, email)?
        .ok_or_else(|| format!("no user with email {}", email).into())
}
