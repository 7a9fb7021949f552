//! Customer commands
//!
//! Usage: monomodel customer <show|add|list|delete|restore|touch> ...

use crate::models::Customer;
use clap::{Args, Subcommand};
use monomodel_core::{Entity, Filters};
use monomodel_store::{Db, Persistent};

#[derive(Debug, Args)]
pub struct CustomerArgs {
    #[command(subcommand)]
    pub command: CustomerCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Print the first name of a live customer
    Show {
        id: i64,
        /// Print first name, last name and email instead
        #[arg(long)]
        full: bool,
    },
    /// Insert a customer and print its id
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// List live customers as JSON, one per line
    List {
        /// Maximum number of rows (0 for all)
        #[arg(long, default_value_t = 0)]
        limit: u32,
    },
    /// Soft-delete a customer
    Delete { id: i64 },
    /// Bring a soft-deleted customer back
    Restore { id: i64 },
    /// Refresh a customer's updated_at
    Touch { id: i64 },
}

/// Execute customer command
pub fn execute(db: &Db, args: CustomerArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        CustomerCommand::Show { id, full } => {
            let customer = Customer::find(db, id)?.ok_or_else(|| not_found(id))?;
            if full {
                println!(
                    "{} {} <{}>",
                    customer.first_name().unwrap_or_default(),
                    customer.last_name().unwrap_or_default(),
                    customer.email().unwrap_or_default()
                );
            } else {
                println!("{}", customer.first_name().unwrap_or_default());
            }
        }
        CustomerCommand::Add {
            first_name,
            last_name,
            email,
        } => {
            let mut customer = Customer::default();
            customer.set_first_name(first_name);
            if let Some(last_name) = last_name {
                customer.set_last_name(last_name);
            }
            if let Some(email) = email {
                customer.set_email(email);
            }
            customer.save(db)?;
            println!("{}", customer.id().unwrap_or_default());
        }
        CustomerCommand::List { limit } => {
            let filters = Filters::new().eq("is_deleted", false);
            for customer in Customer::find_all_by(db, &filters, Some(limit))? {
                println!("{}", customer.to_json()?);
            }
        }
        CustomerCommand::Delete { id } => {
            let mut customer = Customer::find(db, id)?.ok_or_else(|| not_found(id))?;
            customer.delete(db)?;
            println!("Deleted customer {}", id);
        }
        CustomerCommand::Restore { id } => {
            let mut customer = Customer::find_trashed(db, id)?.ok_or_else(|| not_found(id))?;
            customer.restore(db)?;
            println!("Restored customer {}", id);
        }
        CustomerCommand::Touch { id } => {
            let mut customer = Customer::find_any(db, id)?.ok_or_else(|| not_found(id))?;
            customer.touch(db)?;
            println!("{}", customer.updated_at().unwrap_or_default());
        }
    }

    Ok(())
}

fn not_found(id: i64) -> String {
    format!("customer {} not found", id)
}
