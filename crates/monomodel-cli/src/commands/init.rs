//! Schema setup command
//!
//! Usage: monomodel init

use crate::models::SCHEMA;
use monomodel_store::Db;

/// Create the demo tables if they do not exist yet
pub fn execute(db: &Db) -> Result<(), Box<dyn std::error::Error>> {
    db.connection()?.execute_batch(SCHEMA)?;
    println!("Schema ready");
    Ok(())
}
