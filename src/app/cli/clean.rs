//! Clean command implementation.

use crate::app::api::{self, BundleOptions};
use crate::domain::AppError;

pub fn run_clean(options: BundleOptions) -> Result<(), AppError> {
    let removed = api::clean(&options)?;
    if removed.is_empty() {
        println!("✅ Nothing to clean");
        return Ok(());
    }
    println!("✅ Removed {} previous artifact(s)", removed.len());
    for path in &removed {
        println!("  {}", path.display());
    }
    Ok(())
}
