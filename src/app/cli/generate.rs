//! Generate command implementation.

use crate::app::api::{self, BundleOptions};
use crate::domain::{AppError, GenerationSummary, PipelinePolicy};

pub fn run_generate(options: BundleOptions, strict: bool, json: bool) -> Result<(), AppError> {
    let policy = if strict { PipelinePolicy::strict() } else { PipelinePolicy::default() };
    let summary = api::generate(&options, &policy)?;

    if json {
        let line = serde_json::to_string(&summary).map_err(|e| AppError::Serialization {
            what: "generation summary".into(),
            details: e.to_string(),
        })?;
        println!("{}", line);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &GenerationSummary) {
    println!("✅ Generated Windows service bundle for {}", summary.service_id);
    println!("  Wrapper: {} (sha256 {})", summary.wrapper.tier, summary.wrapper.sha256);
    println!("  Generated files:");
    for path in summary.generated_files() {
        println!("    {}", path.display());
    }
    for dir in &summary.mirrored {
        println!("  Mirrored: {}", dir.display());
    }
    println!("  Log directory: {}", summary.log_directory.display());

    if !summary.warnings.is_empty() {
        println!("⚠️  Warnings:");
        for warning in &summary.warnings {
            println!("  • {}", warning.message);
        }
    }

    if let Some(install) = summary.install_script() {
        println!("Run {} as Administrator to install the service.", install.display());
    }
}
