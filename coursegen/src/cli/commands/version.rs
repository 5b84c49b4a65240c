//! Version information display

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::CourseGenError;

/// Print version information.
///
/// # Errors
///
/// Returns `CourseGenError::Json` if the JSON form cannot be serialized.
pub fn run(args: &VersionArgs) -> Result<(), CourseGenError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match args.format {
        OutputFormat::Human => println!("{name} {version}"),
        OutputFormat::Json => {
            let info = serde_json::json!({ "name": name, "version": version });
            println!("{}", serde_json::to_string(&info)?);
        }
    }
    Ok(())
}
