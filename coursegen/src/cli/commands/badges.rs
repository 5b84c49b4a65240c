//! Activity badge injection.

use coursegen_docs::patch::TextPatcher;
use coursegen_docs::steps::badges::inject_activity_badges;

use crate::cli::args::LangArgs;
use crate::cli::commands::{Context, finish};
use crate::error::CourseGenError;

/// Insert or refresh the badge block of every activity page.
///
/// # Errors
///
/// Returns an error if the activities directory cannot be scanned or any
/// page fails.
pub fn run(ctx: &Context, args: &LangArgs) -> Result<(), CourseGenError> {
    let reports = inject_activity_badges(args.lang.labels(), ctx.layout(), &TextPatcher)?;
    finish(ctx.print_reports(&reports))
}
