//! Site configuration commands: `site init`, `site sync`, `site toc`.

use coursegen_docs::patch::TextPatcher;
use coursegen_docs::site::current_year;
use coursegen_docs::steps::site::{init_site_config, sync_site_config, update_site_toc};

use crate::cli::args::LangArgs;
use crate::cli::commands::{Context, finish};
use crate::error::CourseGenError;

/// Create `myst.yml` if it does not exist.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded or the file cannot be
/// written.
pub fn init(ctx: &Context, args: &LangArgs) -> Result<(), CourseGenError> {
    let course = ctx.load_course()?;
    let report = init_site_config(&course, args.lang.labels(), ctx.layout(), current_year())?;
    finish(ctx.print_reports(&[report]))
}

/// Copy course metadata into `myst.yml`.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded or the file cannot be
/// read or written.
pub fn sync(ctx: &Context, args: &LangArgs) -> Result<(), CourseGenError> {
    let course = ctx.load_course()?;
    let reports = sync_site_config(
        &course,
        args.lang.labels(),
        ctx.layout(),
        current_year(),
        &TextPatcher,
    )?;
    finish(ctx.print_reports(&reports))
}

/// Relink table-of-contents entries to the session pages on disk.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or written.
pub fn toc(ctx: &Context) -> Result<(), CourseGenError> {
    let reports = update_site_toc(ctx.layout(), &TextPatcher)?;
    finish(ctx.print_reports(&reports))
}
