//! Full course scaffolding
//!
//! Runs every generation step in a fixed order. Steps never abort the run
//! on a per-file failure; failures are counted and reported at the end.

use std::io::{self, BufRead, Write};

use coursegen_core::labels::Labels;
use coursegen_docs::output::{WritePolicy, ensure_dir};
use coursegen_docs::patch::TextPatcher;
use coursegen_docs::report::{FileReport, FileStatus};
use coursegen_docs::site::current_year;
use coursegen_docs::steps::badges::inject_activity_badges;
use coursegen_docs::steps::pages::{
    write_activities, write_program, write_sessions, write_sessions_table,
};
use coursegen_docs::steps::site::{init_site_config, sync_site_config, update_site_toc};

use crate::cli::args::ScaffoldArgs;
use crate::cli::commands::{Context, finish};
use crate::error::CourseGenError;

/// Run the full scaffold.
///
/// With `--force` the user must confirm first unless `--yes` is given;
/// declining is not an error.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded, a step fails as a whole,
/// or any file could not be generated.
pub fn run(ctx: &Context, args: &ScaffoldArgs) -> Result<(), CourseGenError> {
    let labels = args.lang.labels();

    if args.force && !args.yes {
        let stdin = io::stdin();
        if !confirm(labels, &mut stdin.lock())? {
            println!("{}", labels.abort);
            return Ok(());
        }
    }

    let course = ctx.load_course()?;
    let layout = ctx.layout();
    let policy = WritePolicy::from_force(args.force);
    let year = current_year();
    let mut failed = 0;

    tracing::info!(
        root = %layout.root().display(),
        lang = %args.lang,
        force = args.force,
        "scaffolding course"
    );

    failed += ctx.print_reports(&[init_site_config(&course, labels, layout, year)?]);
    failed += ctx.print_reports(&[write_program(&course, labels, layout, policy)?]);

    let mut dirs = Vec::new();
    for dir in layout.scaffold_dirs() {
        if ensure_dir(&dir)? {
            dirs.push(FileReport::new(dir, FileStatus::Created));
        }
    }
    failed += ctx.print_reports(&dirs);

    failed += ctx.print_reports(&sync_site_config(
        &course,
        labels,
        layout,
        year,
        &TextPatcher,
    )?);
    failed += ctx.print_reports(&write_sessions(&course, labels, layout, None, policy)?);
    failed += ctx.print_reports(&update_site_toc(layout, &TextPatcher)?);
    failed += ctx.print_reports(&write_activities(&course, labels, layout, None, policy)?);
    failed += ctx.print_reports(&inject_activity_badges(labels, layout, &TextPatcher)?);
    failed += ctx.print_reports(&[write_sessions_table(&course, labels, layout)?]);

    finish(failed)?;
    ctx.note(labels.success);
    ctx.note(labels.run_hint);
    Ok(())
}

/// Asks for overwrite confirmation; only `y` or `yes` continues.
fn confirm(labels: &Labels, input: &mut impl BufRead) -> Result<bool, CourseGenError> {
    eprintln!("{}", labels.overwrite_warning);
    eprint!("{}", labels.confirm);
    io::stderr().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
