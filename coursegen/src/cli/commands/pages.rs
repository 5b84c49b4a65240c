//! Page generation commands: `sessions`, `activities`, `program`, `table`.

use coursegen_core::config::CourseConfig;
use coursegen_docs::output::WritePolicy;
use coursegen_docs::steps::pages::{
    write_activities, write_program, write_sessions, write_sessions_table,
};

use crate::cli::args::{LangArgs, PageArgs, ProgramArgs};
use crate::cli::commands::{Context, finish};
use crate::error::CourseGenError;

/// Generate session pages.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded, the sessions directory
/// cannot be created, or any page fails.
pub fn sessions(ctx: &Context, args: &PageArgs) -> Result<(), CourseGenError> {
    let course = ctx.load_course()?;
    if !has_week(ctx, &course, args.week) {
        return Ok(());
    }
    let reports = write_sessions(
        &course,
        args.lang.lang.labels(),
        ctx.layout(),
        args.week,
        WritePolicy::from_force(args.force),
    )?;
    finish(ctx.print_reports(&reports))
}

/// Generate activity skeleton pages.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded, the activities directory
/// cannot be created, or any page fails.
pub fn activities(ctx: &Context, args: &PageArgs) -> Result<(), CourseGenError> {
    let course = ctx.load_course()?;
    if !has_week(ctx, &course, args.week) {
        return Ok(());
    }
    let reports = write_activities(
        &course,
        args.lang.lang.labels(),
        ctx.layout(),
        args.week,
        WritePolicy::from_force(args.force),
    )?;
    finish(ctx.print_reports(&reports))
}

/// Generate the program page.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded or the page cannot be
/// written.
pub fn program(ctx: &Context, args: &ProgramArgs) -> Result<(), CourseGenError> {
    let course = ctx.load_course()?;
    let report = write_program(
        &course,
        args.lang.lang.labels(),
        ctx.layout(),
        WritePolicy::from_force(!args.init),
    )?;
    finish(ctx.print_reports(&[report]))
}

/// Generate the sessions table.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded or the table cannot be
/// written.
pub fn table(ctx: &Context, args: &LangArgs) -> Result<(), CourseGenError> {
    let course = ctx.load_course()?;
    let report = write_sessions_table(&course, args.lang.labels(), ctx.layout())?;
    finish(ctx.print_reports(&[report]))
}

fn has_week(ctx: &Context, course: &CourseConfig, week: Option<u32>) -> bool {
    match week {
        Some(number) if course.select_weeks(Some(number)).is_empty() => {
            ctx.note(&format!("No entry for week {number} in the course plan"));
            false
        }
        _ => true,
    }
}
