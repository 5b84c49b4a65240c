//! Command dispatch
//!
//! Routes parsed CLI arguments to the matching command handler and holds
//! the state shared by every generating command.

pub mod badges;
pub mod completions;
pub mod pages;
pub mod scaffold;
pub mod site;
pub mod version;

use coursegen_core::config::{CourseConfig, load_course};
use coursegen_core::error::Severity;
use coursegen_docs::layout::ProjectLayout;
use coursegen_docs::report::{FileReport, FileStatus, failure_count};

use crate::cli::args::{Cli, Commands, SiteSubcommand};
use crate::error::CourseGenError;

/// Dispatch the parsed CLI command to the appropriate handler.
///
/// # Errors
///
/// Returns an error if the command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), CourseGenError> {
    let ctx = Context::from_cli(&cli);

    match cli.command {
        Commands::Sessions(args) => pages::sessions(&ctx, &args),
        Commands::Activities(args) => pages::activities(&ctx, &args),
        Commands::Program(args) => pages::program(&ctx, &args),
        Commands::Table(args) => pages::table(&ctx, &args),
        Commands::Site(cmd) => match cmd.subcommand {
            SiteSubcommand::Init(args) => site::init(&ctx, &args),
            SiteSubcommand::Sync(args) => site::sync(&ctx, &args),
            SiteSubcommand::Toc => site::toc(&ctx),
        },
        Commands::Badges(args) => badges::run(&ctx, &args),
        Commands::Scaffold(args) => scaffold::run(&ctx, &args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => version::run(&args),
    }
}

// ============================================================================
// Shared Context
// ============================================================================

/// Project paths and output settings shared by generating commands.
#[derive(Debug)]
pub struct Context {
    layout: ProjectLayout,
    quiet: bool,
}

impl Context {
    /// Builds the context from global CLI options.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let mut layout = ProjectLayout::new(&cli.root);
        if let Some(plan) = &cli.config {
            layout = layout.with_plan(plan);
        }
        Self {
            layout,
            quiet: cli.quiet,
        }
    }

    /// Returns the project layout.
    #[must_use]
    pub const fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Loads the course plan and logs every entry-level issue.
    ///
    /// # Errors
    ///
    /// Returns `CourseGenError::Config` if the plan is missing or unusable.
    pub fn load_course(&self) -> Result<CourseConfig, CourseGenError> {
        let plan = self.layout.plan();
        tracing::info!(plan = %plan.display(), "loading course plan");

        let loaded = load_course(plan)?;
        for issue in &loaded.issues {
            match issue.severity {
                Severity::Error => tracing::error!(
                    location = %issue.location,
                    "entry dropped: {}",
                    issue.message
                ),
                Severity::Warning => tracing::warn!(location = %issue.location, "{}", issue.message),
            }
        }
        tracing::debug!(weeks = loaded.course.weeks.len(), "course plan loaded");
        Ok(loaded.course)
    }

    /// Prints a message unless `--quiet` is set.
    pub fn note(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Prints one status line per report and returns the failure count.
    ///
    /// Failures always go to stderr; other lines are suppressed by
    /// `--quiet`.
    pub fn print_reports(&self, reports: &[FileReport]) -> usize {
        for report in reports {
            let line = self.status_line(report);
            if report.status.is_failure() {
                eprintln!("{line}");
            } else if !self.quiet {
                println!("{line}");
            }
            if report.status == FileStatus::Warning {
                tracing::warn!(file = %report.path.display(), "{}", report.detail.as_deref().unwrap_or(""));
            }
        }
        failure_count(reports)
    }

    fn status_line(&self, report: &FileReport) -> String {
        let path = self.layout.display(&report.path).display();
        match &report.detail {
            Some(detail) => format!("{:<11} {path} ({detail})", report.status.as_str()),
            None => format!("{:<11} {path}", report.status.as_str()),
        }
    }
}

/// Turns an accumulated failure count into the command result.
///
/// # Errors
///
/// Returns `CourseGenError::Incomplete` if any file failed.
pub fn finish(failed: usize) -> Result<(), CourseGenError> {
    if failed == 0 {
        Ok(())
    } else {
        Err(CourseGenError::Incomplete { failed })
    }
}
