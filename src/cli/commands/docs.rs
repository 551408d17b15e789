use std::io;

use anyhow::Result;
use tracing::info;

use super::super::{
    args::DocsCommand,
    exit_status::ExitStatus,
    report::{print_doc_warnings_to, print_failures_to, print_summary_to, report},
};
use super::context_options;
use crate::{core::ExtractContext, entries::Entry};

pub fn docs(cmd: DocsCommand) -> Result<ExitStatus> {
    let ctx = ExtractContext::new(&context_options(&cmd.common))?;
    let output = ctx.docs();

    info!(
        files = ctx.files.len(),
        records = output.records.len(),
        warnings = output.warnings.len(),
        "doc extraction finished"
    );

    let record_count = output.records.len();
    let entries: Vec<Entry> = output.records.into_iter().map(Entry::from).collect();
    report(&entries, cmd.common.format)?;

    let mut stderr = io::stderr().lock();
    print_doc_warnings_to(&output.warnings, &mut stderr);
    print_failures_to(&output.failures, &mut stderr);
    print_summary_to(
        record_count,
        ctx.files.len(),
        output.failures.len(),
        &mut stderr,
    );

    Ok(ExitStatus::from_failures(output.failures.len()))
}
