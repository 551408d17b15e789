use std::io;

use anyhow::Result;
use tracing::info;

use super::super::{
    args::ExtractCommand,
    exit_status::ExitStatus,
    report::{print_failures_to, print_summary_to, report},
};
use super::context_options;
use crate::{core::ExtractContext, entries::Entry};

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let ctx = ExtractContext::new(&context_options(&cmd.common))?;
    let output = ctx.translations();

    info!(
        files = ctx.files.len(),
        records = output.records.len(),
        unattributed = output.unattributed,
        "translation extraction finished"
    );

    let record_count = output.records.len();
    let entries: Vec<Entry> = output.records.into_iter().map(Entry::from).collect();
    report(&entries, cmd.common.format)?;

    let mut stderr = io::stderr().lock();
    print_failures_to(&output.failures, &mut stderr);
    print_summary_to(
        record_count,
        ctx.files.len(),
        output.failures.len(),
        &mut stderr,
    );

    Ok(ExitStatus::from_failures(output.failures.len()))
}
