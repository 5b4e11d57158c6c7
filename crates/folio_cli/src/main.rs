//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `folio_core` linkage without a UI host.
//! - Print the page outline deterministically for quick sanity checks.

use folio_core::{Catalog, PageSession, RecordKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("folio_core ping={}", folio_core::ping());
    println!("folio_core version={}", folio_core::core_version());

    // Building a session runs the same validation a UI host would hit.
    let session = match PageSession::builtin() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("folio_core session=error {err}");
            return ExitCode::FAILURE;
        }
    };

    let catalog: &Catalog = session.catalog();
    println!("title={}", catalog.metadata.title);
    println!("reference_line_px={}", session.tracker().reference_line_px());
    for section in catalog.sections.iter() {
        let marker = if session.tracker().is_active(section.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{marker} {} {}", section.anchor(), section.display_name);
    }
    for kind in [RecordKind::Experience, RecordKind::Project] {
        for (index, record) in catalog.records(kind).iter().enumerate() {
            println!("{}[{index}] {}", kind.as_str(), record.title());
        }
    }
    ExitCode::SUCCESS
}
