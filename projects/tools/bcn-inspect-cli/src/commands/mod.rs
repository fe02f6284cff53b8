pub mod analyze;
pub mod analyze_bc;
pub mod diff;
pub mod dump;

use crate::error::CliError;
use crate::util::{handle_file_error, with_mapped_file};
use bytesize::ByteSize;
#[cfg(feature = "multithreaded")]
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Runs `report` over every file, printing the reports in argument order followed by a
/// size and timing summary.
///
/// Each file gets its own call to `report`, so files can be processed in parallel.
pub(crate) fn report_files<F>(files: &[PathBuf], report: F)
where
    F: Fn(&[u8]) -> Result<String, CliError> + Sync,
{
    let start = Instant::now();
    let bytes_processed = AtomicU64::new(0);
    let run = |path: &PathBuf| report_file(path, &report, &bytes_processed);

    #[cfg(feature = "multithreaded")]
    let results: Vec<_> = files.par_iter().map(run).collect();
    #[cfg(not(feature = "multithreaded"))]
    let results: Vec<_> = files.iter().map(run).collect();

    for (path, result) in files.iter().zip(results) {
        handle_file_error(path, result.map(|text| {
            println!("{}", path.display());
            print!("{text}");
        }));
    }

    let elapsed = start.elapsed();
    let data_size = ByteSize(bytes_processed.load(Ordering::Relaxed));
    println!("\nProcessed {} file(s), {data_size} in {elapsed:.2?}", files.len());
}

fn report_file<F>(path: &Path, report: &F, bytes_processed: &AtomicU64) -> Result<String, CliError>
where
    F: Fn(&[u8]) -> Result<String, CliError>,
{
    with_mapped_file(path, |bytes| {
        bytes_processed.fetch_add(bytes.len() as u64, Ordering::Relaxed);
        report(bytes)
    })
    .map_err(|e| e.in_file(path))
}
