//! Batch command implementation
//!
//! Reads one JSON object per line and writes one result per line:
//!
//! ```text
//! {"id": "title", "text": "مرحبا بالعالم", "reorder": false}
//! ```
//!
//! A line that fails to parse produces an error record and processing moves
//! on to the next line.

use crate::cli::BatchArgs;
use harf::error::{HarfError, Result};
use harf::{pipeline_for, Pipeline, ProcessOptions};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{Entry, HashMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

/// JSONL job specification
#[derive(Debug, Deserialize)]
struct BatchJob {
    /// Echoed back in the result; defaults to the line number
    #[serde(default)]
    id: Option<String>,
    /// Label in logical order
    text: String,
    #[serde(default)]
    normalize: Option<bool>,
    #[serde(default)]
    shape: Option<bool>,
    #[serde(default)]
    reorder: Option<bool>,
}

impl BatchJob {
    fn options(&self) -> ProcessOptions {
        let defaults = ProcessOptions::default();
        ProcessOptions {
            normalize: self.normalize.unwrap_or(defaults.normalize),
            shape: self.shape.unwrap_or(defaults.shape),
            reorder: self.reorder.unwrap_or(defaults.reorder),
        }
    }
}

#[derive(Debug, Serialize)]
struct BatchResult {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl BatchResult {
    fn ok(id: String, output: String) -> Self {
        Self {
            id,
            output: Some(output),
            error: None,
        }
    }

    fn failed(id: String, error: String) -> Self {
        Self {
            id,
            output: None,
            error: Some(error),
        }
    }
}

/// Pipelines built so far, one per distinct stage selection
#[derive(Default)]
struct PipelineSet {
    pipelines: HashMap<ProcessOptions, Pipeline>,
}

impl PipelineSet {
    fn get(&mut self, options: ProcessOptions) -> Result<&Pipeline> {
        match self.pipelines.entry(options) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(pipeline_for(&options)?)),
        }
    }
}

pub fn run(args: &BatchArgs, quiet: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = match args.input {
        Some(ref path) => Box::new(BufReader::new(File::open(path)?)),
        None => {
            if !quiet {
                eprintln!("Reading labels from stdin...");
            }
            Box::new(BufReader::new(io::stdin()))
        },
    };

    let writer: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut writer = BufWriter::new(writer);

    let mut pipelines = PipelineSet::default();
    let mut job_count = 0;
    let mut error_count = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        job_count += 1;

        let result = process_line(&line, line_num + 1, &mut pipelines);
        if let Some(ref error) = result.error {
            log::warn!("Line {}: {}", line_num + 1, error);
            error_count += 1;
        }

        let encoded = serde_json::to_string(&result)
            .map_err(|e| HarfError::Other(format!("Failed to encode result: {}", e)))?;
        writeln!(writer, "{}", encoded)?;
    }
    writer.flush()?;

    if !quiet {
        eprintln!("Batch processing complete:");
        eprintln!("  Total labels: {}", job_count);
        eprintln!("  Successful: {}", job_count - error_count);
        eprintln!("  Failed: {}", error_count);
    }

    Ok(())
}

fn process_line(line: &str, line_num: usize, pipelines: &mut PipelineSet) -> BatchResult {
    let job: BatchJob = match serde_json::from_str(line) {
        Ok(job) => job,
        Err(e) => {
            return BatchResult::failed(line_num.to_string(), format!("Invalid job: {}", e))
        },
    };

    let id = job.id.clone().unwrap_or_else(|| line_num.to_string());
    match pipelines.get(job.options()) {
        Ok(pipeline) => BatchResult::ok(id, pipeline.run(&job.text).into_owned()),
        Err(e) => BatchResult::failed(id, e.to_string()),
    }
}
