// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rendering segmentations for people and for machines.

use crate::config::{OutputConfig, OutputFormat};
use crate::segmenter::Segmentation;
use crate::state::SearchStatistics;
use crate::symbols::Label;
use serde::Serialize;
use std::io::{self, Write};

/// Header printed before the partitions of a word.
pub const REPORT_HEADER: &str = "Elemental Forms: ";

/// Join the labels of one partition.
pub fn format_partition(labels: &[Label], separator: &str) -> String {
    labels.join(separator)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    word: &'a str,
    forms: Vec<&'a [Label]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<&'a SearchStatistics>,
}

/// Write the report for one word.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    segmentation: &Segmentation,
    config: &OutputConfig,
) -> io::Result<()> {
    match config.format {
        OutputFormat::Text => {
            writeln!(out, "{}", REPORT_HEADER)?;
            for partition in &segmentation.partitions {
                writeln!(
                    out,
                    "{}",
                    format_partition(partition.labels(), &config.separator)
                )?;
            }
            if config.show_statistics {
                let stats = &segmentation.statistics;
                writeln!(
                    out,
                    "({} forms, {} lookups, {} dead ends, {} steps)",
                    stats.partitions,
                    stats.candidate_lookups,
                    stats.dead_ends,
                    stats.tries + stats.retries
                )?;
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                word: &segmentation.word,
                forms: segmentation
                    .partitions
                    .iter()
                    .map(|partition| partition.labels())
                    .collect(),
                statistics: config
                    .show_statistics
                    .then_some(&segmentation.statistics),
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
