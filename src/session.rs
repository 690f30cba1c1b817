// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interactive session: read words line by line and print their forms.
//!
//! A line that cannot be read as text counts as the empty word. End of input
//! also counts as one final empty word, after which the session ends.

use crate::config::{OutputConfig, SearchLimits};
use crate::output::write_report;
use crate::segmenter::Segmenter;
use std::io::{self, BufRead, ErrorKind, Write};
use tracing::warn;

/// Prompt printed before each line is read.
pub const PROMPT: &str = "Input a word: ";

/// Segment `word` and write its report.
///
/// A bounded search that gives up is reported on `out` and is not an error.
pub fn report_word<W: Write + ?Sized>(
    out: &mut W,
    segmenter: &Segmenter,
    word: &str,
    limits: &SearchLimits,
    config: &OutputConfig,
) -> io::Result<()> {
    match segmenter.segment_within(word, limits) {
        Ok(segmentation) => write_report(out, &segmentation, config),
        Err(err) => {
            warn!(word, %err, "giving up on word");
            writeln!(out, "Could not finish {:?}: {}", word, err)
        }
    }
}

/// Run the read-segment-print loop until `input` is exhausted.
///
/// Returns the number of lines read.
pub fn run_session<R: BufRead, W: Write + ?Sized>(
    mut input: R,
    out: &mut W,
    segmenter: &Segmenter,
    limits: &SearchLimits,
    config: &OutputConfig,
) -> io::Result<usize> {
    let mut lines = 0;
    loop {
        if config.prompt {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        let mut line = String::new();
        let finished = match input.read_line(&mut line) {
            Ok(0) => true,
            Ok(_) => false,
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                warn!(%err, "treating unreadable line as empty");
                line.clear();
                false
            }
            Err(err) => return Err(err),
        };

        let word = line.trim_end_matches(['\r', '\n']);
        report_word(out, segmenter, word, limits, config)?;
        out.flush()?;

        if finished {
            return Ok(lines);
        }
        lines += 1;
    }
}
