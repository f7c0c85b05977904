use std::io;

use crate::{
    config::GeneratorConfig,
    logger::{ansi, fail, pass},
    table::{generate_table, LookupTable},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    Count,
    Width,
    OutputRange,
    Monotonic,
    MatchesGenerated,
}

impl Check {
    pub const ALL: [Check; 5] = [Self::Count, Self::Width, Self::OutputRange, Self::Monotonic, Self::MatchesGenerated];

    pub fn message(self) -> &'static str {
        match self {
            Self::Count => "Entry count differs from domain",
            Self::Width => "Code width differs from total bits",
            Self::OutputRange => "Output code above maximum",
            Self::Monotonic => "Output decreases along domain",
            Self::MatchesGenerated => "Entry differs from generated",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableReport {
    pub entries: usize,
    pub expected_entries: usize,
    failures: [usize; 5],
    /// Index of the first entry that differs from a fresh generation.
    pub first_mismatch: Option<usize>,
}

impl TableReport {
    pub fn failures(&self, check: Check) -> usize {
        self.failures[check as usize]
    }

    pub fn total_failures(&self) -> usize {
        self.failures.iter().sum()
    }

    pub fn is_valid(&self) -> bool {
        self.total_failures() == 0
    }

    pub fn display(&self) {
        println!("Entries                : {}", ansi(self.entries, 31));
        println!("Expected Entries       : {}", ansi(self.expected_entries, 31));

        if self.is_valid() {
            println!("{}", pass("No invalid entries!"));
            return;
        }

        println!();
        println!("{}", fail("ERRORS:"));
        for check in Check::ALL {
            println!("{: <35} : {}", check.message(), self.failures(check));
        }

        if let Some(idx) = self.first_mismatch {
            println!("First mismatch at line {}", idx + 1);
        }

        println!("--------------------------------");
        println!("Total errors: {}", self.total_failures());
    }
}

/// Checks a (typically reloaded) table against what `config` describes.
pub fn check_table(table: &LookupTable, config: &GeneratorConfig) -> io::Result<TableReport> {
    let expected = generate_table(config)?;

    let mut report = TableReport {
        entries: table.len(),
        expected_entries: expected.len(),
        failures: [0; 5],
        first_mismatch: None,
    };

    let mut flag = |check: Check| report.failures[check as usize] += 1;

    if table.len() != expected.len() {
        flag(Check::Count);
    }

    let mut prev: Option<u32> = None;
    for entry in table.entries() {
        if entry.input.width() != config.total_bits || entry.output.width() != config.total_bits {
            flag(Check::Width);
        }

        if entry.output.unsigned() > config.max_output() {
            flag(Check::OutputRange);
        }

        let value = entry.output.unsigned();
        if prev.is_some_and(|prev| value < prev) {
            flag(Check::Monotonic);
        }
        prev = Some(value);
    }

    let mut first_mismatch: Option<usize> = None;
    for (idx, (got, want)) in table.entries().iter().zip(expected.entries()).enumerate() {
        if got != want {
            flag(Check::MatchesGenerated);
            first_mismatch.get_or_insert(idx);
        }
    }

    report.first_mismatch = first_mismatch;

    Ok(report)
}
