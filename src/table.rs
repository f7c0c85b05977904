use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{config::GeneratorConfig, fixed::Code};

/// One `case` arm: input code selects output code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableEntry {
    pub input: Code,
    pub output: Code,
}

impl fmt::Display for TableEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}'b{} : output_data = {}'b{};",
            self.input.width(),
            self.input,
            self.output.width(),
            self.output
        )
    }
}

impl TableEntry {
    /// Parses exactly one line of the form `8'b00000000 : output_data = 8'b00010000;`.
    pub fn parse(line: &str) -> io::Result<Self> {
        let invalid = || io::Error::new(io::ErrorKind::InvalidData, format!("Malformed table line \"{line}\"!"));

        let (input, output) = line.split_once(" : output_data = ").ok_or_else(invalid)?;
        let output = output.strip_suffix(';').ok_or_else(invalid)?;

        Ok(Self {
            input: parse_sized_literal(input).ok_or_else(invalid)?,
            output: parse_sized_literal(output).ok_or_else(invalid)?,
        })
    }
}

/// Parses a sized binary literal `<width>'b<digits>` whose width matches its digit count.
fn parse_sized_literal(s: &str) -> Option<Code> {
    let (width, digits) = s.split_once("'b")?;
    let code = digits.parse::<Code>().ok()?;

    // compared as text so `08'b..` or `+8'b..` never match
    (width == code.width().to_string()).then_some(code)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: Vec<TableEntry>,
}

impl LookupTable {
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the table as the body of a Verilog `case` statement, one arm
    /// per line, no header or footer.
    pub fn write_case_table(&self, writer: &mut impl Write) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(writer, "{entry}")?;
        }

        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_case_table(&mut writer)?;
        writer.flush()
    }

    pub fn parse(text: &str) -> io::Result<Self> {
        let mut entries = Vec::new();

        for (line_no, line) in text.split_terminator('\n').enumerate() {
            let entry = TableEntry::parse(line)
                .map_err(|e| io::Error::new(e.kind(), format!("Line {}: {e}", line_no + 1)))?;
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Pairs each domain sample's real `x` with the decoded output code.
    ///
    /// The x axis comes from the domain, not from decoding the input codes.
    pub fn plot_points(&self, config: &GeneratorConfig) -> io::Result<Vec<(f64, f64)>> {
        if self.len() != config.domain.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Table has {} entries but the domain has {} samples!", self.len(), config.domain.len()),
            ));
        }

        let points = config
            .domain
            .samples()
            .zip(&self.entries)
            .map(|(sample, entry)| (sample.x, entry.output.decode_unsigned(config.output_fractional_bits)))
            .collect();

        Ok(points)
    }
}

impl FromIterator<TableEntry> for LookupTable {
    fn from_iter<I: IntoIterator<Item = TableEntry>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Quantises every domain sample, in order, into a table entry.
pub fn generate_table(config: &GeneratorConfig) -> io::Result<LookupTable> {
    config.validate()?;

    let table = config
        .domain
        .samples()
        .map(|sample| TableEntry { input: config.input_code(sample), output: config.output_code(sample) })
        .collect();

    Ok(table)
}

/// Generates the table and writes it to `path` as a case table.
pub fn create_sigmoid_lookup_table(config: &GeneratorConfig, path: impl AsRef<Path>) -> io::Result<LookupTable> {
    let table = generate_table(config)?;
    table.save(path)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(input: &str, output: &str) -> TableEntry {
        TableEntry { input: input.parse().unwrap(), output: output.parse().unwrap() }
    }

    #[test]
    fn entry_line_format() {
        assert_eq!(entry("11100000", "00001000").to_string(), "8'b11100000 : output_data = 8'b00001000;");
    }

    #[test]
    fn entry_parse_rejects_near_misses() {
        assert!(TableEntry::parse("8'b11100000 : output_data = 8'b00001000;").is_ok());

        for line in [
            "8'b11100000 : output_data = 8'b00001000",
            "8'b11100000 :  output_data = 8'b00001000;",
            "8'b11100000 : output_data = 8'b00001000; ",
            "8'b1110000 : output_data = 8'b00001000;",
            "8'B11100000 : output_data = 8'b00001000;",
            "8'b11100000 : output_data = 7'b00001000;",
            "'b11100000 : output_data = 8'b00001000;",
            "+8'b11100000 : output_data = 8'b00001000;",
            "08'b11100000 : output_data = 8'b00001000;",
            "8'b11100000 : output_data = 08'b00001000;",
            "",
        ] {
            assert!(TableEntry::parse(line).is_err(), "accepted {line:?}");
        }
    }

    #[test]
    fn write_case_table_has_no_header_or_footer() {
        let table = [entry("00000000", "00010000"), entry("00000001", "00010000")].into_iter().collect::<LookupTable>();

        let mut buf = Vec::new();
        table.write_case_table(&mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "8'b00000000 : output_data = 8'b00010000;\n8'b00000001 : output_data = 8'b00010000;\n"
        );
    }

    #[test]
    fn parse_reports_line_number() {
        let text = "8'b00000000 : output_data = 8'b00010000;\ngarbage\n";
        let err = LookupTable::parse(text).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("Line 2:"));
    }

    #[test]
    fn range_table_landmarks() {
        let table = generate_table(&GeneratorConfig::range()).unwrap();
        let lines = table.entries().iter().map(ToString::to_string).collect::<Vec<_>>();

        assert_eq!(lines.len(), 256);
        assert_eq!(lines[0], "8'b10000000 : output_data = 8'b00000000;");
        assert_eq!(lines[64], "8'b11000000 : output_data = 8'b00000011;");
        assert_eq!(lines[96], "8'b11100000 : output_data = 8'b00001000;");
        assert_eq!(lines[128], "8'b00000000 : output_data = 8'b00010000;");
        assert_eq!(lines[160], "8'b00100000 : output_data = 8'b00010111;");
        assert_eq!(lines[192], "8'b01000000 : output_data = 8'b00011100;");
        assert_eq!(lines[255], "8'b01111111 : output_data = 8'b00011111;");
    }

    #[test]
    fn counting_table_landmarks() {
        let table = generate_table(&GeneratorConfig::counting()).unwrap();
        let lines = table.entries().iter().map(ToString::to_string).collect::<Vec<_>>();

        assert_eq!(lines.len(), 120);
        assert_eq!(lines[0], "8'b11000100 : output_data = 8'b00000000;");
        assert_eq!(lines[60], "8'b00000000 : output_data = 8'b00111111;");
        assert_eq!(lines[70], "8'b00001010 : output_data = 8'b01011100;");
        assert_eq!(lines[119], "8'b00111011 : output_data = 8'b01111110;");
    }

    #[test]
    fn plot_points_use_domain_x() {
        let config = GeneratorConfig::range();
        let table = generate_table(&config).unwrap();
        let points = table.plot_points(&config).unwrap();

        assert_eq!(points.len(), 256);
        assert_eq!(points[0], (-4.0, 0.0));
        assert_eq!(points[128], (0.0, 0.5));
    }

    #[test]
    fn plot_points_reject_mismatched_domain() {
        let table = generate_table(&GeneratorConfig::counting()).unwrap();
        assert!(table.plot_points(&GeneratorConfig::range()).is_err());
    }
}
