use std::io;

use crate::{
    domain::{DomainSpec, Sample},
    fixed::{quantise_input, quantise_sigmoid_output, Code, OutputScale, Saturation},
    logger::ansi,
};

/// Caption and axis descriptions of the table plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotLabels {
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
}

/// Everything that distinguishes one table generator from another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Width of every emitted code.
    pub total_bits: u32,
    /// Fractional bits applied to a sample's `raw` value.
    pub input_fractional_bits: u32,
    /// Fractional bits of the output code, also its decode divisor.
    pub output_fractional_bits: u32,
    pub output_scale: OutputScale,
    pub domain: DomainSpec,
    pub saturation: Saturation,
    /// Pin the plotted y axis to `[0, 1]` instead of fitting the data.
    pub plot_unit_range: bool,
    pub plot_labels: PlotLabels,
}

impl GeneratorConfig {
    /// Integer sweep over `[-60, 60)` read as tenths, inputs clamped to
    /// signed 8 bit, outputs scaled by `2^7 - 1`.
    pub fn counting() -> Self {
        Self {
            total_bits: 8,
            input_fractional_bits: 0,
            output_fractional_bits: 7,
            output_scale: OutputScale::Headroom,
            domain: DomainSpec::Counting { n: 10 },
            saturation: Saturation::Clamp,
            plot_unit_range: false,
            plot_labels: PlotLabels {
                title: "Sigmoid function estimation",
                x_desc: "Input value",
                y_desc: "Output value",
            },
        }
    }

    /// Q3.5 sweep over every 8 bit input code, outputs in Q0.5.
    pub fn range() -> Self {
        Self {
            total_bits: 8,
            input_fractional_bits: 5,
            output_fractional_bits: 5,
            output_scale: OutputScale::Full,
            domain: DomainSpec::Range { start: -4.0, end: 3.96875, step: 0.03125 },
            saturation: Saturation::Wrap,
            plot_unit_range: true,
            plot_labels: PlotLabels {
                title: "Sigmoid Lookup Table",
                x_desc: "Input (Fixed Point)",
                y_desc: "Sigmoid Output (Fixed Point)",
            },
        }
    }

    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: String| Err(io::Error::new(io::ErrorKind::InvalidInput, msg));

        if !(1..=32).contains(&self.total_bits) {
            return invalid(format!("Total bits must be within 1..=32, got {}!", self.total_bits));
        }

        if self.input_fractional_bits > self.total_bits || self.output_fractional_bits > self.total_bits {
            return invalid(format!(
                "Fractional bits ({}, {}) cannot exceed total bits ({})!",
                self.input_fractional_bits, self.output_fractional_bits, self.total_bits
            ));
        }

        match self.domain {
            DomainSpec::Counting { n } => {
                if n == 0 {
                    return invalid("Counting domain divisor must be non-zero!".to_string());
                }
            }
            DomainSpec::Range { start, end, step } => {
                if !(start.is_finite() && end.is_finite()) {
                    return invalid(format!("Range bounds must be finite, got [{start}, {end}]!"));
                }

                if !step.is_finite() || step <= 0.0 {
                    return invalid(format!("Range step must be positive, got {step}!"));
                }

                match self.domain.range_steps() {
                    Some(steps) if steps < usize::MAX as f64 => {}
                    _ => return invalid(format!("Range [{start}, {end}] step {step} has too many samples!")),
                }
            }
        }

        Ok(())
    }

    pub fn input_code(&self, sample: Sample) -> Code {
        quantise_input(sample.raw, self.total_bits, self.input_fractional_bits, self.saturation)
    }

    pub fn output_code(&self, sample: Sample) -> Code {
        quantise_sigmoid_output(sample.x, self.output_fractional_bits, self.output_scale, self.total_bits)
    }

    /// Largest representable output code value.
    pub fn max_output(&self) -> u32 {
        ((1u64 << self.output_fractional_bits) - 1) as u32
    }

    pub fn display(&self) {
        println!("Total Bits             : {}", ansi(self.total_bits, 31));
        println!("Input Fractional Bits  : {}", ansi(self.input_fractional_bits, 31));
        println!("Output Fractional Bits : {}", ansi(self.output_fractional_bits, 31));
        println!("Output Scale           : {}", ansi(format!("{:?}", self.output_scale), 31));
        println!("Saturation             : {}", ansi(format!("{:?}", self.saturation), 31));
        println!("Domain                 : {}", ansi(self.domain, 31));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        GeneratorConfig::counting().validate().unwrap();
        GeneratorConfig::range().validate().unwrap();
    }

    #[test]
    fn rejects_bad_step() {
        let mut config = GeneratorConfig::range();
        config.domain = DomainSpec::Range { start: -4.0, end: 4.0, step: 0.0 };
        assert_eq!(config.validate().unwrap_err().kind(), io::ErrorKind::InvalidInput);

        config.domain = DomainSpec::Range { start: -4.0, end: 4.0, step: f64::NAN };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_uncountable_range() {
        let mut config = GeneratorConfig::range();

        config.domain = DomainSpec::Range { start: -1e308, end: 1e308, step: 1.0 };
        assert_eq!(config.validate().unwrap_err().kind(), io::ErrorKind::InvalidInput);

        config.domain = DomainSpec::Range { start: 0.0, end: 1e30, step: 1.0 };
        assert!(config.validate().is_err());

        config.domain = DomainSpec::Range { start: 0.0, end: 1e6, step: 1.0 };
        assert!(config.validate().is_ok());
        assert_eq!(config.domain.len(), 1_000_001);
    }

    #[test]
    fn rejects_bad_widths() {
        let mut config = GeneratorConfig::range();
        config.total_bits = 0;
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::range();
        config.output_fractional_bits = 9;
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::counting();
        config.domain = DomainSpec::Counting { n: 0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn presets_carry_their_own_plot_labels() {
        assert_eq!(GeneratorConfig::counting().plot_labels.title, "Sigmoid function estimation");
        assert_eq!(GeneratorConfig::counting().plot_labels.x_desc, "Input value");
        assert_eq!(GeneratorConfig::range().plot_labels.title, "Sigmoid Lookup Table");
        assert_eq!(GeneratorConfig::range().plot_labels.y_desc, "Sigmoid Output (Fixed Point)");
    }

    #[test]
    fn max_output_follows_fractional_bits() {
        assert_eq!(GeneratorConfig::range().max_output(), 31);
        assert_eq!(GeneratorConfig::counting().max_output(), 127);
    }
}
