use std::{fmt, io, str::FromStr};

use crate::activation::sigmoid;

/// What happens to a scaled input that does not fit in `total_bits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saturation {
    /// Clamp to the signed two's complement range `[-2^(n-1), 2^(n-1) - 1]`.
    Clamp,
    /// Keep the low `n` bits of the two's complement representation.
    Wrap,
}

/// Multiplier applied to a sigmoid output before truncation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputScale {
    /// `2^fractional_bits`
    Full,
    /// `2^fractional_bits - 1`, leaves headroom below the sign bit.
    Headroom,
}

impl OutputScale {
    pub fn multiplier(self, fractional_bits: u32) -> f64 {
        let full = pow2(fractional_bits);
        match self {
            Self::Full => full,
            Self::Headroom => full - 1.0,
        }
    }
}

/// A fixed-width binary code, most significant bit first when displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Code {
    bits: u32,
    width: u32,
}

impl Code {
    /// # Panics
    ///
    /// Panics if `width` is not within `1..=32`.
    pub fn new(bits: u32, width: u32) -> Self {
        assert!((1..=32).contains(&width), "Code width must be within 1..=32!");
        Self { bits: bits & mask(width) as u32, width }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn unsigned(&self) -> u32 {
        self.bits
    }

    /// Interprets the code as two's complement.
    pub fn signed(&self) -> i64 {
        let bits = i64::from(self.bits);
        if bits >> (self.width - 1) & 1 == 1 {
            bits - (1i64 << self.width)
        } else {
            bits
        }
    }

    pub fn decode_unsigned(&self, fractional_bits: u32) -> f64 {
        f64::from(self.bits) / pow2(fractional_bits)
    }

    pub fn decode_signed(&self, fractional_bits: u32) -> f64 {
        self.signed() as f64 / pow2(fractional_bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.width as usize)
    }
}

impl FromStr for Code {
    type Err = io::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |msg: String| io::Error::new(io::ErrorKind::InvalidData, msg);

        if s.is_empty() || s.len() > 32 {
            return Err(invalid(format!("Binary code \"{s}\" must be 1 to 32 digits wide!")));
        }

        if !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(invalid(format!("Binary code \"{s}\" contains a non-binary digit!")));
        }

        let bits = u32::from_str_radix(s, 2).map_err(|e| invalid(format!("Binary code \"{s}\": {e}")))?;

        Ok(Self::new(bits, s.len() as u32))
    }
}

pub(crate) fn pow2(bits: u32) -> f64 {
    f64::from(bits).exp2()
}

fn mask(width: u32) -> i64 {
    (1i64 << width) - 1
}

/// Scales `x` by `2^fractional_bits`, truncates toward zero and fits the
/// result into `total_bits` according to `saturation`.
///
/// Out of range inputs never fail, they are clamped or wrapped.
///
/// # Panics
///
/// Panics if `total_bits` is not within `1..=32`, see [`GeneratorConfig::validate`].
///
/// [`GeneratorConfig::validate`]: crate::config::GeneratorConfig::validate
pub fn quantise_input(x: f64, total_bits: u32, fractional_bits: u32, saturation: Saturation) -> Code {
    assert!((1..=32).contains(&total_bits), "Total bits must be within 1..=32!");

    let scaled = (x * pow2(fractional_bits)).trunc();

    let bits = match saturation {
        Saturation::Clamp => {
            let max = (1i64 << (total_bits - 1)) - 1;
            (scaled as i64).clamp(-max - 1, max) & mask(total_bits)
        }
        // modular in f64, an i64 cast would saturate first
        Saturation::Wrap => scaled.rem_euclid(pow2(total_bits)) as i64,
    };

    Code::new(bits as u32, total_bits)
}

/// Evaluates `sigmoid(x)`, scales it, truncates toward zero and clamps to
/// `[0, 2^fractional_bits - 1]`.
///
/// # Panics
///
/// Panics if `total_bits` is not within `1..=32`.
pub fn quantise_sigmoid_output(x: f64, fractional_bits: u32, scale: OutputScale, total_bits: u32) -> Code {
    let scaled = (sigmoid(x) * scale.multiplier(fractional_bits)).trunc() as i64;
    let max = mask(fractional_bits);

    Code::new(scaled.clamp(0, max) as u32, total_bits)
}
