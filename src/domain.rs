use std::fmt;

/// One point of the table domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Value handed to the input quantiser.
    pub raw: f64,
    /// Sigmoid pre-image.
    pub x: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DomainSpec {
    /// Integers `i` in `[-6n, 6n)`, each standing for the real input `i / n`.
    /// The integer itself is what gets quantised on the input side.
    Counting { n: u32 },
    /// `start, start + step, ...` for `trunc((end - start) / step) + 1` samples.
    Range { start: f64, end: f64, step: f64 },
}

impl DomainSpec {
    pub fn len(&self) -> usize {
        match *self {
            Self::Counting { n } => 12 * n as usize,
            Self::Range { .. } => match self.range_steps() {
                Some(steps) if steps < 0.0 => 0,
                Some(steps) => (steps as usize).saturating_add(1),
                None => usize::MAX,
            },
        }
    }

    /// `trunc((end - start) / step)` for a range, `None` if it is not finite.
    pub fn range_steps(&self) -> Option<f64> {
        match *self {
            Self::Counting { .. } => None,
            Self::Range { start, end, step } => Some(((end - start) / step).trunc()).filter(|s| s.is_finite()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sample(&self, idx: usize) -> Sample {
        match *self {
            Self::Counting { n } => {
                let i = idx as i64 - 6 * i64::from(n);
                Sample { raw: i as f64, x: i as f64 / f64::from(n) }
            }
            Self::Range { start, step, .. } => {
                let x = start + idx as f64 * step;
                Sample { raw: x, x }
            }
        }
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).map(|idx| self.sample(idx))
    }
}

impl fmt::Display for DomainSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Counting { n } => write!(f, "i / {n} for i in [{}, {})", -6 * i64::from(*n), 6 * i64::from(*n)),
            Self::Range { start, end, step } => write!(f, "[{start}, {end}] step {step}"),
        }
    }
}
