//! Polynomials evaluated with Horner's method

use std::borrow::Cow;
use std::fmt;

use super::check_argument;
use crate::Result;

/// Polynomial with real coefficients, stored highest degree first
///
/// # Examples
///
/// ```rust
/// use skychart::math::Polynomial;
///
/// // 2x^2 - x + 3
/// let p = Polynomial::of(vec![2.0, -1.0, 3.0]).unwrap();
/// assert_eq!(p.at(2.0), 9.0);
/// assert_eq!(p.to_string(), "2x^2-x+3");
/// ```
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Cow<'static, [f64]>,
}

impl Polynomial {
    /// Create a polynomial from coefficients ordered from the highest degree down.
    ///
    /// Fails if there are no coefficients or the leading one is zero.
    pub fn of(coefficients: impl Into<Vec<f64>>) -> Result<Self> {
        let coefficients = coefficients.into();
        check_argument(
            coefficients.first().is_some_and(|&c| c != 0.0),
            || "Polynomial needs a non-zero leading coefficient".to_string(),
        )?;
        Ok(Self {
            coefficients: Cow::Owned(coefficients),
        })
    }

    /// Wrap a constant coefficient table whose leading entry is non-zero
    pub(crate) const fn from_static(coefficients: &'static [f64]) -> Self {
        Self {
            coefficients: Cow::Borrowed(coefficients),
        }
    }

    /// Degree of the polynomial
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate the polynomial at `x`
    pub fn at(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |value, &coefficient| value * x + coefficient)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;
        for (i, &coefficient) in self.coefficients.iter().enumerate() {
            if coefficient == 0.0 {
                continue;
            }
            let power = degree - i;

            if !first && coefficient > 0.0 {
                write!(f, "+")?;
            }
            if power > 0 && coefficient == -1.0 {
                write!(f, "-")?;
            } else if coefficient != 1.0 || power == 0 {
                write!(f, "{}", coefficient)?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", power)?,
            }
            first = false;
        }
        Ok(())
    }
}
