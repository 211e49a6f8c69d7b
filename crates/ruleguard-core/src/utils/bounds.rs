use crate::utils::coercion::numeric_str;

/// `min` or `min,max` bounds taken from a rule argument such as `"10,20"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: Option<f64>,
}

impl Bounds {
    /// Parses the raw argument. Parts after the second comma are ignored and
    /// an empty `max` means no upper bound.
    pub fn parse(argument: &str) -> Option<Self> {
        let mut parts = argument.split(',');
        let min = numeric_str(parts.next()?)?;
        let max = match parts.next().map(str::trim) {
            None | Some("") => None,
            Some(m) => Some(numeric_str(m)?),
        };
        Some(Self { min, max })
    }

    pub fn contains(&self, n: f64) -> bool {
        n >= self.min && self.max.is_none_or(|max| n <= max)
    }
}
