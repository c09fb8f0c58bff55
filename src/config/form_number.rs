use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A number typed into a form field.
///
/// Coercion is permissive and never fails: text that is not a number becomes
/// NaN and is forwarded as-is; the scheduler decides whether it is acceptable.
///
/// Wire form:
/// - finite integral values serialize as JSON integers (`4`, not `4.0`)
/// - finite fractional values serialize as JSON floats
/// - NaN and infinities serialize as `null`
#[derive(Debug, Clone, Copy)]
pub struct FormNumber(pub f64);

impl FormNumber {
    /// Coerces form text into a number.
    ///
    /// - blank (or whitespace-only) text is `0`
    /// - decimal and exponent notation (`12`, `-1.5`, `2e3`, `.5`)
    /// - `0x` / `0o` / `0b` prefixed integers
    /// - `Infinity`, `+Infinity`, `-Infinity`
    /// - anything else is NaN
    pub fn coerce(text: &str) -> FormNumber {
        let t = text.trim();
        if t.is_empty() {
            return FormNumber(0.0);
        }
        match t {
            "Infinity" | "+Infinity" => return FormNumber(f64::INFINITY),
            "-Infinity"              => return FormNumber(f64::NEG_INFINITY),
            _ => {}
        }

        let radix = match t.get(..2) {
            Some("0x") | Some("0X") => Some(16),
            Some("0o") | Some("0O") => Some(8),
            Some("0b") | Some("0B") => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return match u64::from_str_radix(&t[2..], radix) {
                Ok(v) => FormNumber(v as f64),
                Err(_) => FormNumber(f64::NAN),
            };
        }

        // Rust's float grammar also accepts "inf"/"nan"/"infinity"; a form does not.
        let numeric_chars = t
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
        if !numeric_chars {
            return FormNumber(f64::NAN);
        }
        FormNumber(t.parse::<f64>().unwrap_or(f64::NAN))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// The value as a non-negative whole count, if it is one.
    pub fn as_count(self) -> Option<u64> {
        let v = self.0;
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 {
            Some(v as u64)
        } else {
            None
        }
    }
}

impl From<f64> for FormNumber {
    fn from(v: f64) -> Self {
        FormNumber(v)
    }
}

/// NaN compares equal to NaN so that two encodings of the same form compare
/// equal even when a field is malformed.
impl PartialEq for FormNumber {
    fn eq(&self, other: &Self) -> bool {
        (self.0.is_nan() && other.0.is_nan()) || self.0 == other.0
    }
}

impl Eq for FormNumber {}

impl Serialize for FormNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if !v.is_finite() {
            serializer.serialize_none()
        } else if v.fract() == 0.0 && v.abs() <= i64::MAX as f64 {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

impl<'de> Deserialize<'de> for FormNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = Option::<f64>::deserialize(deserializer)?;
        Ok(FormNumber(v.unwrap_or(f64::NAN)))
    }
}
