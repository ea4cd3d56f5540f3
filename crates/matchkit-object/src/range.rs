use crate::exception::Exception;
use crate::value::Value;
use std::cmp::Ordering;

/// A span between two values. `Nil` bounds make the range open on that side.
#[derive(Clone)]
pub struct Range {
    start: Value,
    end: Value,
    exclusive: bool,
}

impl Range {
    /// `start..=end`
    pub fn new(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            exclusive: false,
        }
    }

    /// `start..end`
    pub fn exclusive(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            exclusive: true,
        }
    }

    pub fn start(&self) -> &Value {
        &self.start
    }

    pub fn end(&self) -> &Value {
        &self.end
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Whether `value` lies between the bounds. Values that cannot be
    /// ordered against the bounds are not covered.
    pub fn cover(&self, value: &Value) -> bool {
        if !matches!(self.start, Value::Nil) {
            match compare(&self.start, value) {
                Some(Ordering::Less | Ordering::Equal) => {}
                _ => return false,
            }
        }
        if matches!(self.end, Value::Nil) {
            return true;
        }
        match compare(value, &self.end) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => !self.exclusive,
            _ => false,
        }
    }

    pub fn equals(&self, other: &Range) -> Result<bool, Exception> {
        Ok(self.exclusive == other.exclusive
            && self.start.equals(&other.start)?
            && self.end.equals(&other.end)?)
    }

    pub(crate) fn inspect(&self) -> Result<String, Exception> {
        let bound = |v: &Value| -> Result<String, Exception> {
            match v {
                Value::Nil => Ok(String::new()),
                v => v.inspect_string(),
            }
        };
        let dots = if self.exclusive { "..." } else { ".." };
        Ok(format!("{}{}{}", bound(&self.start)?, dots, bound(&self.end)?))
    }
}

/// Ordering between numbers (across integer and float) or between strings.
pub(crate) fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Integer(i), Value::Float(f)) => compare_integer_float(*i, *f),
        (Value::Float(f), Value::Integer(i)) => compare_integer_float(*i, *f).map(Ordering::reverse),
        _ => None,
    }
}

/// Exact ordering of an integer against a float, without rounding the
/// integer. NaN has no ordering.
pub(crate) fn compare_integer_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, the first float above every i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.is_nan() {
        return None;
    }
    if f >= LIMIT {
        return Some(Ordering::Less);
    }
    if f < -LIMIT {
        return Some(Ordering::Greater);
    }
    match i.cmp(&(f.trunc() as i64)) {
        Ordering::Equal if f.fract() > 0.0 => Some(Ordering::Less),
        Ordering::Equal if f.fract() < 0.0 => Some(Ordering::Greater),
        ordering => Some(ordering),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_cover() {
        let range = Range::new(24, 42);
        assert!(range.cover(&Value::Integer(24)));
        assert!(range.cover(&Value::Integer(42)));
        assert!(range.cover(&Value::Float(24.0)));
        assert!(!range.cover(&Value::Integer(23)));
        assert!(!range.cover(&Value::Integer(43)));
        assert!(!range.cover(&Value::string("30")));
        assert!(!range.cover(&Value::Nil));
    }

    #[test]
    fn test_cover_is_exact_beyond_float_precision() {
        let big: i64 = 9_007_199_254_740_993;
        let range = Range::new(big, big + 10);
        assert!(!range.cover(&Value::Integer(big - 1)));
        assert!(range.cover(&Value::Integer(big)));
        assert!(!range.cover(&Value::Float(9_007_199_254_740_992.0)));
        assert!(!Range::new(0, 10).cover(&Value::Float(f64::NAN)));
        assert!(Range::new(Value::Nil, 0).cover(&Value::Float(-1.0e300)));
    }

    #[test]
    fn test_compare_integer_float() {
        assert_eq!(compare_integer_float(3, 3.0), Some(Ordering::Equal));
        assert_eq!(compare_integer_float(3, 3.5), Some(Ordering::Less));
        assert_eq!(compare_integer_float(-3, -3.5), Some(Ordering::Greater));
        assert_eq!(compare_integer_float(i64::MAX, 9.3e18), Some(Ordering::Less));
        assert_eq!(compare_integer_float(i64::MIN, -1.0e19), Some(Ordering::Greater));
        assert_eq!(compare_integer_float(0, f64::INFINITY), Some(Ordering::Less));
        assert_eq!(compare_integer_float(0, f64::NAN), None);
    }

    #[test]
    fn test_exclusive_cover() {
        let range = Range::exclusive(1, 10);
        assert!(range.cover(&Value::Integer(9)));
        assert!(!range.cover(&Value::Integer(10)));
    }

    #[test]
    fn test_open_ended() {
        let range = Range::new(1, Value::Nil);
        assert!(range.cover(&Value::Integer(1_000_000)));
        assert!(!range.cover(&Value::Integer(0)));
        assert_eq!(range.inspect().unwrap(), "1..");
    }

    #[test]
    fn test_string_range() {
        let range = Range::new("a", "m");
        assert!(range.cover(&Value::string("foo")));
        assert!(!range.cover(&Value::string("zoo")));
        assert_eq!(range.inspect().unwrap(), "\"a\"..\"m\"");
    }
}
