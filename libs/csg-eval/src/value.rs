use std::fmt;

/// A runtime value handed to operations.
///
/// The scene format is dynamically typed with this small value set;
/// vectors come from array literals.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undef,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Vector(Vec<Value>),
}

impl Value {
    /// Converts the value to a float.
    /// - Integer -> n as f64
    /// - Float -> n
    /// - Boolean(true) -> 1.0, Boolean(false) -> 0.0
    /// - Undef, Vector -> None
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Undef => None,
            Value::Vector(_) => None,
        }
    }

    /// The elements, if the value is a vector.
    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Value::Vector(items) => Some(items),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Vector(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => write!(f, "undef"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{:?}", n),
            Value::Vector(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_f64() {
        assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Boolean(true).as_f64(), Some(1.0));
        assert_eq!(Value::Undef.as_f64(), None);
    }

    #[test]
    fn test_display_matches_source_syntax() {
        assert_eq!(Value::Undef.to_string(), "undef");
        assert_eq!(Value::Integer(-2).to_string(), "-2");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        let v = Value::Vector(vec![Value::Integer(1), Value::Boolean(false)]);
        assert_eq!(v.to_string(), "[1, false]");
    }
}
