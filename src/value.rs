use std::fmt;

use crate::{Point, Size};

/// A geometry input that is either fixed or produced on demand.
///
/// `Computed` producers are called every time the value is read and their
/// result is never stored, so a producer reading e.g. the current window
/// size stays in sync without any notification.
pub enum Value<T> {
    Literal(T),
    Computed(Box<dyn Fn() -> T>),
}

impl<T: Clone> Value<T> {
    /// Wrap a zero-argument producer.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Value::Computed(Box::new(f))
    }

    /// The current value: the literal, or a fresh call to the producer.
    #[inline]
    pub fn get(&self) -> T {
        match self {
            Value::Literal(v) => v.clone(),
            Value::Computed(f) => f(),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Value::Computed(_))
    }
}

impl<T> From<T> for Value<T> {
    fn from(v: T) -> Self {
        Value::Literal(v)
    }
}

impl From<(i32, i32)> for Value<Point> {
    fn from(p: (i32, i32)) -> Self {
        Value::Literal(p.into())
    }
}

impl From<(i32, i32)> for Value<Size> {
    fn from(s: (i32, i32)) -> Self {
        Value::Literal(s.into())
    }
}

impl From<&str> for Value<String> {
    fn from(s: &str) -> Self {
        Value::Literal(s.to_string())
    }
}

impl<T: fmt::Debug> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Value::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn literal_is_returned_as_is() {
        let v: Value<i32> = 7.into();
        assert_eq!(v.get(), 7);
        assert!(!v.is_computed());
    }

    #[test]
    fn computed_is_called_on_every_read() {
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let v = Value::computed(move || {
            c.set(c.get() + 1);
            c.get()
        });

        assert_eq!(v.get(), 1);
        assert_eq!(v.get(), 2);
        assert_eq!(calls.get(), 2);
    }
}
