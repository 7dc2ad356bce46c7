use serde_json::Value;

use crate::config::PayloadLimits;

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Body too large: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },
    #[error("Body nested too deep: {depth} levels (max: {max})")]
    TooDeep { depth: usize, max: usize },
    #[error("String too long: {length} bytes (max: {max})")]
    StringTooLong { length: usize, max: usize },
    #[error("Array too large: {length} elements (max: {max})")]
    ArrayTooLarge { length: usize, max: usize },
    #[error("Object has too many keys: {count} (max: {max})")]
    TooManyKeys { count: usize, max: usize },
    #[error("Body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parses inbound event bodies while refusing JSON bombs.
#[derive(Clone, Debug, Default)]
pub struct BoundedJsonParser {
    limits: PayloadLimits,
}

impl BoundedJsonParser {
    pub fn new(limits: PayloadLimits) -> Self {
        Self { limits }
    }

    pub fn parse(&self, body: &[u8]) -> Result<Value, PayloadError> {
        if body.len() > self.limits.max_body_bytes {
            return Err(PayloadError::TooLarge {
                size: body.len(),
                max: self.limits.max_body_bytes,
            });
        }

        let value: Value = serde_json::from_slice(body)?;
        self.check(&value, 0)?;
        Ok(value)
    }

    fn check(&self, value: &Value, depth: usize) -> Result<(), PayloadError> {
        if depth > self.limits.max_depth {
            return Err(PayloadError::TooDeep {
                depth,
                max: self.limits.max_depth,
            });
        }

        match value {
            Value::String(s) => self.check_string(s),
            Value::Array(items) => {
                if items.len() > self.limits.max_array_length {
                    return Err(PayloadError::ArrayTooLarge {
                        length: items.len(),
                        max: self.limits.max_array_length,
                    });
                }
                items.iter().try_for_each(|item| self.check(item, depth + 1))
            }
            Value::Object(map) => {
                if map.len() > self.limits.max_object_keys {
                    return Err(PayloadError::TooManyKeys {
                        count: map.len(),
                        max: self.limits.max_object_keys,
                    });
                }
                for (key, item) in map {
                    self.check_string(key)?;
                    self.check(item, depth + 1)?;
                }
                Ok(())
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => Ok(()),
        }
    }

    fn check_string(&self, s: &str) -> Result<(), PayloadError> {
        if s.len() > self.limits.max_string_length {
            return Err(PayloadError::StringTooLong {
                length: s.len(),
                max: self.limits.max_string_length,
            });
        }
        Ok(())
    }
}
