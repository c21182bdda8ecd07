//! Copies that report allocation failure instead of aborting the host
//! process.
use crate::errors::DomainError;

pub fn try_owned(value: &str) -> Result<String, DomainError> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(value.len())
        .map_err(|_| DomainError::AllocationFailed)?;
    owned.push_str(value);
    Ok(owned)
}

/// One-element vector.
pub fn try_single<T>(value: T) -> Result<Vec<T>, DomainError> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(1)
        .map_err(|_| DomainError::AllocationFailed)?;
    values.push(value);
    Ok(values)
}

/// Longest valid UTF-8 prefix of `bytes`.
pub fn utf8_prefix(bytes: &[u8]) -> &str {
    match std::str::from_utf8(bytes) {
        Ok(value) => value,
        Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_owned_copies() {
        assert_eq!(try_owned("redis-master").unwrap(), "redis-master");
        assert_eq!(try_owned("").unwrap(), "");
    }

    #[test]
    fn test_try_single() {
        assert_eq!(try_single(7u8).unwrap(), vec![7]);
    }

    #[test]
    fn test_utf8_prefix_stops_at_first_invalid_byte() {
        assert_eq!(utf8_prefix(b"redis"), "redis");
        assert_eq!(utf8_prefix(b"redis-\xffmaster"), "redis-");
        assert_eq!(utf8_prefix(b"\xff"), "");
    }
}
