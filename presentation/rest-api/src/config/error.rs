use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_value: {key}={value}")]
    InvalidValue { key: String, value: String },
}

/// Reads `key` from the environment, falling back to `default` when unset.
pub fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    parse_or(key, std::env::var(key).ok(), default)
}

/// Parses an optional raw setting; a present but unparsable value is an error
/// rather than a silent fallback.
pub fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_when_value_missing() {
        let value: u32 = parse_or("DATABASE_MAX_CONNECTIONS", None, 5).unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn should_parse_present_value() {
        let value: u32 =
            parse_or("DATABASE_MAX_CONNECTIONS", Some(" 12 ".to_string()), 5).unwrap();
        assert_eq!(value, 12);
    }

    #[test]
    fn should_reject_unparsable_value() {
        let result: Result<u32, _> =
            parse_or("DATABASE_MAX_CONNECTIONS", Some("many".to_string()), 5);

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "config.invalid_value: DATABASE_MAX_CONNECTIONS=many"
        );
    }
}
