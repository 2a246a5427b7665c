use core::str::FromStr;

use log::debug;

use crate::{Chronos, ParseError, DIGITS};

/// Controls how strings that are not exactly four hex digits are handled.
/// Short strings are always left-padded with zeros, so `"8"` is `0008`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Reject empty strings and strings longer than four characters.
    #[default]
    Strict,
    /// Keep only the first four characters of longer strings and treat the
    /// empty string as `0000`.
    Truncate,
}

impl Chronos {
    /// Parse a chronos from a hex string using the strict policy.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Self::parse_with(s, ParsePolicy::Strict)
    }

    /// Parse a chronos from a hex string. Digits may be upper or lower case.
    /// Signs, whitespace and `0x` prefixes are not accepted.
    pub fn parse_with(s: &str, policy: ParsePolicy) -> Result<Self, ParseError> {
        let result = parse_digits(s, policy);
        if let Err(ref e) = result {
            debug!("rejected chronos string {:?}: {}", s, e);
        }
        result
    }
}

fn parse_digits(s: &str, policy: ParsePolicy) -> Result<Chronos, ParseError> {
    let len = s.chars().count();

    if policy == ParsePolicy::Strict {
        if len == 0 {
            return Err(ParseError::Empty);
        }
        if len > DIGITS {
            return Err(ParseError::TooLong(len));
        }
    }

    // missing leading digits are zeros, so accumulating only the digits that
    // are present gives the same value as parsing the padded string
    let mut moments: u16 = 0;
    for (position, character) in s.chars().take(DIGITS).enumerate() {
        let digit = character
            .to_digit(16)
            .ok_or(ParseError::InvalidDigit {
                character,
                position,
            })?;
        moments = (moments << 4) | digit as u16;
    }

    Ok(Chronos::from_moments(moments))
}

impl FromStr for Chronos {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Chronos::parse("0000"), Ok(Chronos::MIDNIGHT));
        assert_eq!(Chronos::parse("8000"), Ok(Chronos::NOON));
        assert_eq!(Chronos::parse("FFFF"), Ok(Chronos::MAX));
        assert_eq!(Chronos::parse("beef"), Ok(Chronos::from_moments(0xBEEF)));
        assert_eq!(Chronos::parse("BeEf"), Ok(Chronos::from_moments(0xBEEF)));
        assert_eq!("1234".parse::<Chronos>(), Ok(Chronos::from_moments(0x1234)));
    }

    #[test]
    // short strings are left-padded with zeros
    fn parse_padding() {
        assert_eq!(Chronos::parse("0"), Chronos::parse("0000"));
        assert_eq!(Chronos::parse("8"), Ok(Chronos::from_moments(0x8)));
        assert_eq!(Chronos::parse("80"), Ok(Chronos::from_moments(0x80)));
        assert_eq!(Chronos::parse("800"), Ok(Chronos::from_moments(0x800)));
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            Chronos::parse("GGGG"),
            Err(ParseError::InvalidDigit {
                character: 'G',
                position: 0
            })
        );
        assert_eq!(
            Chronos::parse("12x4"),
            Err(ParseError::InvalidDigit {
                character: 'x',
                position: 2
            })
        );
        assert!(Chronos::parse("+FF").is_err());
        assert!(Chronos::parse("-1").is_err());
        assert!(Chronos::parse(" 800").is_err());
        assert!(Chronos::parse("0x8").is_err());
        assert!(Chronos::parse("ü").is_err());
    }

    #[test]
    fn parse_strict_length() {
        assert_eq!(Chronos::parse(""), Err(ParseError::Empty));
        assert_eq!(Chronos::parse("80000"), Err(ParseError::TooLong(5)));
        assert_eq!(Chronos::parse("FFFFFFFF"), Err(ParseError::TooLong(8)));
    }

    #[test]
    // legacy behavior keeps the leading four characters
    fn parse_truncate() {
        let policy = ParsePolicy::Truncate;
        assert_eq!(Chronos::parse_with("", policy), Ok(Chronos::MIDNIGHT));
        assert_eq!(Chronos::parse_with("80000", policy), Ok(Chronos::NOON));
        assert_eq!(Chronos::parse_with("12345678", policy), Ok(Chronos::from_moments(0x1234)));
        assert_eq!(Chronos::parse_with("8000zz", policy), Ok(Chronos::NOON));
        assert_eq!(
            Chronos::parse_with("80z00", policy),
            Err(ParseError::InvalidDigit {
                character: 'z',
                position: 2
            })
        );
    }

    #[test]
    // length is measured in characters, not bytes
    fn parse_multibyte_length() {
        assert_eq!(
            Chronos::parse("ééé"),
            Err(ParseError::InvalidDigit {
                character: 'é',
                position: 0
            })
        );
        assert_eq!(Chronos::parse("ééééé"), Err(ParseError::TooLong(5)));
    }

    #[test]
    fn format_then_parse() {
        for moments in [0, 1, 0xA, 0xFF, 0x1000, 0x7FFF, 0x8000, 0xFFFE, 0xFFFF] {
            let c = Chronos::from_moments(moments);
            assert_eq!(c.to_string().parse(), Ok(c));
        }
    }

    #[test]
    fn default_policy() {
        assert_eq!(ParsePolicy::default(), ParsePolicy::Strict);
    }
}
