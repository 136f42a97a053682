use clap::{Arg, Command, builder::ValueParser};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Accepts a named level or a bare count (0-5), both map to the `-v` scale.
fn parse_level(level: &str) -> Result<u8, String> {
    match level.to_lowercase().as_str() {
        "error" => Ok(0),
        "warn" => Ok(1),
        "info" => Ok(2),
        "debug" => Ok(3),
        "trace" => Ok(4),
        other => match other.parse::<u8>() {
            Ok(count) if count <= 5 => Ok(count),
            _ => Err(format!("invalid log level: {level}")),
        },
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
            .env("ALIRO_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(ValueParser::from(|level: &str| parse_level(level))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_levels_map_to_counts() {
        assert_eq!(parse_level("error"), Ok(0));
        assert_eq!(parse_level("WARN"), Ok(1));
        assert_eq!(parse_level("Info"), Ok(2));
        assert_eq!(parse_level("debug"), Ok(3));
        assert_eq!(parse_level("trace"), Ok(4));
    }

    #[test]
    fn numeric_levels_pass_through() {
        assert_eq!(parse_level("0"), Ok(0));
        assert_eq!(parse_level("5"), Ok(5));
        assert!(parse_level("6").is_err());
    }

    #[test]
    fn unknown_levels_rejected() {
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("").is_err());
    }
}
