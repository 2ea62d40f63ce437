//! Line-oriented input scripts for headless runs.

use std::{error::Error, fmt};

use outlands_core::MoveIntent;

/// Directional and action inputs applied during a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FrameInput {
    /// Directional inputs held during the tick.
    pub(crate) intent: MoveIntent,
    /// Whether the attack edge fired this tick.
    pub(crate) attack: bool,
    /// Whether the interact edge fired this tick.
    pub(crate) interact: bool,
}

/// Parses a script into per-tick inputs.
///
/// Each non-empty line reads `<ticks> [token]...` where tokens are `up`,
/// `down`, `left`, `right`, `attack`, `interact`, or `idle`. Lines starting
/// with `#` are comments.
pub(crate) fn parse(text: &str) -> Result<Vec<FrameInput>, ScriptError> {
    let mut frames = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let Some(count_token) = parts.next() else {
            continue;
        };
        let count: u64 = count_token.parse().map_err(|_| ScriptError::InvalidRepeat {
            line: index + 1,
            token: count_token.to_owned(),
        })?;

        let mut input = FrameInput::default();
        for token in parts {
            match token {
                "up" => input.intent.up = true,
                "down" => input.intent.down = true,
                "left" => input.intent.left = true,
                "right" => input.intent.right = true,
                "attack" => input.attack = true,
                "interact" => input.interact = true,
                "idle" => {}
                other => {
                    return Err(ScriptError::UnknownToken {
                        line: index + 1,
                        token: other.to_owned(),
                    })
                }
            }
        }

        for _ in 0..count {
            frames.push(input);
        }
    }
    Ok(frames)
}

/// Errors that can occur while parsing an input script.
#[derive(Debug)]
pub(crate) enum ScriptError {
    /// The tick count at the start of a line was not a number.
    InvalidRepeat {
        /// One-based line number of the offending line.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },
    /// A line contained an unrecognized input token.
    UnknownToken {
        /// One-based line number of the offending line.
        line: usize,
        /// The token that was not recognized.
        token: String,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRepeat { line, token } => {
                write!(f, "line {line}: tick count '{token}' is not a number")
            }
            Self::UnknownToken { line, token } => {
                write!(f, "line {line}: unknown input token '{token}'")
            }
        }
    }
}

impl Error for ScriptError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_repeat_counts() {
        let frames = parse("3 right\n1 attack\n").expect("script parses");
        assert_eq!(frames.len(), 4);
        assert!(frames[0].intent.right);
        assert!(!frames[0].attack);
        assert!(frames[3].attack);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let frames = parse("# warm up\n\n2 idle\n").expect("script parses");
        assert_eq!(frames, vec![FrameInput::default(); 2]);
    }

    #[test]
    fn combines_tokens_on_one_line() {
        let frames = parse("1 up right attack interact\n").expect("script parses");
        assert!(frames[0].intent.up);
        assert!(frames[0].intent.right);
        assert!(frames[0].attack);
        assert!(frames[0].interact);
    }

    #[test]
    fn rejects_non_numeric_repeat() {
        let error = parse("lots right\n").expect_err("repeat must be numeric");
        assert!(matches!(error, ScriptError::InvalidRepeat { line: 1, .. }));
    }

    #[test]
    fn rejects_unknown_tokens() {
        let error = parse("2 jump\n").expect_err("jump is not an input");
        assert!(matches!(error, ScriptError::UnknownToken { line: 1, .. }));
    }
}
