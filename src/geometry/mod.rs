mod line_2d;
mod pose_2d;
mod vector2;

pub use line_2d::Line2D;
pub use pose_2d::Pose2D;
pub use vector2::Vector2;

use std::str::FromStr;

use crate::error::ParseError;

/// Parses a parenthesised, comma-separated tuple such as `"(1, 2.5)"`.
///
/// `names` labels each component for error reporting; its length fixes the
/// expected arity.
pub(crate) fn parse_tuple<T: FromStr, const N: usize>(
    s: &str,
    names: [&'static str; N],
) -> Result<[T; N], ParseError> {
    let inner = s
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ParseError::Malformed(format!("expected parenthesised tuple, got {s:?}")))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ParseError::Malformed(format!(
            "expected {N} components, got {}",
            parts.len()
        )));
    }

    let values = names
        .iter()
        .zip(parts)
        .map(|(&component, part)| {
            part.parse::<T>().map_err(|_| ParseError::Component {
                component,
                value: part.to_string(),
            })
        })
        .collect::<Result<Vec<T>, ParseError>>()?;

    values
        .try_into()
        .map_err(|_| ParseError::Malformed(format!("expected {N} components")))
}
