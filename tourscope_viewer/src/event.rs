// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::str::FromStr;

use kurbo::Point;
use thiserror::Error;

/// Input the viewer reacts to: the control row buttons and pointer gestures
/// on the main surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewerEvent {
    /// Zoom-in button.
    ZoomIn,
    /// Zoom-out button.
    ZoomOut,
    /// Reset button.
    Reset,
    /// Show/Hide Mini Map button.
    ToggleMinimap,
    /// Force the overview on.
    ShowMinimap,
    /// Force the overview off.
    HideMinimap,
    /// Primary button pressed at a surface position.
    PointerDown(Point),
    /// Pointer moved to a surface position.
    PointerMove(Point),
    /// Primary button released.
    PointerUp,
    /// Pointer left the surface.
    PointerLeave,
}

/// Failure parsing a [`ViewerEvent`] or an event script.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    /// The token names no event.
    #[error("unknown event `{0}`")]
    UnknownEvent(String),
    /// A pointer event carried unusable coordinates.
    #[error("invalid position `{0}`, expected `x,y`")]
    BadPosition(String),
    /// A script token failed to parse.
    #[error("line {line}: {source}")]
    AtLine {
        /// One-based script line.
        line: usize,
        /// What went wrong on that line.
        source: Box<ScriptError>,
    },
}

fn parse_position(text: &str) -> Result<Point, ScriptError> {
    let bad = || ScriptError::BadPosition(text.to_owned());
    let (x, y) = text.split_once(',').ok_or_else(bad)?;
    let x: f64 = x.trim().parse().map_err(|_| bad())?;
    let y: f64 = y.trim().parse().map_err(|_| bad())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(bad());
    }
    Ok(Point::new(x, y))
}

impl FromStr for ViewerEvent {
    type Err = ScriptError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let event = match token {
            "zoom-in" => Self::ZoomIn,
            "zoom-out" => Self::ZoomOut,
            "reset" => Self::Reset,
            "toggle-minimap" => Self::ToggleMinimap,
            "show-minimap" => Self::ShowMinimap,
            "hide-minimap" => Self::HideMinimap,
            "up" => Self::PointerUp,
            "leave" => Self::PointerLeave,
            _ => match token.split_once(':') {
                Some(("down", pos)) => Self::PointerDown(parse_position(pos)?),
                Some(("move", pos)) => Self::PointerMove(parse_position(pos)?),
                _ => return Err(ScriptError::UnknownEvent(token.to_owned())),
            },
        };
        Ok(event)
    }
}

impl fmt::Display for ViewerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomIn => f.write_str("zoom-in"),
            Self::ZoomOut => f.write_str("zoom-out"),
            Self::Reset => f.write_str("reset"),
            Self::ToggleMinimap => f.write_str("toggle-minimap"),
            Self::ShowMinimap => f.write_str("show-minimap"),
            Self::HideMinimap => f.write_str("hide-minimap"),
            Self::PointerDown(p) => write!(f, "down:{},{}", p.x, p.y),
            Self::PointerMove(p) => write!(f, "move:{},{}", p.x, p.y),
            Self::PointerUp => f.write_str("up"),
            Self::PointerLeave => f.write_str("leave"),
        }
    }
}

/// Parses a whitespace-separated event script.
///
/// `#` starts a comment running to the end of the line.
///
/// ```
/// use kurbo::Point;
/// use tourscope_viewer::{ViewerEvent, parse_script};
///
/// let events = parse_script("zoom-in  # twice\nzoom-in\ndown:10,10 move:40,30 up").unwrap();
/// assert_eq!(events.len(), 5);
/// assert_eq!(events[3], ViewerEvent::PointerMove(Point::new(40.0, 30.0)));
/// ```
pub fn parse_script(text: &str) -> Result<Vec<ViewerEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let code = line.split_once('#').map_or(line, |(code, _)| code);
        for token in code.split_whitespace() {
            let event = token.parse().map_err(|source| ScriptError::AtLine {
                line: index + 1,
                source: Box::new(source),
            })?;
            events.push(event);
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_parse_to_events() {
        assert_eq!("zoom-out".parse(), Ok(ViewerEvent::ZoomOut));
        assert_eq!("hide-minimap".parse(), Ok(ViewerEvent::HideMinimap));
        assert_eq!(
            "down:-3.5,7".parse(),
            Ok(ViewerEvent::PointerDown(Point::new(-3.5, 7.0)))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for event in [
            ViewerEvent::ZoomIn,
            ViewerEvent::ToggleMinimap,
            ViewerEvent::PointerMove(Point::new(1.25, -2.0)),
            ViewerEvent::PointerLeave,
        ] {
            assert_eq!(event.to_string().parse(), Ok(event));
        }
    }

    #[test]
    fn bad_tokens_are_reported() {
        assert_eq!(
            "pan".parse::<ViewerEvent>(),
            Err(ScriptError::UnknownEvent("pan".into()))
        );
        assert_eq!(
            "down:1".parse::<ViewerEvent>(),
            Err(ScriptError::BadPosition("1".into()))
        );
        assert_eq!(
            "move:1,nan".parse::<ViewerEvent>(),
            Err(ScriptError::BadPosition("1,nan".into()))
        );
    }

    #[test]
    fn script_errors_carry_the_line() {
        let err = parse_script("zoom-in\n\n  reset spin").unwrap_err();
        assert_eq!(err.to_string(), "line 3: unknown event `spin`");
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let events = parse_script("# setup\n\nreset # back home\n").unwrap();
        assert_eq!(events, [ViewerEvent::Reset]);
    }
}
