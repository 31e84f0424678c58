//! Segment description format
//!
//! One styled wedge per line, five whitespace-separated fields:
//!
//! ```text
//! -2 3 red 2 green
//! ```
//!
//! Start angle -2 * 30 degrees, end angle +3 * 30 degrees, red stroke of
//! width 2, green fill. `-` or `none` in a colour field suppresses that
//! attribute in the output.

/// One styled wedge of the rosette. `start` and `end` are in hours units
/// (1 unit = 30 degrees).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: i32,
    pub end: i32,
    pub stroke: Option<String>,
    pub line_width: u32,
    pub fill: Option<String>,
}

impl Segment {
    /// Parse a single description line. Returns `None` if the line has fewer
    /// than five fields or a numeric field does not parse.
    pub fn from_line(line: &str) -> Option<Segment> {
        let mut fields = line.split_whitespace();
        Some(Segment {
            start: fields.next()?.parse().ok()?,
            end: fields.next()?.parse().ok()?,
            stroke: color_token(fields.next()?),
            line_width: fields.next()?.parse().ok()?,
            fill: color_token(fields.next()?),
        })
    }
}

/// `-` and `none` mean "no colour"; anything else is passed through to the
/// renderer untouched.
fn color_token(token: &str) -> Option<String> {
    match token {
        "-" | "none" => None,
        other => Some(other.to_string()),
    }
}

/// Parse segment descriptions in order, one per line. The scan stops at the
/// first line that fails to parse (including a blank line); segments read up
/// to that point are kept. The truncation is deliberate and silent.
pub fn parse_segments(source: &str) -> Vec<Segment> {
    source
        .lines()
        .map_while(Segment::from_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_full_line() {
        let seg = Segment::from_line("-2 3 red 2 green").unwrap();
        assert_eq!(
            seg,
            Segment {
                start: -2,
                end: 3,
                stroke: Some("red".to_string()),
                line_width: 2,
                fill: Some("green".to_string()),
            }
        );
    }

    #[test]
    fn dash_and_none_suppress_colors() {
        let seg = Segment::from_line("0 1 - 0 none").unwrap();
        assert_eq!(seg.stroke, None);
        assert_eq!(seg.fill, None);
    }

    #[test]
    fn short_or_non_numeric_lines_fail() {
        assert_eq!(Segment::from_line(""), None);
        assert_eq!(Segment::from_line("1 2 red 2"), None);
        assert_eq!(Segment::from_line("one 2 red 2 green"), None);
        assert_eq!(Segment::from_line("1 2 red thick green"), None);
    }

    #[test]
    fn extra_whitespace_is_tolerated() {
        let seg = Segment::from_line("  1   2  red  2   green ").unwrap();
        assert_eq!(seg.start, 1);
        assert_eq!(seg.fill, Some("green".to_string()));
    }

    #[test]
    fn segments_are_read_in_file_order() {
        let segs = parse_segments("-6 -3 red 1 blue\n-3 0 - 0 green\n0 6 black 2 -\n");
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].start, -6);
        assert_eq!(segs[1].fill, Some("green".to_string()));
        assert_eq!(segs[2].fill, None);
    }

    #[test]
    fn first_bad_line_truncates_the_scan() {
        let segs = parse_segments("0 1 red 1 blue\nnot a segment\n2 3 red 1 blue\n");
        assert_eq!(segs.len(), 1);

        let segs = parse_segments("0 1 red 1 blue\n\n2 3 red 1 blue\n");
        assert_eq!(segs.len(), 1);
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(parse_segments("").is_empty());
    }
}
