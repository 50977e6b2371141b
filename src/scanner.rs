//! Internal module that turns raw text into per-line records.
//!
//! Scanning happens in two steps. [`scan_line`] looks at one line in
//! isolation: it strips inline comments, finds the branch marker, measures the
//! indentation column and cleans the name. [`assign_depths`] then looks at the
//! whole document to turn columns into nesting levels, since the width of one
//! level is only known once every line has been seen.

use std::collections::BTreeMap;

/// Branch markers in priority order.
///
/// When several markers occur on a line the right-most one wins; at the same
/// position the longer one wins.
pub(crate) const MARKERS: &[&str] = &[
    "├───", "└───", "├─", "└─", // Windows `tree /f`
    "├──", "└──", // `tree`
    "|---", "+---", "\\---", // Windows `tree /a`
    "|--", "+--", "\\--", "`--", // `tree --charset=ascii`
    "┠──", "┗━━", // heavy variants
    "├ ", "└ ", "| ", "+ ", // broken
];

/// Vertical continuation glyphs that may precede a name when its line has no marker.
const GUTTER_GLYPHS: &[char] = &['│', '┃', '|'];

/// Dash glyphs left over when a marker is longer than any entry in [`MARKERS`].
const MARKER_RESIDUE: &[char] = &['─', '━'];

const HEADERS: &[&str] = &["Folder PATH listing", "Volume serial number"];

const TAB_WIDTH: usize = 4;
const DEFAULT_UNIT: usize = 4;
const MIN_UNIT: usize = 2;

/// One scanned input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineRecord {
    /// 1-based line number in the input.
    pub number: usize,
    pub raw: String,
    /// `raw` with the inline comment removed.
    pub text: String,
    /// Column of the marker, or of the name when there is no marker.
    pub indent: usize,
    /// Nesting level derived from `indent`, see [`assign_depths`].
    pub depth: usize,
    pub marker: Option<&'static str>,
    /// The line had continuation glyphs but no marker.
    pub gutter: bool,
    pub name: String,
    pub path_like: bool,
    pub comment: bool,
}

impl LineRecord {
    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }
}

/// Scans every line of `input` and assigns nesting depths.
pub(crate) fn scan_lines(input: &str) -> Vec<LineRecord> {
    let mut lines: Vec<LineRecord> = input
        .lines()
        .enumerate()
        .map(|(i, raw)| scan_line(i + 1, raw))
        .collect();
    assign_depths(&mut lines);
    lines
}

pub(crate) fn scan_line(number: usize, raw: &str) -> LineRecord {
    let raw = raw.trim_end_matches('\r');
    let text = strip_inline_comment(raw);
    let trimmed = text.trim();

    let (indent, marker, gutter, name) = match find_branch_marker(text) {
        Some((idx, marker)) => {
            let rest = text[idx + marker.len()..].trim_start_matches(MARKER_RESIDUE);
            (column(&text[..idx]), Some(marker), false, rest.trim())
        }
        None => {
            let body = text
                .trim_start_matches(|c: char| c.is_whitespace() || GUTTER_GLYPHS.contains(&c));
            let lead = &text[..text.len() - body.len()];
            (column(lead), None, lead.contains(GUTTER_GLYPHS), body.trim())
        }
    };

    let comment = name.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || HEADERS.iter().any(|h| trimmed.starts_with(h));

    LineRecord {
        number,
        raw: raw.to_string(),
        text: text.to_string(),
        indent,
        depth: 0,
        marker,
        gutter,
        name: name.to_string(),
        path_like: name.contains('/') || name.contains('\\'),
        comment,
    }
}

/// Returns the byte offset and token of the winning branch marker, if any.
///
/// A broken marker (the single glyph plus space variants) only counts when the
/// name follows right after it; `|   name` is a `tree /a` gutter, not a marker.
pub(crate) fn find_branch_marker(s: &str) -> Option<(usize, &'static str)> {
    let mut best: Option<(usize, &'static str)> = None;
    for &marker in MARKERS {
        let broken = marker.ends_with(' ');
        let Some(idx) = s
            .rmatch_indices(marker)
            .map(|(i, _)| i)
            .find(|&i| !broken || s[i + marker.len()..].starts_with(|c: char| !c.is_whitespace()))
        else {
            continue;
        };
        best = match best {
            Some((best_idx, best_marker))
                if idx < best_idx
                    || (idx == best_idx
                        && marker.chars().count() <= best_marker.chars().count()) =>
            {
                Some((best_idx, best_marker))
            }
            _ => Some((idx, marker)),
        };
    }
    best
}

/// Cuts the line at the first `#` or `//` that follows whitespace.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    for (i, b) in s.bytes().enumerate() {
        if b == b' ' || b == b'\t' {
            let rest = &s[i + 1..];
            if rest.starts_with('#') || rest.starts_with("//") {
                return &s[..i];
            }
        }
    }
    s
}

fn column(prefix: &str) -> usize {
    prefix.chars().fold(0, |col, c| {
        if c == '\t' {
            (col / TAB_WIDTH + 1) * TAB_WIDTH
        } else {
            col + 1
        }
    })
}

/// Converts indentation columns into nesting levels for the whole document.
///
/// Marker lines and plain indented lines share one column scale. Its level
/// width is the most common step between a line and a deeper line right after
/// it, so a single misaligned marker cannot shrink it. Columns are rounded to
/// the nearest level.
///
/// A marker-less line that continues a drawing sits one level right of its
/// parent's marker, the way `tree /f` lists files: either it has continuation
/// glyphs in front of the name, or it is indented past the last marker with
/// whitespace only. Such lines are shifted back by one level and do not take
/// part in choosing the level width. The shallowest content line always ends
/// up at depth 0.
pub(crate) fn assign_depths(lines: &mut [LineRecord]) {
    let shifted = gutter_shifts(lines);

    let measured: Vec<usize> = lines
        .iter()
        .zip(&shifted)
        .filter(|(l, shift)| !l.comment && !**shift)
        .map(|(l, _)| l.indent)
        .collect();
    let origin = measured.iter().min().copied().unwrap_or(0);
    let unit = indent_unit(&measured);

    for (line, &shift) in lines.iter_mut().zip(&shifted) {
        let mut col = line.indent.saturating_sub(origin);
        if shift {
            col = col.saturating_sub(unit);
        }
        line.depth = (col + unit / 2) / unit;
    }

    let base = lines
        .iter()
        .filter(|l| !l.comment)
        .map(|l| l.depth)
        .min()
        .unwrap_or(0);
    for line in lines.iter_mut() {
        line.depth = line.depth.saturating_sub(base);
    }
}

/// Flags the marker-less lines that live in a drawing's gutter.
fn gutter_shifts(lines: &[LineRecord]) -> Vec<bool> {
    let mut last_marker: Option<usize> = None;
    lines
        .iter()
        .map(|line| {
            if line.comment {
                return false;
            }
            if line.has_marker() {
                last_marker = Some(line.indent);
                return false;
            }
            let shift = line.gutter || last_marker.is_some_and(|col| line.indent > col);
            if !shift {
                last_marker = None;
            }
            shift
        })
        .collect()
}

/// The most frequent step into a deeper line; ties go to the smaller step.
fn indent_unit(columns: &[usize]) -> usize {
    let mut steps: BTreeMap<usize, usize> = BTreeMap::new();
    for pair in columns.windows(2) {
        if pair[1] >= pair[0] + MIN_UNIT {
            *steps.entry(pair[1] - pair[0]).or_default() += 1;
        }
    }
    steps
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(step, _)| step)
        .unwrap_or(DEFAULT_UNIT)
}
