//! Line-oriented slice file parser.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use config::constants::{MAX_SLICES, MAX_SLICE_VERTICES, MIN_SLICE_VERTICES};
use slice_stitch::{Slice, Vec3};

use crate::error::{LoadError, LoadResult};

#[cfg(test)]
mod tests;

/// Options for loading a slice file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reverse file order so the first returned slice is the top one.
    pub reverse: bool,
}

impl LoadOptions {
    /// Keep slices in the order they appear on disk.
    pub fn file_order() -> Self {
        Self { reverse: false }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { reverse: true }
    }
}

/// Parses slice file text, top slice first.
pub fn load_slices(text: &str) -> LoadResult<Vec<Slice>> {
    load_slices_with(text, LoadOptions::default())
}

/// Parses slice file text with explicit options.
///
/// # Errors
///
/// The first [`LoadError`] met; no partial stack is returned.
///
/// # Example
///
/// ```rust
/// use slice_loader::{load_slices_with, LoadOptions};
///
/// let text = "2\n3\n0 0 0\n1 0 0\n0 1 0\n3\n0 0 1\n1 0 1\n0 1 1\n";
/// let slices = load_slices_with(text, LoadOptions::file_order()).unwrap();
/// assert_eq!(slices[0].position(0).z, 0.0);
/// ```
pub fn load_slices_with(text: &str, options: LoadOptions) -> LoadResult<Vec<Slice>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut cursor = LineCursor::new(&lines);

    let (header_line, header) = cursor.next_line().ok_or(LoadError::MissingHeader)?;
    let count = parse_count(header_line, header)?;
    if count > MAX_SLICES {
        return Err(LoadError::TooManySlices {
            count,
            max: MAX_SLICES,
        });
    }

    let mut slices = Vec::with_capacity(count.min(lines.len()));
    for k in 0..count {
        let id = if options.reverse { count - 1 - k } else { k };
        slices.push(read_slice(&mut cursor, k + 1, id)?);
    }
    if options.reverse {
        slices.reverse();
    }

    log::debug!(
        "loaded {} slices, {} points",
        slices.len(),
        slices.iter().map(Slice::len).sum::<usize>()
    );
    Ok(slices)
}

/// Reads and parses a whole slice file from `reader`.
pub fn load_slices_from_reader(
    mut reader: impl BufRead,
    options: LoadOptions,
) -> LoadResult<Vec<Slice>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_slices_with(&text, options)
}

/// Opens and parses the slice file at `path`.
pub fn load_slices_from_path(
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> LoadResult<Vec<Slice>> {
    let path = path.as_ref();
    log::debug!("reading slices from {}", path.display());
    let file = File::open(path)?;
    load_slices_from_reader(BufReader::new(file), options)
}

/// Positional cursor over the input lines.
struct LineCursor<'a> {
    lines: &'a [&'a str],
    next: usize,
}

impl<'a> LineCursor<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, next: 0 }
    }

    /// 1-based number of the line `next_line` would return.
    fn line_number(&self) -> usize {
        self.next + 1
    }

    fn remaining(&self) -> usize {
        self.lines.len() - self.next
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let text = self.lines.get(self.next)?;
        self.next += 1;
        Some((self.next, text))
    }

    /// Takes `n` lines at once, returning the first one's line number.
    fn take(&mut self, n: usize) -> Option<(usize, &'a [&'a str])> {
        let block = self.lines.get(self.next..self.next + n)?;
        let first = self.line_number();
        self.next += n;
        Some((first, block))
    }
}

fn read_slice(cursor: &mut LineCursor<'_>, number: usize, id: usize) -> LoadResult<Slice> {
    let (line, text) = cursor.next_line().ok_or(LoadError::MissingPointCount {
        line: cursor.line_number(),
        slice: number,
    })?;
    let declared = parse_count(line, text)?;

    if declared > MAX_SLICE_VERTICES {
        return Err(LoadError::TooManyPoints {
            slice: number,
            line,
            count: declared,
            max: MAX_SLICE_VERTICES,
        });
    }

    let available = cursor.remaining();
    let (first, block) = cursor.take(declared).ok_or(LoadError::TruncatedSlice {
        slice: number,
        line,
        declared,
        available,
    })?;

    if declared < MIN_SLICE_VERTICES {
        return Err(LoadError::TooFewPoints {
            slice: number,
            line,
            count: declared,
            min: MIN_SLICE_VERTICES,
        });
    }

    let points = block
        .iter()
        .enumerate()
        .map(|(k, text)| parse_point(first + k, text))
        .collect::<LoadResult<Vec<Vec3>>>()?;

    log::trace!("slice {number} (id {id}): {} points from line {first}", points.len());
    Ok(Slice::with_id(id, points)?)
}

fn parse_count(line: usize, text: &str) -> LoadResult<usize> {
    let text = text.trim();
    text.parse().map_err(|_| LoadError::InvalidCount {
        line,
        text: text.to_string(),
    })
}

fn parse_point(line: usize, text: &str) -> LoadResult<Vec3> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(LoadError::WrongArity {
            line,
            found: tokens.len(),
        });
    }

    let mut xyz = [0.0; 3];
    for (slot, token) in xyz.iter_mut().zip(&tokens) {
        *slot = token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LoadError::InvalidCoordinate {
                line,
                text: (*token).to_string(),
            })?;
    }
    Ok(Vec3::from_array(xyz))
}
