// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drafting-tool script (`.scr`) output
//!
//! ```text
//! zoom -100,-100,-100 -200,-200,-200
//! line 1,2,3 4,5,6
//! zoom a
//! ```
//!
//! Coordinates use the shortest round-trip `f64` rendering, so whole numbers
//! print without a fractional part.

use crate::error::{Error, Result};
use ifc_scr_geometry::{Point3, Segment};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const HEADER: &str = "zoom -100,-100,-100 -200,-200,-200";
pub const FOOTER: &str = "zoom a";

fn format_point(point: &Point3<f64>) -> String {
    format!("{},{},{}", point.x, point.y, point.z)
}

/// One `line` command, without the trailing newline
pub fn format_line(segment: &Segment) -> String {
    format!(
        "line {} {}",
        format_point(&segment.start),
        format_point(&segment.end)
    )
}

/// A complete script for `segments`
pub fn render(segments: &[Segment]) -> String {
    let mut out = String::with_capacity(64 + segments.len() * 48);
    out.push_str(HEADER);
    out.push('\n');
    for segment in segments {
        out.push_str(&format_line(segment));
        out.push('\n');
    }
    out.push_str(FOOTER);
    out.push('\n');
    out
}

/// Streaming script writer
///
/// The header goes out on creation, segments are appended as they become
/// available and [`ScrWriter::finish`] writes the footer and flushes.
pub struct ScrWriter<W: Write> {
    inner: W,
    path: PathBuf,
    lines_written: usize,
}

impl ScrWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        Self::new(BufWriter::new(file), path)
    }
}

impl<W: Write> ScrWriter<W> {
    /// Wrap `inner`; `path` is only used in error messages
    pub fn new(mut inner: W, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        writeln!(inner, "{}", HEADER).map_err(|e| Error::io(&path, e))?;
        Ok(Self {
            inner,
            path,
            lines_written: 0,
        })
    }

    pub fn write_segment(&mut self, segment: &Segment) -> Result<()> {
        writeln!(self.inner, "{}", format_line(segment)).map_err(|e| Error::io(&self.path, e))?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn write_segments(&mut self, segments: &[Segment]) -> Result<()> {
        segments.iter().try_for_each(|s| self.write_segment(s))
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Write the footer, flush, and hand back the inner writer
    pub fn finish(mut self) -> Result<W> {
        writeln!(self.inner, "{}", FOOTER).map_err(|e| Error::io(&self.path, e))?;
        self.inner.flush().map_err(|e| Error::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), lines = self.lines_written, "Finished script");
        Ok(self.inner)
    }
}
