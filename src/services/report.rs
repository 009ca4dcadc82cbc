//! Diagnostics report for a swatch run.
//!
//! Per-item irregularities never abort the run; they accumulate here and
//! are written to a text report in one shot after the walk completes. The
//! report is human-readable output only, nothing consumes it.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// One irregular item encountered during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The item's cell extends past the bottom of the atlas image.
    OutOfBounds {
        icon_index: u32,
        name: String,
        atlas_height: u32,
    },

    /// The cell held no pixel that survived classification.
    NoValidPixels {
        id: String,
        name: String,
        icon_index: u32,
        total_opaque: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::OutOfBounds {
                icon_index,
                name,
                atlas_height,
            } => write!(
                f,
                "Error: icon {icon_index} ({name}) lies outside the sprite sheet (height {atlas_height})"
            ),
            Diagnostic::NoValidPixels {
                id,
                name,
                icon_index,
                total_opaque,
            } => write!(
                f,
                "Warning: no valid pixels for {name} (id {id}, icon {icon_index}, {total_opaque} opaque)"
            ),
        }
    }
}

/// The full report of one run: atlas dimensions, one line per diagnostic in
/// iteration order, and a completion summary.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub atlas_width: u32,
    pub atlas_height: u32,
    pub diagnostics: Vec<Diagnostic>,
    /// Number of items that received a color
    pub colored: usize,
}

impl RunReport {
    pub fn render(&self) -> String {
        let mut lines = vec![format!(
            "Atlas size: {}x{}",
            self.atlas_width, self.atlas_height
        )];
        lines.extend(self.diagnostics.iter().map(Diagnostic::to_string));
        lines.push(format!(
            "Done! Calculated colors for {} items.",
            self.colored
        ));
        lines.join("\n") + "\n"
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }
}
