//! Text PGM (`P2`) codec and file helpers.
//!
//! - `Display` emits the four header lines followed by row-major samples.
//! - `FromStr` reads the same layout back through the clamping setter.
//! - The header's maximum sample value is recomputed from the buffer at
//!   write time, not pinned to 255.

use super::PixelBuffer;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const FORMAT_TAG: &str = "P2";
const COMMENT: &str = "# This is a pgm format";

impl fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FORMAT_TAG}")?;
        writeln!(f, "{COMMENT}")?;
        writeln!(f, "{} {}", self.width(), self.height())?;
        writeln!(f, "{}", self.max_sample())?;
        for y in 0..self.height() {
            for (x, sample) in self.row(y).iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{sample}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for PixelBuffer {
    type Err = String;

    /// Parse the text PGM layout. The format tag is read but its value is
    /// not checked; the comment line and the declared maximum are discarded.
    /// A short or malformed stream yields `Err`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let header = lines.next().ok_or_else(|| "empty stream".to_string())?;
        if header.split_whitespace().next().is_none() {
            return Err("missing format tag".to_string());
        }
        lines
            .next()
            .ok_or_else(|| "missing comment line".to_string())?;

        let body = lines.collect::<Vec<_>>().join("\n");
        let mut tokens = body.split_whitespace();
        let width: u32 = next_value(&mut tokens, "width")?;
        let height: u32 = next_value(&mut tokens, "height")?;
        let _declared_max: u32 = next_value(&mut tokens, "maximum sample value")?;

        let mut buffer = PixelBuffer::new(width, height);
        for row in 0..height {
            for col in 0..width {
                let value: i32 = next_value(&mut tokens, "sample")?;
                buffer.set_pixel(row, col, value);
            }
        }
        Ok(buffer)
    }
}

fn next_value<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<T, String> {
    let token = tokens
        .next()
        .ok_or_else(|| format!("truncated stream: missing {what}"))?;
    token
        .parse()
        .map_err(|_| format!("invalid {what}: {token:?}"))
}

/// Write `buffer` to `path` in text PGM form.
pub fn save_pgm(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    fs::write(path, buffer.to_string())
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Read a text PGM image from `path`.
pub fn load_pgm(path: &Path) -> Result<PixelBuffer, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    contents
        .parse::<PixelBuffer>()
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}
