//! Plain-text filter list output.

use std::io::{self, Write};

use crate::solution::Solution;

/// Writes the filter centers of `solution`, ascending, one integer Hz per line.
pub fn write_filter_list<W: Write>(mut writer: W, solution: &Solution) -> io::Result<()> {
    for center in solution.filter_centers() {
        writeln!(writer, "{center}")?;
    }
    writer.flush()
}
