use std::io::{self, Write};

use crate::DwellReport;

pub fn write_report<W: Write>(out: &mut W, reports: &[DwellReport]) -> io::Result<()> {
    for report in reports {
        writeln!(out, "Maximal hold time is : {:.3} sec", report.max_dwell)?;
        for throw in &report.throws {
            writeln!(
                out,
                "\tNumber of balls = {:2} | Minimal throw height = {:.2} m",
                throw.balls, throw.height
            )?;
        }
    }

    Ok(())
}
