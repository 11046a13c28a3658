use std::io::{self, BufWriter, Write};

use anyhow::Result;
use throw_height::{sweep, write_report};

fn main() -> Result<()> {
    util::init_logging();

    let reports = sweep()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &reports)?;
    out.flush()?;

    Ok(())
}
