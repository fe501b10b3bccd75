use std::error::Error;
use std::io::{self, Write};

use algos::upper_bound::upper_bound_search;

const SORTED: &[f64] = &[2.6, 3.8, 4.6, 6.3, 8.2, 9.1];
const TARGETS: &[f64] = &[4.6, 5.0, 10.0, 2.0];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let stdout = io::stdout();
    demo(&mut stdout.lock())?;
    Ok(())
}

fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "--- Upper Bound ---")?;
    writeln!(out, "> array: {:?}", SORTED)?;

    for &target in TARGETS {
        let result = upper_bound_search(SORTED, target);
        match result.upper {
            Some(upper) => writeln!(
                out,
                "> target {}: iterations={} upper={}",
                target, result.iterations, upper
            )?,
            None => writeln!(
                out,
                "> target {}: iterations={} upper=none",
                target, result.iterations
            )?,
        }
    }
    Ok(())
}
