use std::error::Error;
use std::io::{self, Write};

use algos::hash_table::HashTable;

const BUCKETS: usize = 5;
const ENTRIES: &[(&str, i32)] = &[("apple", 10), ("orange", 20), ("banana", 30)];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let stdout = io::stdout();
    demo(&mut stdout.lock())?;
    Ok(())
}

fn demo(out: &mut impl Write) -> io::Result<()> {
    let mut table = HashTable::new(BUCKETS);

    writeln!(out, "--- Hash Table ---")?;
    for &(key, value) in ENTRIES {
        table.insert(key, value);
        writeln!(out, "> insert {} = {}", key, value)?;
    }
    writeln!(out, "{}", table)?;

    for &(key, _) in ENTRIES {
        match table.get(key) {
            Some(value) => writeln!(out, "> get {}: {}", key, value)?,
            None => writeln!(out, "> get {}: missing", key)?,
        }
    }

    let removed = table.remove("orange");
    writeln!(out, "> delete orange: {}", removed.is_some())?;
    writeln!(out, "{}", table)?;
    Ok(())
}
