//! Extract a named capture group from every input line.
//!
//! ```sh
//! printf 'user alice id 7\nuser bob id 9\n' | \
//!     cargo run --example extract 'user (?<user>[a-z]+) id (?<id>[0-9]+)' user
//! ```
use std::io::{self, BufRead};

use anyhow::{anyhow, Context, Result};

use onig_captures::prelude::*;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let pattern = args
        .next()
        .ok_or_else(|| anyhow!("usage: extract <pattern> <group-name>"))?;
    let name = args
        .next()
        .ok_or_else(|| anyhow!("usage: extract <pattern> <group-name>"))?;

    let re = Regex::new(&pattern).with_context(|| format!("compile {:?}", pattern))?;

    if !re.has_capture_group(&name) {
        return Err(anyhow!("{}: no such capture group in {:?}", name, pattern));
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let result = re.search(&line)?;

        if result.is_match() {
            println!("{}", result.get(&name)?);
        }
    }

    Ok(())
}
