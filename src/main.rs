extern crate env_logger;
extern crate failure;
extern crate greatcircle;

use std::io::{self, Write};

use failure::Error;

use greatcircle::location::builtin_routes;
use greatcircle::report::write_routes;

fn main() -> Result<(), Error> {
    env_logger::init();

    let routes = builtin_routes()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_routes(&mut out, &routes)?;
    out.flush()?;

    Ok(())
}
