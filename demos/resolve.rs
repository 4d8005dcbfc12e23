// This is a part of rust-encoding.
// Copyright (c) 2014-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use encoding_html::document::convert_line_endings;
use encoding_html::{encoding_from_name, EncodingResolver, LocaleDefault};
use getopts::Options;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut opts = Options::new();
    opts.optopt("l", "locale", "use this encoding instead of the locale default", "NAME");
    opts.optflag("n", "name-only", "only print the resolved encoding name");
    opts.optflag("v", "verbose", "log every detection stage");
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => fail(&e.to_string()),
    };
    if matches.opt_present("h") {
        println!("{}", opts.usage("Resolves the character encoding of HTML documents."));
        return;
    }

    env_logger::Builder::from_default_env()
        .filter_level(if matches.opt_present("v") {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let locale = match matches.opt_str("l") {
        Some(name) => match encoding_from_name(&name) {
            Some(enc) => LocaleDefault::new(enc),
            None => fail(&format!("invalid encoding name {}", name)),
        },
        None => LocaleDefault::from_env(),
    };
    let resolver = EncodingResolver::new(locale);

    let inputs = if matches.free.is_empty() { vec!["-".to_string()] } else { matches.free.clone() };
    let stdout = io::stdout();
    let mut output = stdout.lock();
    for input in &inputs {
        let bytes = match read_input(input) {
            Ok(bytes) => bytes,
            Err(e) => fail(&format!("cannot read {}: {}", input, e)),
        };
        let detection = resolver.resolve(&bytes);
        let written = if matches.opt_present("n") {
            writeln!(output, "{}: {} ({})", input, detection.name, detection.source)
        } else {
            output.write_all(convert_line_endings(&detection.text).as_bytes())
        };
        if let Err(e) = written {
            fail(&format!("cannot write: {}", e));
        }
    }
}

fn read_input(input: &str) -> io::Result<Vec<u8>> {
    if input == "-" {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        fs::read(input)
    }
}

fn fail(message: &str) -> ! {
    eprintln!("resolve: {}", message);
    process::exit(1)
}
