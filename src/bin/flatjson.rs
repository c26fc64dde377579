//! Driver: reads a JSON document from a file (or stdin), parses it in two
//! passes, and by default dumps the flat token table. `--pretty` prints
//! the formatted document instead; `--get <dotted.path>` resolves a path
//! expression and prints the matched value.
//!
//! Grounded on `original_source/src/main.c`'s two-pass driver shape and
//! `test/lookup.c`'s lookup demonstration.

use std::env;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::{self, Read};

use flatjson::{Doc, TokenType};

#[derive(Debug)]
struct PathError(String);

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for PathError {}

fn read_input(path: Option<&str>) -> io::Result<Vec<u8>> {
    match path {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        Some(path) => fs::read(path),
    }
}

fn print_token_table(doc: &Doc) {
    println!("{:>5}  {:<6} {:>6} {:>6} {:>5}", "index", "type", "start", "length", "next");
    for (i, tok) in doc.tokens().iter().enumerate() {
        println!(
            "{i:>5}  {:<6} {:>6} {:>6} {:>5}",
            tok.token_type.to_string(),
            tok.start,
            tok.length,
            tok.next
        );
    }
}

fn print_value(doc: &Doc, index: usize) -> Result<(), Box<dyn StdError>> {
    match doc.token(index).token_type {
        TokenType::String => println!("{}", doc.string_load(index)?),
        TokenType::Number => println!("{}", doc.number_get(index)?),
        _ => println!("{}", doc.pretty_string(index)),
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn StdError>> {
    let mut args = env::args().skip(1);
    let mut file_arg: Option<String> = None;
    let mut get_path: Option<String> = None;
    let mut pretty = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--get" => {
                get_path = Some(args.next().ok_or("--get requires a path argument")?);
            }
            "--pretty" => pretty = true,
            _ => file_arg = Some(arg),
        }
    }

    let bytes = read_input(file_arg.as_deref())?;
    let doc = Doc::parse(bytes)?;

    if let Some(path) = &get_path {
        let target = doc.lookup(doc.root(), path).map_err(PathError)?;
        return print_value(&doc, target);
    }

    if pretty {
        println!("{}", doc.pretty_string(doc.root()));
    } else {
        print_token_table(&doc);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn StdError>> {
    run()
}
