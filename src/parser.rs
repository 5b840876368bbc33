use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{one_of, space0};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::number::complete::double;
use nom::sequence::{delimited, pair};
use nom::{Finish, IResult, Parser};

/// Reads every line from `reader`, dropping only the line terminator. Blank lines come through
/// as empty strings since they separate one elf's items from the next.
pub fn load_lines<R>(reader: R) -> std::io::Result<Vec<String>>
where
    R: BufRead,
{
    reader.lines().collect()
}

pub fn read_lines_from_stdin() -> std::io::Result<Vec<String>> {
    load_lines(std::io::stdin().lock())
}

pub fn read_lines_from_path<P>(path: P) -> std::io::Result<Vec<String>>
where
    P: AsRef<Path>,
{
    load_lines(BufReader::new(File::open(path)?))
}

// `double` only knows an unsigned "inf" and "nan", and stops after the "inf" of "infinity".
fn non_finite(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(
            opt(one_of("+-")),
            alt((
                tag_no_case("infinity"),
                tag_no_case("inf"),
                tag_no_case("nan"),
            )),
        )),
        str::parse::<f64>,
    )
    .parse(input)
}

pub fn float_numeric(input: &str) -> IResult<&str, f64> {
    all_consuming(delimited(space0, alt((non_finite, double)), space0)).parse(input)
}

// The borrowed error points into the line, which the caller wants to keep past the parse.
pub fn parse_item_value(line: &str) -> Result<f64, nom::error::Error<String>> {
    match float_numeric(line).finish() {
        Ok((_rest, n)) => Ok(n),
        Err(nom::error::Error { input, code }) => Err(nom::error::Error {
            input: input.to_owned(),
            code,
        }),
    }
}
