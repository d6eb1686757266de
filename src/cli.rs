use std::path::PathBuf;

use clap::Parser;

/// Every argument has a default, so a bare `movie-reports` run reads
/// `data/tmdb-movies.csv` and writes `output/q1.csv` .. `output/q7.csv`.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Clean a movie-metadata CSV and derive seven summary reports",
    long_about = None
)]
pub struct Cli {
    /// Input movie dataset (CSV with a header row)
    #[arg(short = 'i', long = "input", default_value = "data/tmdb-movies.csv")]
    pub input: PathBuf,
    /// Directory that receives q1.csv .. q7.csv (created if absent)
    #[arg(short = 'o', long = "out-dir", default_value = "output")]
    pub out_dir: PathBuf,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_delimiter_accepts_named_and_literal_forms() {
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("ab").is_err());
    }

    #[test]
    fn bare_invocation_uses_defaults() {
        let cli = Cli::parse_from(["movie-reports"]);
        assert_eq!(cli.input, PathBuf::from("data/tmdb-movies.csv"));
        assert_eq!(cli.out_dir, PathBuf::from("output"));
        assert_eq!(cli.delimiter, None);
        assert_eq!(cli.input_encoding, None);
    }
}
