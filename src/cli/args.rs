//! Command-line argument parsing and validation
//!
//! The grammar is small but irregular: every flag has single- and
//! double-dash spellings, a few have short aliases, `--exclude` is variadic until
//! the next known flag, and up to three positionals fill fixed slots.
//! One symbol table drives both the outer loop and the exclusion loop.

use crate::{
    config::Config,
    core::request::{OutputMode, PYTHON_FILE_PATTERN, RequestBuilder, SearchRequest},
    error::{Result, SearchError},
};
use std::iter::Peekable;
use tracing::{debug, instrument};

/// Usage synopsis printed on any usage error
pub const USAGE: &str = "\
usage: f search_string [file_pattern] [root_directory] [options]

  --search <s>           same as positional search_string
  --files|--file <p>     file name glob filter
  --dir|--directory <d>  root directory (default: current directory)
  --text                 skip binary files
  --python               shorthand: file_pattern = \"*.py\"
  --list                 only report matching file paths, not lines
  --num                  include line numbers in matches
  --symlinks             follow symlinks during traversal
  --exclude <dir>...     directory names to prune (until the next option)
  --grep <matcher>       override the line-matching program
  --vi|--vim             capture output to a temp file and open it in the viewer
  --quiet                do not echo the command before running it
  --verbose              echo every visited file path
  --dryrun               print the command only; do not execute
  --debug                print resolved parameters; do not execute
  --help                 print this message

Every option may be written with one or two dashes (-text, --text).
";

/// Recognized flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Search,
    Files,
    Dir,
    Text,
    Python,
    List,
    Num,
    Symlinks,
    Exclude,
    Grep,
    Vim,
    Quiet,
    Verbose,
    DryRun,
    Debug,
    Help,
}

/// Flag names without their leading dashes
const FLAGS: &[(Flag, &[&str])] = &[
    (Flag::Search, &["search"]),
    (Flag::Files, &["files", "file"]),
    (Flag::Dir, &["dir", "directory"]),
    (Flag::Text, &["text", "t"]),
    (Flag::Python, &["python", "py"]),
    (Flag::List, &["list"]),
    (Flag::Num, &["num"]),
    (Flag::Symlinks, &["symlinks"]),
    (Flag::Exclude, &["exclude", "excludes", "x"]),
    (Flag::Grep, &["grep"]),
    (Flag::Vim, &["vim", "vi"]),
    (Flag::Quiet, &["quiet"]),
    (Flag::Verbose, &["verbose"]),
    (Flag::DryRun, &["dryrun"]),
    (Flag::Debug, &["debug"]),
    (Flag::Help, &["help"]),
];

impl Flag {
    /// Classify a token; `None` means it is a positional
    pub fn lookup(token: &str) -> Option<Self> {
        let name = token
            .strip_prefix("--")
            .or_else(|| token.strip_prefix('-'))?;
        if name.is_empty() || name.starts_with('-') {
            return None;
        }
        FLAGS
            .iter()
            .find(|(_, names)| names.contains(&name))
            .map(|(flag, _)| *flag)
    }
}

/// Parse tokens (program name excluded) into a validated request
#[instrument(skip_all)]
pub fn parse_args<I, S>(args: I, config: &Config) -> Result<SearchRequest>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
    debug!("Parsing {} argument(s): {:?}", tokens.len(), tokens);

    let mut builder = RequestBuilder::new();
    let mut positionals = 0usize;
    let mut rest = tokens.iter().peekable();

    while let Some(token) = rest.next() {
        let Some(flag) = Flag::lookup(token) else {
            match positionals {
                0 => builder.pattern(token.as_str()),
                1 => builder.file_pattern(token.as_str()),
                2 => builder.root_directory(token.as_str()),
                _ => return Err(SearchError::usage(format!("unexpected argument {token:?}"))),
            };
            positionals += 1;
            continue;
        };

        match flag {
            Flag::Help => return Err(SearchError::HelpRequested),
            Flag::Search => {
                builder.pattern(value(&mut rest, token)?);
            }
            Flag::Files => {
                builder.file_pattern(value(&mut rest, token)?);
            }
            Flag::Dir => {
                builder.root_directory(value(&mut rest, token)?);
            }
            Flag::Grep => {
                builder.matcher_program(value(&mut rest, token)?);
            }
            Flag::Exclude => {
                let mut captured = 0usize;
                while let Some(name) = rest.next_if(|t| Flag::lookup(t).is_none()) {
                    builder.exclude(name);
                    captured += 1;
                }
                if captured == 0 {
                    return Err(SearchError::usage(format!(
                        "{token} needs at least one directory name"
                    )));
                }
            }
            Flag::Text => {
                builder.skip_binary_files();
            }
            Flag::Python => {
                builder.file_pattern(PYTHON_FILE_PATTERN);
            }
            Flag::List => {
                builder.list_filenames_only();
            }
            Flag::Num => {
                builder.show_line_numbers();
            }
            Flag::Symlinks => {
                builder.follow_symlinks();
            }
            Flag::Verbose => {
                builder.verbose_path_echo();
            }
            Flag::Vim => {
                builder.output_mode(OutputMode::EditorCapture);
            }
            Flag::Quiet => {
                builder.output_mode(OutputMode::Quiet);
            }
            Flag::DryRun => {
                builder.output_mode(OutputMode::DryRun);
            }
            Flag::Debug => {
                builder.output_mode(OutputMode::Debug);
            }
        }
    }

    builder.build(&config.matcher)
}

/// Consume the single value of a value-taking flag
fn value<'a, I>(rest: &mut Peekable<I>, flag: &str) -> Result<&'a str>
where
    I: Iterator<Item = &'a String>,
{
    rest.next()
        .map(String::as_str)
        .ok_or_else(|| SearchError::missing_value(flag))
}
