//! Plan rendering
//!
//! Turns a [`SearchRequest`] into one walker invocation, held as a discrete
//! argument vector. Nothing here touches the filesystem.

use crate::{config::Config, core::request::SearchRequest, utils::quote};
use std::fmt::Write as _;
use tracing::{debug, instrument};

/// Executable form of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    /// Walker program
    pub program: String,
    /// Walker arguments, including the embedded matcher invocation
    pub args: Vec<String>,
}

impl SearchPlan {
    /// Render the walk + match plan for a request
    #[instrument(skip_all)]
    pub fn from_request(request: &SearchRequest, config: &Config) -> Self {
        let mut args: Vec<String> = Vec::new();

        if request.follow_symlinks {
            args.push("-L".into());
        }
        args.push(start_path(&request.root_directory.to_string_lossy()));

        if !request.excluded_directory_names.is_empty() {
            args.extend(["-type", "d", "("].map(String::from));
            for (i, name) in request.excluded_directory_names.iter().enumerate() {
                if i > 0 {
                    args.push("-o".into());
                }
                args.extend(["-name".to_string(), name.clone()]);
            }
            args.extend([")", "-prune", "-o"].map(String::from));
        }

        args.extend(["-type", "f"].map(String::from));
        if let Some(glob) = &request.file_pattern {
            args.extend(["-name".to_string(), glob.clone()]);
        }
        if request.verbose_path_echo {
            args.push("-print".into());
        }

        args.push("-exec".into());
        args.extend(matcher_args(request));
        args.extend(["{}", ";"].map(String::from));

        let plan = Self {
            program: config.walker.clone(),
            args,
        };
        debug!("Rendered plan: {}", plan.describe());
        plan
    }

    /// The plan as a line that can be pasted into a shell
    pub fn describe(&self) -> String {
        quote::join(std::iter::once(&self.program).chain(&self.args))
    }

    /// Every resolved request field followed by the plan description
    pub fn dump(&self, request: &SearchRequest) -> String {
        let mut out = String::new();
        let fields: [(&str, String); 11] = [
            ("pattern", request.pattern.clone()),
            (
                "file_pattern",
                request.file_pattern.clone().unwrap_or_else(|| "(all files)".into()),
            ),
            ("root_directory", request.root_directory.display().to_string()),
            (
                "excluded_directory_names",
                format!("{:?}", request.excluded_directory_names),
            ),
            ("follow_symlinks", request.follow_symlinks.to_string()),
            ("skip_binary_files", request.skip_binary_files.to_string()),
            ("list_filenames_only", request.list_filenames_only.to_string()),
            ("show_line_numbers", request.show_line_numbers.to_string()),
            ("verbose_path_echo", request.verbose_path_echo.to_string()),
            ("matcher_program", request.matcher_program.clone()),
            ("output_mode", request.output_mode.to_string()),
        ];

        for (name, value) in fields {
            let _ = writeln!(out, "{name:<26}{value}");
        }
        let _ = write!(out, "{:<26}{}", "command", self.describe());
        out
    }
}

/// Start path as the walker must see it.
///
/// `find` reads a leading `-` or a lone `(`, `)`, `!` or `,` as part of its
/// expression, so such roots are anchored with `./`.
fn start_path(root: &str) -> String {
    if root.starts_with('-') || matches!(root, "(" | ")" | "!" | ",") {
        format!("./{root}")
    } else {
        root.to_string()
    }
}

/// Matcher invocation run by the walker for each file; `{}` is appended by the caller
fn matcher_args(request: &SearchRequest) -> Vec<String> {
    let mut args = vec![request.matcher_program.clone(), "-H".to_string()];
    if request.skip_binary_files {
        args.push("-I".into());
    }
    // list mode wins over line numbers
    if request.list_filenames_only {
        args.push("-l".into());
    } else if request.show_line_numbers {
        args.push("-n".into());
    }
    args.extend(["-e".to_string(), request.pattern.clone()]);
    args
}
