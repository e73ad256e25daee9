//! Search request model
//!
//! `RequestBuilder` collects parser state; `SearchRequest` is the validated,
//! immutable result.

use crate::error::{Result, SearchError};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Glob used by the `--python` shorthand
pub const PYTHON_FILE_PATTERN: &str = "*.py";

/// How the rendered plan is reported and whether it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Echo the plan, then execute it
    #[default]
    Normal,
    /// Execute without echoing
    Quiet,
    /// Print the plan only
    DryRun,
    /// Print the resolved request and the plan only
    Debug,
    /// Execute into a temporary file and open it in the viewer
    EditorCapture,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Quiet => "quiet",
            Self::DryRun => "dryrun",
            Self::Debug => "debug",
            Self::EditorCapture => "vim",
        };
        f.write_str(name)
    }
}

/// A fully resolved search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Text to search for
    pub pattern: String,
    /// Filename glob; `None` matches every file
    pub file_pattern: Option<String>,
    /// Where the walk starts
    pub root_directory: PathBuf,
    /// Directory names pruned from the walk
    pub excluded_directory_names: Vec<String>,
    pub follow_symlinks: bool,
    pub skip_binary_files: bool,
    pub list_filenames_only: bool,
    pub show_line_numbers: bool,
    /// Print every visited file before matching it
    pub verbose_path_echo: bool,
    /// Line-matching program
    pub matcher_program: String,
    pub output_mode: OutputMode,
}

/// Mutable parse state, consumed by [`RequestBuilder::build`]
#[derive(Debug, Default)]
pub struct RequestBuilder {
    pattern: Option<String>,
    file_pattern: Option<String>,
    root_directory: Option<PathBuf>,
    excluded_directory_names: Vec<String>,
    follow_symlinks: bool,
    skip_binary_files: bool,
    list_filenames_only: bool,
    show_line_numbers: bool,
    verbose_path_echo: bool,
    matcher_program: Option<String>,
    output_mode: OutputMode,
}

impl RequestBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn file_pattern(&mut self, file_pattern: impl Into<String>) -> &mut Self {
        self.file_pattern = Some(file_pattern.into());
        self
    }

    pub fn root_directory(&mut self, root: impl Into<PathBuf>) -> &mut Self {
        self.root_directory = Some(root.into());
        self
    }

    /// Add one exclusion, dropping any trailing slashes
    pub fn exclude(&mut self, name: &str) -> &mut Self {
        self.excluded_directory_names
            .push(name.trim_end_matches('/').to_string());
        self
    }

    pub fn follow_symlinks(&mut self) -> &mut Self {
        self.follow_symlinks = true;
        self
    }

    pub fn skip_binary_files(&mut self) -> &mut Self {
        self.skip_binary_files = true;
        self
    }

    pub fn list_filenames_only(&mut self) -> &mut Self {
        self.list_filenames_only = true;
        self
    }

    pub fn show_line_numbers(&mut self) -> &mut Self {
        self.show_line_numbers = true;
        self
    }

    pub fn verbose_path_echo(&mut self) -> &mut Self {
        self.verbose_path_echo = true;
        self
    }

    pub fn matcher_program(&mut self, program: impl Into<String>) -> &mut Self {
        self.matcher_program = Some(program.into());
        self
    }

    pub fn output_mode(&mut self, mode: OutputMode) -> &mut Self {
        self.output_mode = mode;
        self
    }

    /// Validate and freeze the request, filling defaults
    pub fn build(self, default_matcher: &str) -> Result<SearchRequest> {
        let pattern = self
            .pattern
            .ok_or_else(|| SearchError::usage("missing search string"))?;
        if pattern.is_empty() {
            return Err(SearchError::invalid_request("search string is empty"));
        }

        // File patterns follow find's fnmatch rules and are passed through
        // untouched; a pattern find rejects surfaces as its exit status.
        if self.file_pattern.as_deref() == Some("") {
            return Err(SearchError::invalid_request("file pattern is empty"));
        }

        if self.excluded_directory_names.iter().any(String::is_empty) {
            return Err(SearchError::invalid_request("empty directory exclusion"));
        }

        let matcher_program = self
            .matcher_program
            .unwrap_or_else(|| default_matcher.to_string());
        if matcher_program.trim().is_empty() {
            return Err(SearchError::invalid_request("matcher program is empty"));
        }

        let request = SearchRequest {
            pattern,
            file_pattern: self.file_pattern,
            root_directory: self.root_directory.unwrap_or_else(|| PathBuf::from(".")),
            excluded_directory_names: self.excluded_directory_names,
            follow_symlinks: self.follow_symlinks,
            skip_binary_files: self.skip_binary_files,
            list_filenames_only: self.list_filenames_only,
            show_line_numbers: self.show_line_numbers,
            verbose_path_echo: self.verbose_path_echo,
            matcher_program,
            output_mode: self.output_mode,
        };

        debug!("Resolved search request: {:?}", request);
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let mut builder = RequestBuilder::new();
        builder.pattern("needle");
        let request = builder.build("grep").unwrap();

        assert_eq!(request.pattern, "needle");
        assert_eq!(request.file_pattern, None);
        assert_eq!(request.root_directory, PathBuf::from("."));
        assert!(request.excluded_directory_names.is_empty());
        assert!(!request.follow_symlinks);
        assert!(!request.skip_binary_files);
        assert!(!request.list_filenames_only);
        assert!(!request.show_line_numbers);
        assert!(!request.verbose_path_echo);
        assert_eq!(request.matcher_program, "grep");
        assert_eq!(request.output_mode, OutputMode::Normal);
    }

    #[test]
    fn test_missing_pattern_is_usage_error() {
        let err = RequestBuilder::new().build("grep").unwrap_err();
        assert!(matches!(err, SearchError::Usage { .. }));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut builder = RequestBuilder::new();
        builder.pattern("");
        let err = builder.build("grep").unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_fnmatch_patterns_pass_through() {
        for glob in ["**.py", "a**", "[*.py", "*.[ch]"] {
            let mut builder = RequestBuilder::new();
            builder.pattern("x").file_pattern(glob);
            let request = builder.build("grep").unwrap();
            assert_eq!(request.file_pattern.as_deref(), Some(glob));
        }
    }

    #[test]
    fn test_empty_file_pattern_rejected() {
        let mut builder = RequestBuilder::new();
        builder.pattern("x").file_pattern("");
        let err = builder.build("grep").unwrap_err();
        assert!(matches!(err, SearchError::InvalidRequest { .. }));
    }

    #[test]
    fn test_exclusion_trailing_slashes_stripped() {
        let mut builder = RequestBuilder::new();
        builder.pattern("x").exclude("node_modules/").exclude("build//");
        let request = builder.build("grep").unwrap();
        assert_eq!(request.excluded_directory_names, ["node_modules", "build"]);
    }

    #[test]
    fn test_slash_only_exclusion_rejected() {
        let mut builder = RequestBuilder::new();
        builder.pattern("x").exclude("/");
        assert!(builder.build("grep").unwrap_err().is_usage());
    }

    #[test]
    fn test_matcher_override_beats_default() {
        let mut builder = RequestBuilder::new();
        builder.pattern("x").matcher_program("egrep");
        assert_eq!(builder.build("grep").unwrap().matcher_program, "egrep");
    }
}
