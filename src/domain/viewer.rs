use std::fmt;

/// How `open` presents a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// Print the file to stdout.
    Terminal { line_numbers: bool },
    /// Hand the absolute path to an external program.
    Editor { program: String, wait: bool },
}

impl Viewer {
    /// Choices offered by the interactive viewer picker.
    pub const CHOICES: [&'static str; 3] = ["terminal", "code", "vim"];

    /// Resolve a viewer from its name.
    ///
    /// `terminal` (or an empty name) prints in place. `code` detaches because it
    /// returns immediately; everything else is treated as a terminal editor and
    /// waited on.
    pub fn from_name(name: &str, line_numbers: bool) -> Viewer {
        let trimmed = name.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "terminal" | "default" => Viewer::Terminal { line_numbers },
            "code" => Viewer::Editor { program: "code".to_string(), wait: false },
            _ => Viewer::Editor { program: trimmed.to_string(), wait: true },
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Viewer::Terminal { line_numbers: true }
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Viewer::Terminal { .. } => write!(f, "terminal"),
            Viewer::Editor { program, .. } => write!(f, "{}", program),
        }
    }
}

/// Format one line for terminal display.
pub fn format_line(number: usize, line: &str, line_numbers: bool) -> String {
    if line_numbers { format!("{:>4} | {}", number, line) } else { line.to_string() }
}
