use tyb_core::{OutputLines, TaskId};

/// The fixed set of queries the proxy sends upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCommand {
    /// `board --json`
    Board,
    /// `show <id> --json`
    Show(TaskId),
    /// `output <id> --lines <n>`
    Output(TaskId, OutputLines),
    /// `--version`, used as a liveness probe
    Version,
}

impl BoardCommand {
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Board => vec!["board".into(), "--json".into()],
            Self::Show(id) => vec!["show".into(), id.to_string(), "--json".into()],
            Self::Output(id, lines) => vec![
                "output".into(),
                id.to_string(),
                "--lines".into(),
                lines.to_string(),
            ],
            Self::Version => vec!["--version".into()],
        }
    }
}
