use thiserror::Error;

#[derive(Debug, Clone)]
pub struct ExecError {
    pub tool: String,
    pub args: Vec<String>,
    pub reason: String,
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.tool, self.args.join(" "), self.reason)
    }
}

#[derive(Error, Debug)]
pub enum EsdrasError {
    #[error("failed to launch {0}")]
    Exec(ExecError),

    #[error("layout failure: {0}")]
    Layout(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
