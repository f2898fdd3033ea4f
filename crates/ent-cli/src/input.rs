//! Where the bytes come from: named files or standard input.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// One input to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Map command-line operands to inputs; none (or `-`) means standard input.
    pub fn from_args(files: &[PathBuf]) -> Vec<Input> {
        if files.is_empty() {
            return vec![Input::Stdin];
        }
        files
            .iter()
            .map(|f| {
                if f.as_os_str() == "-" {
                    Input::Stdin
                } else {
                    Input::File(f.clone())
                }
            })
            .collect()
    }

    /// Display name used in reports.
    pub fn name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole input into memory.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Input::Stdin => {
                let mut data = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut data)
                    .context("failed to read standard input")?;
                Ok(data)
            }
            Input::File(path) => std::fs::read(path)
                .with_context(|| format!("cannot read '{}'", path.display())),
        }
    }
}
