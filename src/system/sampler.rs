use std::process::{ExitStatus, Stdio};

use thiserror::Error;
use tokio::process::Command;

use super::process::{ProcessRecord, parse_ps_output};
use crate::config::SamplerConfig;

/// The process table could not be read.
#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{program}` exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Anything that can produce one snapshot of the process table.
pub trait ProcessSource {
    fn sample(&mut self) -> impl Future<Output = Result<Vec<ProcessRecord>, SamplerError>>;
}

/// Runs an external `ps`-style command and parses its `RSS COMMAND` output.
#[derive(Clone, Debug)]
pub struct PsSampler {
    program: String,
    args: Vec<String>,
}

impl Default for PsSampler {
    fn default() -> Self {
        Self::from_config(&SamplerConfig::default())
    }
}

impl PsSampler {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &SamplerConfig) -> Self {
        Self::new(config.program.clone(), config.args.iter().cloned())
    }

    /// Raw stdout of the command. Stderr is discarded.
    pub async fn run(&self) -> Result<String, SamplerError> {
        tracing::debug!(program = %self.program, args = ?self.args, "spawning sampler");

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|source| SamplerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SamplerError::Failed {
                program: self.program.clone(),
                status: output.status,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ProcessSource for PsSampler {
    async fn sample(&mut self) -> Result<Vec<ProcessRecord>, SamplerError> {
        let raw = self.run().await?;
        Ok(parse_ps_output(&raw))
    }
}
