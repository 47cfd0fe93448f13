//! Running a critic model and capturing its answer.

use std::{
  io::Write as _,
  path::PathBuf,
  process::{Command, Stdio},
  thread,
};

use tracing::{debug, warn};

use crate::{Error, Result};

/// Something that can put a prompt to a model and return its text answer.
pub trait CriticRunner: Send + Sync {
  fn run(&self, model: &str, prompt: &str) -> Result<String>;
}

impl<F> CriticRunner for F
where
  F: Fn(&str, &str) -> Result<String> + Send + Sync,
{
  fn run(&self, model: &str, prompt: &str) -> Result<String> { self(model, prompt) }
}

/// Runs critics through the `ollama` command-line client.
///
/// Each call spawns `<program> run <model>`, writes the prompt to its stdin,
/// and returns the trimmed stdout. A non-zero exit status is logged but the
/// captured output is still returned, so a partial answer parses to a
/// partially filled record instead of failing the evaluation.
#[derive(Debug, Clone)]
pub struct OllamaRunner {
  program: PathBuf,
}

impl OllamaRunner {
  pub fn new(program: impl Into<PathBuf>) -> Self { Self { program: program.into() } }
}

impl Default for OllamaRunner {
  fn default() -> Self { Self::new("ollama") }
}

impl CriticRunner for OllamaRunner {
  fn run(&self, model: &str, prompt: &str) -> Result<String> {
    let spawn_err = |source| Error::Spawn { model: model.to_owned(), source };

    let mut child = Command::new(&self.program)
      .arg("run")
      .arg(model)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .map_err(spawn_err)?;

    // Feed stdin from its own thread so a chatty model cannot fill the
    // stdout pipe while we are still writing.
    let writer = child.stdin.take().map(|mut stdin| {
      let prompt = prompt.as_bytes().to_vec();
      thread::spawn(move || stdin.write_all(&prompt))
    });

    let output = child.wait_with_output().map_err(spawn_err)?;

    if let Some(writer) = writer {
      match writer.join() {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(model, error = %e, "failed to write prompt to critic"),
        Err(_) => warn!(model, "prompt writer thread panicked"),
      }
    }

    if !output.status.success() {
      warn!(
        model,
        status = %output.status,
        stderr = %String::from_utf8_lossy(&output.stderr).trim(),
        "critic process exited unsuccessfully"
      );
    }

    let answer = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    debug!(model, bytes = answer.len(), "critic answered");
    Ok(answer)
  }
}
