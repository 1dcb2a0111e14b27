use std::io::Read;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use sectok_core::constants::HEADER_KEY;
use sectok_core::headers::{extract_str, inject};
use sectok_core::token::SecretToken;
use sectok_core::SectokError;

use crate::commands::{Cli, Commands, HeaderCommand, STDIN_MARKER};

/// Result of one command: what goes to stdout and whether the exit status is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub success: bool,
}

impl Outcome {
    fn ok(stdout: String) -> Self {
        Self { stdout, success: true }
    }
}

#[derive(Serialize)]
struct UriOutput<'a> {
    uri: &'a str,
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    payload: &'a str,
    canonical: &'a str,
}

#[derive(Serialize)]
struct CompareOutput {
    equal: bool,
}

#[derive(Serialize)]
struct HeaderOutput<'a> {
    header: &'a str,
    value: &'a str,
}

/// Run the parsed command. `stdin` is read only when an argument is `-`.
pub fn run<R: Read>(cli: &Cli, stdin: &mut R) -> Result<Outcome> {
    let mut input = Input { stdin, consumed: false };
    let command = cli.command.name();

    match &cli.command {
        Commands::Encode { input: raw } => {
            let raw = input.bytes(raw)?;
            let token = SecretToken::from_bytes(raw).map_err(|e| reject(command, e))?;
            let uri = token.serialize();
            info!(command, len = token.expose_secret_bytes().len(), "encoded token");
            render(cli.json, &UriOutput { uri: &uri }, uri.clone())
        }
        Commands::Parse { input: uri } => {
            let uri = input.text(uri)?;
            let token = SecretToken::parse(&uri).map_err(|e| reject(command, e))?;
            let canonical = token.serialize();
            info!(command, len = token.expose_secret_bytes().len(), "parsed token");
            render(
                cli.json,
                &ParseOutput { payload: token.expose_secret(), canonical: &canonical },
                token.expose_secret().to_owned(),
            )
        }
        Commands::Compare { left, right } => {
            let left = SecretToken::parse(&input.text(left)?).map_err(|e| reject(command, e))?;
            let right = SecretToken::parse(&input.text(right)?).map_err(|e| reject(command, e))?;
            let equal = left.equals(&right);
            info!(command, equal, "compared tokens");
            let text = if equal { "equal" } else { "different" };
            let mut outcome = render(cli.json, &CompareOutput { equal }, text.to_owned())?;
            outcome.success = equal;
            Ok(outcome)
        }
        Commands::Header(HeaderCommand::Inject { input: uri }) => {
            let token = SecretToken::parse(&input.text(uri)?).map_err(|e| reject(command, e))?;
            let value = inject(&token);
            info!(command, "built header value");
            render(
                cli.json,
                &HeaderOutput { header: HEADER_KEY.as_str(), value: &value },
                value.clone(),
            )
        }
        Commands::Header(HeaderCommand::Extract { input: value }) => {
            let value = input.text(value)?;
            let token = extract_str(&value).map_err(|e| reject(command, e))?;
            let uri = token.serialize();
            info!(command, len = token.expose_secret_bytes().len(), "extracted token");
            render(cli.json, &UriOutput { uri: &uri }, uri.clone())
        }
    }
}

/// Log the failure kind (never the input) and convert for the caller.
fn reject(command: &'static str, err: impl Into<SectokError>) -> anyhow::Error {
    let err = err.into();
    warn!(command, kind = %err.kind(), "input rejected");
    anyhow::Error::new(err)
}

fn render<T: Serialize>(json: bool, value: &T, text: String) -> Result<Outcome> {
    if json {
        let out = serde_json::to_string(value).context("failed to serialize output")?;
        Ok(Outcome::ok(out))
    } else {
        Ok(Outcome::ok(text))
    }
}

struct Input<'a, R> {
    stdin: &'a mut R,
    consumed: bool,
}

impl<R: Read> Input<'_, R> {
    /// Argument bytes, or stdin bytes for `-` (one trailing newline stripped).
    fn bytes(&mut self, arg: &str) -> Result<Vec<u8>> {
        if arg != STDIN_MARKER {
            return Ok(arg.as_bytes().to_vec());
        }
        if self.consumed {
            bail!("stdin (`-`) can only be used for one argument");
        }
        self.consumed = true;

        let mut buf = Vec::new();
        self.stdin.read_to_end(&mut buf).context("failed to read stdin")?;
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        debug!(len = buf.len(), "read input from stdin");
        Ok(buf)
    }

    fn text(&mut self, arg: &str) -> Result<String> {
        let bytes = self.bytes(arg)?;
        String::from_utf8(bytes).context("input is not valid UTF-8")
    }
}
