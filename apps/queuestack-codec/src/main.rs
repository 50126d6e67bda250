//! queuestack-codec - decode and encode queue storage XML payloads.
//!
//! Reads a payload from stdin, runs one codec operation and writes the result
//! to stdout: JSON for decoded responses, XML for encoded request bodies.
//! Logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! curl -s "$QUEUE_URL/myqueue/messages?$SAS" | queuestack-codec decode-messages
//! printf 'hello' | QUEUE_MESSAGE_ENCODING=base64 queuestack-codec encode-message
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QUEUE_MESSAGE_ENCODING` | `text` | `text` or `base64` message text |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use queuestack_queue_xml::{QueueXmlCodec, QueueXmlConfig};

/// Version reported in the startup log line.
const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "usage: queuestack-codec <command> < input

commands:
  decode-messages   QueueMessagesList XML -> JSON array
  decode-message    QueueMessage XML -> JSON
  decode-queues     EnumerationResults XML -> JSON
  decode-queue      Queue XML -> JSON
  decode-acl        SignedIdentifiers XML -> JSON array
  decode-error      Error XML -> JSON
  encode-message    raw text -> QueueMessage XML";

/// One codec operation, selected by the first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    DecodeMessages,
    DecodeMessage,
    DecodeQueues,
    DecodeQueue,
    DecodeAcl,
    DecodeError,
    EncodeMessage,
}

impl Command {
    fn parse(arg: &str) -> Option<Self> {
        match arg {
            "decode-messages" => Some(Self::DecodeMessages),
            "decode-message" => Some(Self::DecodeMessage),
            "decode-queues" => Some(Self::DecodeQueues),
            "decode-queue" => Some(Self::DecodeQueue),
            "decode-acl" => Some(Self::DecodeAcl),
            "decode-error" => Some(Self::DecodeError),
            "encode-message" => Some(Self::EncodeMessage),
            _ => None,
        }
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `log_level`.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

fn write_json<T: Serialize, W: Write>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to write JSON output")?;
    writeln!(out)?;
    Ok(())
}

/// Run `command` over `input`, writing the result to `out`.
fn run<W: Write>(command: Command, codec: &QueueXmlCodec, input: &[u8], out: &mut W) -> Result<()> {
    match command {
        Command::DecodeMessages => {
            let messages = codec
                .decode_message_list(input)
                .context("failed to decode QueueMessagesList")?;
            write_json(out, &messages)
        }
        Command::DecodeMessage => {
            let message = codec
                .decode_message(input)
                .context("failed to decode QueueMessage")?;
            write_json(out, &message)
        }
        Command::DecodeQueues => {
            let results = codec
                .decode_queue_enumeration(input)
                .context("failed to decode EnumerationResults")?;
            write_json(out, &results)
        }
        Command::DecodeQueue => {
            let queue = codec
                .decode_queue(input)
                .context("failed to decode Queue")?;
            write_json(out, &queue)
        }
        Command::DecodeAcl => {
            let identifiers = codec
                .decode_signed_identifiers(input)
                .context("failed to decode SignedIdentifiers")?;
            write_json(out, &identifiers)
        }
        Command::DecodeError => {
            let error = codec
                .decode_storage_error(input)
                .context("failed to decode Error")?;
            info!(%error, "decoded service error");
            write_json(out, &error)
        }
        Command::EncodeMessage => {
            let text = std::str::from_utf8(input).context("message text is not UTF-8")?;
            let body = codec
                .encode_message_body(text)
                .context("failed to encode QueueMessage")?;
            out.write_all(&body)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let Some(command) = std::env::args().nth(1).as_deref().and_then(Command::parse) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_owned());
    init_tracing(&log_level)?;

    let config = QueueXmlConfig::from_env();
    debug!(
        ?command,
        message_encoding = %config.message_encoding,
        version = VERSION,
        "starting queuestack-codec",
    );

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("failed to read stdin")?;

    let codec = QueueXmlCodec::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(command, &codec, &input, &mut out)?;
    out.flush()?;

    Ok(())
}
