//! IP address input from stdin
//!
//! `create`, `update` and `createorupdate` fall back to reading the address
//! from stdin when `-ip` is absent and stdin is not a terminal, so that
//! `curl -s https://ip.example | addrctl update -domain example.com` works.
//!
//! Only the first whitespace-delimited token is read. The process does not
//! wait for the writer to close the pipe.

use async_trait::async_trait;
use std::io::{ErrorKind, IsTerminal};
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};

/// Upper bound on bytes consumed from stdin, leading whitespace included
pub(crate) const MAX_INPUT_BYTES: u64 = 256;

/// Source of an IP address when none was given on the command line
#[async_trait]
pub trait IpInput: Send + Sync {
    /// The first whitespace-delimited token, if any input is available
    async fn read_ip(&self) -> Option<String>;
}

/// Reads piped stdin; never blocks on an interactive terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinInput;

#[async_trait]
impl IpInput for StdinInput {
    async fn read_ip(&self) -> Option<String> {
        if std::io::stdin().is_terminal() {
            return None;
        }

        match read_token(tokio::io::stdin()).await {
            Ok(token) => token,
            Err(e) => {
                tracing::debug!("Failed to read IP address from stdin: {}", e);
                None
            }
        }
    }
}

/// Read the first whitespace-delimited token from `reader`
///
/// Returns as soon as the token is terminated by whitespace, end of input or
/// the [`MAX_INPUT_BYTES`] cap.
pub(crate) async fn read_token<R>(reader: R) -> std::io::Result<Option<String>>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader.take(MAX_INPUT_BYTES));
    let mut token = Vec::new();

    loop {
        let byte = match reader.read_u8().await {
            Ok(byte) => byte,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        };

        if byte.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(byte);
    }

    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}
