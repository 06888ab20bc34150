use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::selector::Selector;
use crate::utils::logger::{LogLevel, Logger};
use crate::version::bump_version;
use crate::version::error::BumpError;

/// Per-run counters. `processed` only counts non-empty lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub bumped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Bumps every version line from `input` into `output`, in order.
///
/// A line that fails to bump, including one that is not valid UTF-8, is
/// logged and skipped; only I/O errors stop the stream.
pub async fn bump_lines<R, W>(
    mut input: R,
    output: &mut W,
    selector: Selector,
    logger: &Logger,
) -> io::Result<Summary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = Summary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = trim_line_end(&buf);
        if line.is_empty() {
            continue;
        }
        summary.processed += 1;

        match bump_raw_line(line, selector) {
            Ok(bumped) => {
                logger.debug(&format!(
                    "{} -> {}",
                    String::from_utf8_lossy(line),
                    bumped
                ));
                output.write_all(bumped.as_bytes()).await?;
                output.write_all(b"\n").await?;
                summary.bumped += 1;
            }
            Err(e) => {
                logger.log_message(LogLevel::Error, &format!("error bumping version: {}", e));
                summary.failed += 1;
            }
        }
    }

    output.flush().await?;
    Ok(summary)
}

/// Drops a trailing `\n` or `\r\n`.
fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn bump_raw_line(line: &[u8], selector: Selector) -> Result<String, BumpError> {
    let text = std::str::from_utf8(line)?;
    bump_version(text, selector)
}
