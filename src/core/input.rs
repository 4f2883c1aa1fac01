use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads the first line of `reader` without its line terminator.
/// Returns `None` when the input is empty; later lines are never read.
pub async fn read_first_line<R: AsyncBufRead + Unpin>(reader: R) -> Result<Option<String>> {
    let mut lines = reader.lines();
    let line = lines.next_line().await?;
    Ok(line.map(|l| l.trim_end_matches('\r').to_string()))
}
