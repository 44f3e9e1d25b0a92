use crate::error::{FlushOutputSnafu, ReadLineSnafu, SmsResult, WriteOutputSnafu};
use snafu::ResultExt;
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

///the only way the session talks to a person
pub trait Console {
    ///shows `text` with no newline and waits for the next line.
    ///
    ///`Ok(None)` means the input ran out
    async fn prompt(&mut self, text: &str) -> SmsResult<Option<String>>;
    async fn print(&mut self, text: &str) -> SmsResult<()>;
    async fn close(&mut self) -> SmsResult<()>;
}

#[derive(Debug)]
pub struct LineConsole<R, W> {
    input: BufReader<R>,
    output: W,
}

impl LineConsole<Stdin, Stdout> {
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R: AsyncRead + Unpin, W: AsyncWrite + Unpin> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: BufReader::new(input),
            output,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    async fn write(&mut self, text: &str) -> SmsResult<()> {
        self.output
            .write_all(text.as_bytes())
            .await
            .context(WriteOutputSnafu)
    }

    async fn flush(&mut self) -> SmsResult<()> {
        self.output.flush().await.context(FlushOutputSnafu)
    }
}

impl<R: AsyncRead + Unpin, W: AsyncWrite + Unpin> Console for LineConsole<R, W> {
    async fn prompt(&mut self, text: &str) -> SmsResult<Option<String>> {
        self.write(text).await?;
        self.flush().await?;

        let mut line = vec![];
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .await
            .context(ReadLineSnafu)?;
        if read == 0 {
            return Ok(None);
        }

        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }

        //names are never validated, so bad bytes get replaced rather than rejected
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    async fn print(&mut self, text: &str) -> SmsResult<()> {
        self.write(text).await?;
        self.write("\n").await
    }

    async fn close(&mut self) -> SmsResult<()> {
        self.flush().await?;
        self.output.shutdown().await.context(FlushOutputSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prompt_writes_text_and_reads_one_line() {
        let mut console = LineConsole::new(&b"Ana\r\nMath101\n"[..], Vec::new());

        assert_eq!(
            console.prompt("Enter student name: ").await.unwrap(),
            Some("Ana".to_string())
        );
        assert_eq!(
            console.prompt("Enter course name: ").await.unwrap(),
            Some("Math101".to_string())
        );
        assert_eq!(console.prompt("more? ").await.unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Enter student name: Enter course name: more? ");
    }

    #[tokio::test]
    async fn lines_keep_inner_whitespace() {
        let mut console = LineConsole::new(&b"  Ana  Maria \n\n"[..], Vec::new());
        assert_eq!(
            console.prompt("").await.unwrap().as_deref(),
            Some("  Ana  Maria ")
        );
        assert_eq!(console.prompt("").await.unwrap().as_deref(), Some(""));
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced_not_fatal() {
        let mut console = LineConsole::new(&b"An\xffa\nlast"[..], Vec::new());
        assert_eq!(
            console.prompt("").await.unwrap().as_deref(),
            Some("An\u{FFFD}a")
        );
        assert_eq!(console.prompt("").await.unwrap().as_deref(), Some("last"));
        assert_eq!(console.prompt("").await.unwrap(), None);
    }

    #[tokio::test]
    async fn print_appends_newline() {
        let mut console = LineConsole::new(&b""[..], Vec::new());
        console.print("Options:").await.unwrap();
        console.print("").await.unwrap();
        console.close().await.unwrap();
        assert_eq!(console.into_output(), b"Options:\n\n");
    }
}
