use logis_rag::RagChain;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const EXAMPLE_QUESTIONS: [&str; 3] = [
    "Combien de chambres sont disponibles ?",
    "Qui occupe la chambre 102 ?",
    "Quelles sont les chambres disponibles au bâtiment D ?",
];

pub const EXIT_KEYWORDS: [&str; 3] = ["exit", "quit", "q"];

fn is_exit(line: &str) -> bool {
    EXIT_KEYWORDS
        .iter()
        .any(|keyword| line.eq_ignore_ascii_case(keyword))
}

/// Answers the example questions, then every line read from `input` until an
/// exit keyword or end of input. Pipeline errors are printed and the loop
/// goes on; only I/O errors end it early.
pub async fn run_terminal<R, W>(chain: &RagChain, input: R, output: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(b"=== TEST RAG TERMINAL ===\n").await?;
    for (index, question) in EXAMPLE_QUESTIONS.iter().enumerate() {
        let n = index + 1;
        output
            .write_all(format!("\n[Q{n}] {question}\n").as_bytes())
            .await?;
        let line = match chain.invoke(question).await {
            Ok(answer) => format!("[R{n}] {answer}\n"),
            Err(err) => format!("[ERREUR] {err}\n"),
        };
        output.write_all(line.as_bytes()).await?;
    }

    output
        .write_all(b"\n\n=== MODE INTERACTIF ===\nTapez 'exit' pour quitter\n\n")
        .await?;

    let mut lines = input.lines();
    loop {
        output.write_all(b"Votre question: ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let question = line.trim();
        if is_exit(question) {
            output.write_all(b"Au revoir!\n").await?;
            break;
        }
        if question.is_empty() {
            continue;
        }

        let reply = match chain.invoke(question).await {
            Ok(answer) => format!("\n{answer}\n\n"),
            Err(err) => {
                tracing::error!(error = %err, "terminal question failed");
                format!("ERREUR: {err}\n\n")
            }
        };
        output.write_all(reply.as_bytes()).await?;
    }
    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::is_exit;

    #[test]
    fn exit_keywords_ignore_case() {
        assert!(is_exit("exit"));
        assert!(is_exit("QUIT"));
        assert!(is_exit("Q"));
        assert!(!is_exit("quitter"));
        assert!(!is_exit(""));
    }
}
