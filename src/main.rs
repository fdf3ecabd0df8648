use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use legalchat::{
    AzureOpenAiProvider, ChatCompletionProvider, CompletionOptions, GetResponseUseCase,
    MockChatProvider, Transcript,
};

#[derive(Parser)]
#[command(name = "legalchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer with a canned offline reply instead of calling Azure OpenAI.
    #[arg(long, global = true)]
    mock: bool,

    /// Deployment (model) name; defaults to AZURE_OPENAI_MODEL_NAME or gpt-4.
    #[arg(short, long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question, optionally with prior turns for context.
    Ask {
        question: String,

        /// Prior conversation turn, oldest first, alternating strictly
        /// user/assistant. Repeat the flag once per turn.
        #[arg(short = 't', long = "turn")]
        turns: Vec<String>,
    },

    /// Interactive conversation on stdin. Type "exit" to quit.
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let provider: Arc<dyn ChatCompletionProvider> = if cli.mock {
        info!("Using mock chat provider");
        Arc::new(MockChatProvider::new(
            "This is a canned reply from the mock provider.",
        ))
    } else {
        Arc::new(AzureOpenAiProvider::from_env()?)
    };

    let model = cli
        .model
        .unwrap_or_else(AzureOpenAiProvider::deployment_from_env);
    let use_case = GetResponseUseCase::new(provider, CompletionOptions::new(model));

    match cli.command {
        Commands::Ask { question, turns } => {
            let transcript = Transcript::from_turns(turns);
            let reply = use_case.execute(transcript.turns(), &question).await?;
            println!("{reply}");
        }

        Commands::Chat => {
            run_chat_loop(&use_case).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn ask_accepts_repeated_turn_flags() {
        let res = Cli::try_parse_from([
            "legalchat", "ask", "Q2", "--turn", "Q1", "--turn", "A1",
        ]);
        assert!(res.is_ok());
    }

    #[test]
    fn chat_takes_no_positional_arguments() {
        let res = Cli::try_parse_from(["legalchat", "chat", "extra"]);
        assert!(res.is_err());
    }
}

/// Read questions from stdin until EOF or "exit", keeping the transcript so
/// each request carries the full conversation so far.
async fn run_chat_loop(use_case: &GetResponseUseCase) -> Result<()> {
    let stdin = std::io::stdin();
    let mut transcript = Transcript::new();

    println!("legalchat — ask a legal question (type \"exit\" to quit)\n");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        match use_case.execute(transcript.turns(), input).await {
            Ok(reply) => {
                println!("\n{reply}\n");
                transcript.record_exchange(input, reply);
            }
            Err(e) => {
                // Per-request provider failures are not fatal to the session;
                // the user decides whether to retry.
                eprintln!("error: {e}");
            }
        }
    }

    Ok(())
}
