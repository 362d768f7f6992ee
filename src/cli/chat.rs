use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{AnthropicBackend, Session, SubmitError};
use crate::core::AppConfig;

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = AppConfig::default();
    let mut session = Session::new(AnthropicBackend::new(config));

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => match session.submit(line.as_str()).await {
                Ok(reply) => println!("{}", reply.content),
                // Blank lines are ignored rather than sent
                Err(SubmitError::EmptyInput) => continue,
                Err(err) => {
                    println!("Error: {}", err);
                    break;
                }
            },
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
