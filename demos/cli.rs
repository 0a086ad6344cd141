use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let interpreter = risp_lite::Interpreter::new();

    loop {
        print!("> ");
        if let Err(err) = io::stdout().flush() {
            eprintln!("failed to flush stdout: {}", err);
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Err(err) => {
                println!("failed to read: {}", err);
                break;
            }
            Ok(0) => {
                println!("exit");
                break;
            },
            Ok(_) if line.trim().is_empty() => continue,
            Ok(_) => match interpreter.run(&line) {
                Ok(output) => println!("{}", output),
                Err(err) => println!("{}", err),
            },
        }
    }
}
