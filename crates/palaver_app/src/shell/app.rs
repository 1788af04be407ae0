use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use palaver_core::{chat_endpoint, init, update, Msg};
use palaver_logging::page_info;

use super::effects::EffectRunner;
use super::render::Renderer;
use super::{Input, Settings};

pub fn run_app(settings: Settings) -> anyhow::Result<()> {
    let chat_url = chat_endpoint(&settings.server, &settings.session_id)?;
    page_info!("Starting shell against {}", settings.server);

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let runner = EffectRunner::new(settings.clone(), input_tx.clone());
    spawn_stdin_reader(input_tx);

    print_banner(&settings);

    let (mut state, effects) = init(chat_url);
    runner.run(effects);

    let stdout = std::io::stdout();
    let mut renderer = Renderer::new();
    renderer.render(&state.view(), &mut stdout.lock())?;

    loop {
        let input = match input_rx.recv() {
            Ok(input) => input,
            Err(_) => break,
        };
        match input {
            Input::Quit => break,
            Input::Core(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.run(effects);
                if state.consume_dirty() {
                    renderer.render(&state.view(), &mut stdout.lock())?;
                }
            }
        }
    }

    page_info!("Shell exiting");
    Ok(())
}

fn print_banner(settings: &Settings) {
    println!("Palaver — chatting as {} via {}", settings.session_id, settings.server);
    println!("Type a message to send it.");
    println!("Commands: /upload <path> [--ocr], /open, /quit");
}

/// Reads stdin lines and turns them into page messages.
///
/// A plain line is a draft edit plus submit; `/`-prefixed lines are the
/// form controls the original page exposed as buttons.
fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let inputs = parse_line(&line);
            for input in inputs {
                if input_tx.send(input).is_err() {
                    return;
                }
            }
        }
        let _ = input_tx.send(Input::Quit);
    });
}

fn parse_line(line: &str) -> Vec<Input> {
    let trimmed = line.trim();
    match trimmed {
        "/quit" | "/exit" => vec![Input::Quit],
        "/open" => vec![Input::Core(Msg::DownloadRequested)],
        _ if trimmed.starts_with("/upload") => {
            let rest = trimmed.trim_start_matches("/upload").trim();
            let mut use_ocr = false;
            let mut parts = Vec::new();
            for word in rest.split_whitespace() {
                if word == "--ocr" {
                    use_ocr = true;
                } else {
                    parts.push(word);
                }
            }
            // Submitting with no path mirrors submitting the form with no
            // file selected.
            let file = if parts.is_empty() {
                None
            } else {
                Some(PathBuf::from(parts.join(" ")))
            };
            vec![Input::Core(Msg::UploadSubmitted { file, use_ocr })]
        }
        _ => vec![
            Input::Core(Msg::DraftChanged(line.to_string())),
            Input::Core(Msg::DraftSubmitted),
        ],
    }
}
