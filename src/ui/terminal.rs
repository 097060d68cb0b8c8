//! Line-driven terminal front end.
//!
//! Every line typed on stdin is split into keys and fed to the calculator,
//! after which the display is redrawn. Lines starting with `:` are session
//! commands. Deferred tasks from the calculator arrive on a channel and are
//! handled between lines.

use super::keypad::{Keypad, KeypadHighlighter};
use super::render::{render_display, render_keypad};
use crate::calculator::{
    Calculator, DeferredTask, Input, ManualScheduler, Scheduler, TokioScheduler,
    copy_to_clipboard, parse_keys,
};
use crate::config::Config;
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::io::{BufRead, IsTerminal, Write};
use std::rc::Rc;

const HELP: &str = "\
keys:     0-9 .  + - * / (or − × ÷)  = enter  del <  esc c ac
commands: :copy  :help  :quit
";

/// What the session loop should do after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A calculator wired to a keypad and an output stream.
pub struct Session<W: Write> {
    calculator: Calculator,
    keypad: Rc<RefCell<Keypad>>,
    config: Config,
    styled: bool,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(scheduler: impl Scheduler + 'static, config: Config, styled: bool, out: W) -> Self {
        let keypad = Rc::new(RefCell::new(Keypad::standard()));
        let calculator = Calculator::new(scheduler)
            .with_error_clear_delay(config.error_clear_delay())
            .with_highlighter(KeypadHighlighter::new(Rc::clone(&keypad)));

        Self {
            calculator,
            keypad,
            config,
            styled,
            out,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Redraw the display, and the keypad if enabled.
    pub fn render(&mut self) -> Result<()> {
        let mut frame = render_display(&self.calculator.display(), self.styled);
        if self.config.show_keypad {
            frame.push('\n');
            frame.push_str(&render_keypad(&self.keypad.borrow()));
        }
        writeln!(self.out, "{}", frame).context("Failed to write display")?;
        self.out.flush().context("Failed to flush output")
    }

    /// Handle one line of input and redraw.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let trimmed = line.trim();
        if let Some(command) = trimmed.strip_prefix(':') {
            return self.handle_command(command.trim());
        }

        let parsed = parse_keys(trimmed);
        if !parsed.unknown.is_empty() {
            tracing::warn!("Ignoring unknown keys: {}", parsed.unknown.join(" "));
        }

        for input in parsed.inputs {
            self.apply(input);
        }

        self.render()?;
        Ok(Flow::Continue)
    }

    /// Handle a task delivered by the scheduler and redraw.
    pub fn handle_deferred(&mut self, task: DeferredTask) -> Result<()> {
        self.calculator.run_deferred(task);
        self.render()
    }

    fn apply(&mut self, input: Input) {
        let pending = self.calculator.operation().is_some();
        self.calculator.apply(input);

        if produced_result(input, pending, &self.calculator) && self.config.copy_results {
            self.copy_current();
        }
    }

    fn copy_current(&mut self) {
        let text = self.calculator.display().text_for_clipboard();
        match copy_to_clipboard(&text) {
            Ok(()) => tracing::info!("Copied {} to clipboard", text),
            Err(err) => tracing::warn!("{:#}", err),
        }
    }

    fn handle_command(&mut self, command: &str) -> Result<Flow> {
        match command {
            "q" | "quit" | "exit" => return Ok(Flow::Quit),
            "copy" => self.copy_current(),
            "help" | "h" => {
                write!(self.out, "{}", HELP).context("Failed to write help")?;
            }
            other => tracing::warn!("Unknown command :{}", other),
        }
        Ok(Flow::Continue)
    }
}

/// Whether `input` resolved an operation that was pending before it.
fn produced_result(input: Input, was_pending: bool, calculator: &Calculator) -> bool {
    input == Input::Equals
        && was_pending
        && calculator.operation().is_none()
        && !calculator.is_error()
}

/// Run the interactive calculator on stdin/stdout until EOF or `:quit`.
///
/// Must be called from within a tokio runtime.
pub async fn run_interactive(config: Config) -> Result<()> {
    let (scheduler, deferred) = TokioScheduler::new();
    let stdout = std::io::stdout();
    let styled = stdout.is_terminal();
    let mut session = Session::new(scheduler, config, styled, stdout);
    let lines = spawn_stdin_reader();

    tracing::info!("Calculator session started");
    session.render()?;

    loop {
        tokio::select! {
            line = lines.recv_async() => match line {
                Ok(line) => {
                    if session.handle_line(&line)? == Flow::Quit {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(task) = deferred.recv_async() => session.handle_deferred(task)?,
        }
    }

    tracing::info!("Calculator session ended");
    Ok(())
}

/// Feed `keys` to a fresh calculator and return the final display.
///
/// Unknown keys are an error. The returned flag is true when the calculator
/// ended in its error state.
pub fn run_keys(keys: &str, config: Config) -> Result<(String, bool)> {
    let parsed = parse_keys(keys);
    if !parsed.unknown.is_empty() {
        anyhow::bail!("Unknown keys: {}", parsed.unknown.join(" "));
    }

    let mut session = Session::new(ManualScheduler::new(), config, false, std::io::sink());
    for input in parsed.inputs {
        session.apply(input);
    }

    let display = session.calculator().display();
    Ok((display.current_text, display.is_error))
}

fn spawn_stdin_reader() -> flume::Receiver<String> {
    let (sender, receiver) = flume::unbounded();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
    });
    receiver
}
