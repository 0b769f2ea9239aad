use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use anyhow::Result;

use minuta::cli::StartupConfig;
use minuta::commands::Cmd;
use minuta::export;
use minuta::generation::DocumentGenerator;
use minuta::messages::{AppMsg, ExportMsg, Msg, UiMsg};
use minuta::model::AppModel;
use minuta::update::update;
use minuta::view;
use minuta::ReviewConfig;

use super::input::{parse_line, Input, HELP};

pub struct App<G: DocumentGenerator> {
    model: AppModel,
    generator: Arc<G>,
    startup: StartupConfig,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Background commands whose completion message has not arrived yet
    in_flight: usize,
}

impl<G: DocumentGenerator> App<G> {
    pub fn new(config: ReviewConfig, startup: StartupConfig, generator: G) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let mut config = config;
        if let Some(dir) = &startup.export_dir {
            config.export_dir = Some(dir.clone());
        }

        Self {
            model: AppModel::new(config),
            generator: Arc::new(generator),
            startup,
            msg_tx,
            msg_rx,
            in_flight: 0,
        }
    }

    /// Run the update loop and perform the resulting command
    /// Returns true if the view needs a redraw
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let needs_redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                needs_redraw
            }
            None => false,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::Generate { source, options } => {
                let tx = self.msg_tx.clone();
                let generator = Arc::clone(&self.generator);
                self.in_flight += 1;
                std::thread::spawn(move || {
                    let result = generator
                        .generate(&source, &options)
                        .map_err(|e| e.to_string());
                    let _ = tx.send(Msg::App(AppMsg::GenerationCompleted(result)));
                });
            }
            Cmd::CopyToClipboard { content } => {
                let tx = self.msg_tx.clone();
                self.in_flight += 1;
                std::thread::spawn(move || {
                    let result = export::write_clipboard(&content).map_err(|e| e.to_string());
                    let _ = tx.send(Msg::Export(ExportMsg::CopyCompleted(result)));
                });
            }
            Cmd::WriteExport { path, content } => {
                let tx = self.msg_tx.clone();
                self.in_flight += 1;
                std::thread::spawn(move || {
                    let result = export::write_file(&path, &content).map_err(|e| e.to_string());
                    let _ = tx.send(Msg::Export(ExportMsg::DownloadCompleted(result)));
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Wait for every background command and feed its completion back in
    /// Returns true if any completion needs a redraw
    pub fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while self.in_flight > 0 {
            let Ok(msg) = self.msg_rx.recv() else {
                tracing::warn!("worker channel closed with {} pending", self.in_flight);
                self.in_flight = 0;
                break;
            };
            self.in_flight -= 1;
            if self.dispatch(msg) {
                needs_redraw = true;
            }
        }
        needs_redraw
    }

    fn render(&mut self, out: &mut impl Write) -> Result<()> {
        self.dispatch(Msg::Ui(UiMsg::Tick));
        writeln!(out, "{}", view::render(&self.model))?;
        out.flush()?;
        Ok(())
    }

    /// Read commands line by line until `:quit` or end of input
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        if let Some(source) = self.startup.source.clone() {
            let options = self.startup.options;
            self.dispatch(Msg::App(AppMsg::Generate { source, options }));
            self.process_async_messages();
        }
        self.render(&mut out)?;

        for line in input.lines() {
            let line = line?;
            let Some(action) = parse_line(&line, self.startup.options) else {
                continue;
            };

            match action {
                Input::Quit => {
                    self.dispatch(Msg::App(AppMsg::Quit));
                    break;
                }
                Input::Help => {
                    writeln!(out, "{}", HELP)?;
                }
                Input::Show => self.render(&mut out)?,
                Input::Html => {
                    writeln!(out, "{}", view::render_html(&self.model))?;
                }
                Input::Msg(msg) => {
                    let mut redraw = self.dispatch(msg);
                    redraw |= self.process_async_messages();
                    if redraw {
                        self.render(&mut out)?;
                    }
                }
            }
        }

        tracing::debug!("input closed, exiting");
        Ok(())
    }
}
