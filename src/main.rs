//! Terminal front-end
//!
//! Reads one command per line, turns it into a message and prints the dropdown,
//! the layout and any open dialog.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use fiddle::cli::{CliArgs, StartupMode};
use fiddle::files::NativeDialogs;
use fiddle::ipc::{IpcEvent, IpcEventKind};
use fiddle::messages::{AppMsg, DialogMsg, MenuMsg, MosaicMsg, Msg};
use fiddle::model::{AppModel, EditorId};
use fiddle::view::{describe_layout, describe_panels, render_menu, MENU_BUTTON};
use fiddle::{EditorConfig, Runtime};

const HELP: &str = "\
commands:
  menu                 show the editors dropdown
  toggle <file>        show or hide an editor
  remove <file>        remove an editor
  add                  add an editor
  reset                reset the layout
  layout               show the panel layout
  cat <file>           print an editor
  edit <file> <text>   replace an editor's content
  resize <w> <h>       resize the window
  open                 open a fiddle folder
  save                 save the fiddle
  save-as <label>      save the fiddle under a new folder
  quit";

fn main() -> Result<()> {
    let args = CliArgs::parse();
    fiddle::tracing::init();

    let mode = args.into_mode().map_err(anyhow::Error::msg)?;
    let config = EditorConfig::load();
    let mut runtime = Runtime::new(AppModel::new(config), Box::new(NativeDialogs));

    if let StartupMode::Project(path) = mode {
        tracing::info!("Opening {} from the command line", path.display());
        runtime
            .ipc_sender()
            .send(IpcEvent::new(IpcEventKind::OpenRequested, path));
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    println!("{}", HELP);

    loop {
        runtime.process_async_messages()?;
        answer_dialogs(&mut runtime, &mut lines)?;
        print_status(runtime.model());

        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;
        let Some(line) = lines.next() else { break };
        let line = line.context("Failed to read command")?;

        let mut words = line.split_whitespace();
        let msg = match (words.next(), words.next()) {
            (None, _) => continue,
            (Some("quit"), _) => break,
            (Some("help"), _) => {
                println!("{}", HELP);
                continue;
            }
            (Some("menu"), _) => {
                let model = runtime.model();
                println!("{} {}", MENU_BUTTON.1.glyph(), MENU_BUTTON.0);
                print!("{}", render_menu(&model.mosaic, model.mosaic.layout()));
                continue;
            }
            (Some("layout"), _) => {
                let model = runtime.model();
                print!("{}", describe_layout(model.mosaic.layout()));
                print!("{}", describe_panels(&model.layout_view()));
                continue;
            }
            (Some("cat"), Some(id)) => {
                match runtime.model().mosaic.content(&EditorId::new(id)) {
                    Some(content) => println!("{}", content),
                    None => println!("no editor named {}", id),
                }
                continue;
            }
            (Some("toggle"), Some(id)) => Msg::menu(MenuMsg::ToggleItem(EditorId::new(id))),
            (Some("remove"), Some(id)) => Msg::menu(MenuMsg::RemoveEditor(EditorId::new(id))),
            (Some("add"), _) => Msg::menu(MenuMsg::AddEditor),
            (Some("reset"), _) => Msg::menu(MenuMsg::ResetLayout),
            (Some("edit"), Some(id)) => Msg::Mosaic(MosaicMsg::SetContent {
                id: EditorId::new(id),
                content: words.collect::<Vec<_>>().join(" "),
            }),
            (Some("resize"), Some(width)) => match (width.parse(), words.next().map(str::parse)) {
                (Ok(width), Some(Ok(height))) => Msg::resize(width, height),
                _ => {
                    println!("usage: resize <width> <height>");
                    continue;
                }
            },
            (Some("open"), _) => Msg::App(AppMsg::ShowOpenDialog),
            (Some("save"), _) => Msg::App(AppMsg::Save),
            (Some("save-as"), label) => Msg::App(AppMsg::ShowSaveDialog {
                intent: IpcEventKind::SaveRequested,
                as_label: label.map(str::to_string),
            }),
            (Some(other), _) => {
                println!("unknown command: {} (try help)", other);
                continue;
            }
        };

        runtime.dispatch(msg)?;
    }

    if runtime.model().mosaic.is_edited() {
        tracing::info!("Exiting with unsaved changes");
    }
    Ok(())
}

/// Print open dialogs and read the user's answer until none is left
fn answer_dialogs(
    runtime: &mut Runtime,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    while let Some(dialog) = runtime.model().ui.active_dialog.as_ref() {
        let wants_input = dialog.options.wants_input;
        println!("{}", dialog);
        print!("  ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let answer = match lines.next() {
            Some(line) => line.context("Failed to read answer")?,
            None => String::new(),
        };
        let answer = answer.trim();

        if wants_input && !answer.is_empty() {
            runtime.dispatch(Msg::Dialog(DialogMsg::SetInput(answer.to_string())))?;
            runtime.dispatch(Msg::Dialog(DialogMsg::Confirm))?;
        } else {
            runtime.dispatch(Msg::Dialog(DialogMsg::Cancel))?;
        }
    }
    Ok(())
}

fn print_status(model: &AppModel) {
    let edited = if model.mosaic.is_edited() { " *" } else { "" };
    println!(
        "[{}{}] {} | {} panels",
        model.project_name(),
        edited,
        model.ui.status_message,
        model.mosaic.mosaic_leaf_count()
    );
}
