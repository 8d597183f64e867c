use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use painel_core::{update, AppState, DashboardViewModel, Msg};
use painel_engine::AtomicFileWriter;
use painel_logging::{painel_error, painel_info};

use super::effects::EffectRunner;
use super::logging;
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();
    painel_info!("Starting dashboard session");

    let mut runner = EffectRunner::new().context("failed to start the scraping engine")?;
    let mut state = AppState::new();
    let mut pending = vec![Msg::RefreshRequested];

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        while let Some(msg) = pending.pop() {
            let (next, effects) = update(state, msg);
            state = next;
            pending.extend(runner.run(effects));
        }

        if state.consume_dirty() {
            present(&state.view());
        }

        print!("{}\n> ", ui::constants::COMMAND_HINT);
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        match line?.trim() {
            "r" | "" => pending.push(Msg::RefreshRequested),
            "c" => pending.push(Msg::CacheClearRequested),
            "q" => break,
            other => println!("Comando desconhecido: {other}"),
        }
    }

    painel_info!("Dashboard session finished");
    Ok(())
}

/// Draws one render pass to stdout and to the HTML page.
fn present(view: &DashboardViewModel) {
    let generated_at = Local::now().format("%d/%m/%Y %H:%M:%S").to_string();
    let widgets = ui::render::render(view, &generated_at);

    println!("{}", ui::terminal::draw(&widgets));

    match write_page(&widgets) {
        Ok(path) => println!("Painel salvo em {}\n", path.display()),
        Err(err) => {
            painel_error!("Could not write dashboard page: {:#}", err);
            eprintln!("Não foi possível salvar o painel HTML: {err:#}");
        }
    }
}

fn write_page(widgets: &[ui::widgets::Widget]) -> anyhow::Result<PathBuf> {
    let html = ui::html::draw(widgets).context("failed to render dashboard template")?;
    let dir = std::env::current_dir().context("no working directory")?;
    let path = AtomicFileWriter::new(dir).write(ui::constants::HTML_FILENAME, &html)?;
    Ok(path)
}
