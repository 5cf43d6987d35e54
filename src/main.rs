use std::cell::RefCell;
use std::rc::Rc;

use clap::Parser;
use tracing::info;

use taskview::cli::Cli;
use taskview::config::Config;
use taskview::error::Error;
use taskview::source::HttpTaskSource;
use taskview::task::Task;
use taskview::view::{SelectionSink, TaskView, spawn_retrieve};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .init();
}

/// Detail-view owner for the CLI: looks up the forwarded id in the raw
/// collection and prints the record.
struct DetailPrinter {
    records: Rc<RefCell<Vec<Task>>>,
}

impl SelectionSink for DetailPrinter {
    fn on_select(&self, id: u64) {
        match self.records.borrow().iter().find(|t| t.id == id) {
            Some(task) => {
                let status = if task.completed { "completed" } else { "open" };
                println!("\n#{} {} ({status})", task.id, task.title);
            }
            None => eprintln!("no task with id {id}"),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = match Config::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    info!(?config, "config loaded");

    let records = Rc::new(RefCell::new(Vec::new()));
    let mut view = TaskView::with_sink(Box::new(DetailPrinter {
        records: records.clone(),
    }));
    view.set_filter(config.filter);

    let rx = spawn_retrieve(HttpTaskSource::new(config.endpoint.clone()));
    let outcome = rx
        .await
        .unwrap_or_else(|_| Err(Error::Network("fetch worker exited early".to_string())));
    view.settle(outcome);

    if let Some(message) = view.error() {
        eprintln!("error: {message}");
        std::process::exit(1);
    }

    *records.borrow_mut() = view.tasks().to_vec();

    for task in view.filtered() {
        let mark = if task.completed { "x" } else { " " };
        println!("[{mark}] {:>4}  {}", task.id, task.title);
    }

    if let Some(id) = config.select {
        view.select(id);
    }
}
