use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Logger, Root};
use std::process::ExitCode;
use task_tracker::config::Config;
use task_tracker::service::{self, TaskService};
use task_tracker::store::{JsonFileStore, TaskStore};
use task_tracker::task::{Status, StatusFilter, Task};

#[derive(Parser, Debug)]
#[command(name = "task-cli", about = "CLI Task Tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Description of the task
        description: String,
    },
    /// Update an existing task's description
    Update {
        /// The id of the task to update
        id: u32,
        new_description: String,
    },
    /// Delete a task by specifying its id
    Delete {
        /// The id of the task to delete
        id: u32,
    },
    /// Mark a task as todo, in-progress or done
    Mark {
        /// The status to move the task to
        #[arg(value_enum)]
        status: Status,
        /// The id of the task
        id: u32,
    },
    /// List all tasks, or only those with the given status
    List {
        /// The status by which to list tasks
        #[arg(value_enum, default_value_t = StatusFilter::All)]
        filter: StatusFilter,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    let store = JsonFileStore::new(config.tracker.task_file);
    if let Err(err) = store.ensure_exists() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let service = TaskService::new(&store);
    match run(&cli.command, &service) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        // Already in the requested status: informational, not a failure
        Err(err @ service::Error::AlreadyMarked { .. }) => {
            println!("{err}");
            ExitCode::SUCCESS
        }
        Err(err @ service::Error::InvalidInput(_)) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run<S: TaskStore>(
    command: &Commands,
    service: &TaskService<'_, S>,
) -> Result<String, service::Error> {
    match command {
        Commands::Add { description } => {
            let task = service.create(description)?;
            Ok(format!("Task added with ID {}", task.id))
        }
        Commands::Update {
            id,
            new_description,
        } => {
            let task = service.update(*id, new_description)?;
            Ok(format!("Successfully updated task {}", task.id))
        }
        Commands::Delete { id } => {
            service.delete(*id)?;
            Ok(format!("Successfully deleted task {id}."))
        }
        Commands::Mark { status, id } => {
            let task = service.set_status(*id, *status)?;
            Ok(format!(
                "Successfully marked task {} as {}",
                task.id, task.status
            ))
        }
        Commands::List { filter } => {
            let tasks = service.list(*filter)?;
            Ok(render_listing(&tasks, *filter))
        }
    }
}

fn render_listing(tasks: &[Task], filter: StatusFilter) -> String {
    if tasks.is_empty() {
        return match filter {
            StatusFilter::All => "There are no tasks to list.".to_string(),
            _ => format!("There are no tasks with the status of {filter}"),
        };
    }
    tasks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn init_logging() {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .logger(Logger::builder().build("task_tracker", LevelFilter::Info))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .expect("logging configuration is valid");
    let _log4rs_handle = log4rs::init_config(config).expect("logging is initialized once");
}
