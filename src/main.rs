//! stackforge's application entry point and command dispatch.

use stackforge::{
    cli::{get_args, Command, CreateArgs},
    config::{Features, ProjectConfig, Stack},
    console::{Console, TermConsole},
    error::{default_error_handler, Result},
    generator::{generate_project, GenerateOptions},
    installer::SystemCommandRunner,
    prompt::{prompt_project_config, DialoguerPrompter},
    registry::TemplateRegistry,
};

fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    let console = TermConsole::new();
    let result = match args.command {
        Some(Command::List) => {
            run_list(&console);
            Ok(())
        }
        Some(Command::Create(create)) => run_create(create, &console),
        // No subcommand defaults to the interactive create flow.
        None => run_create(CreateArgs::default(), &console),
    };

    if let Err(err) = result {
        console.error("Failed to create project");
        default_error_handler(err);
    }
}

fn run_create(args: CreateArgs, console: &dyn Console) -> Result<()> {
    let base_path = match args.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    // Both a name and a stack on the command line means non-interactive
    // mode; anything less falls back to prompting.
    let config = match (args.name, args.stack) {
        (Some(name), Some(stack)) => {
            let stack: Stack = stack.parse()?;
            let mut features = Features::defaults_for(stack);
            features.typescript = args.typescript;
            features.docker = args.docker;
            Some(ProjectConfig::new(
                name,
                args.description,
                args.author,
                stack,
                features,
                base_path,
            )?)
        }
        (name, _) => {
            prompt_project_config(&DialoguerPrompter::new(), console, name, base_path)?
        }
    };

    let Some(config) = config else {
        console.warn("Project creation cancelled.");
        return Ok(());
    };

    console.info(&format!("Creating project: {}", config.name));

    let registry = TemplateRegistry::new();
    let runner = SystemCommandRunner::new();
    let options = GenerateOptions { install: !args.no_install, git: !args.no_git };

    let project_path = generate_project(&config, options, &registry, &runner, console)?;
    log::debug!("Project generated at '{}'", project_path.display());

    console.success("Success! Your project is ready!");
    console.info("Next steps:");
    console.plain(&format!("  cd {}", config.name));
    for line in next_steps(config.stack) {
        console.plain(line);
    }
    console.plain("");
    Ok(())
}

/// Stack-specific instructions printed after a successful run.
fn next_steps(stack: Stack) -> &'static [&'static str] {
    match stack {
        Stack::Mern | Stack::Pern => &[
            "",
            "  # Start the backend",
            "  cd server && npm run dev",
            "",
            "  # Start the frontend (in another terminal)",
            "  cd client && npm run dev",
        ],
        Stack::Nextjs | Stack::Express => &["  npm run dev"],
        Stack::Flask | Stack::Django => &[
            "  python -m venv venv",
            "  source venv/bin/activate",
            "  pip install -r requirements.txt",
            "  python run.py",
        ],
    }
}

fn run_list(console: &dyn Console) {
    let registry = TemplateRegistry::new();
    console.title("Available Templates");
    for (index, summary) in registry.list().iter().enumerate() {
        console.plain(&format!("{}. {}", index + 1, summary.name));
        console.plain(&format!("   {}", summary.description));
        console.plain(&format!("   $ stackforge create my-app --stack {}", summary.stack));
    }
    console.plain("");
}
