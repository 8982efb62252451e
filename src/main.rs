use clap::Parser;
use promptag::application::{ConfigService, PromptService, TagEditor};
use promptag::cli::{format_tag_details, format_tag_list, BracketArgs, Cli, Commands, WeightArgs};
use promptag::domain::{BracketKind, TagOperation};
use promptag::error::Result;
use promptag::infrastructure::config::validate_weight_step;
use promptag::infrastructure::{logging, Config, FileSystemPrompt};
use std::path::{Path, PathBuf};

fn main() {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Tags {
            file,
            count,
            details,
        } => {
            let config = Config::load(&cwd)?;
            let store = prompt_service(file).load()?;

            if count {
                println!("{}", store.count());
            } else if details {
                print!("{}", format_tag_details(store.get(), &config.newline_glyph));
            } else {
                print!("{}", format_tag_list(store.get(), &config.newline_glyph));
            }
            Ok(())
        }
        Commands::Format {
            file,
            check,
            stdout,
        } => {
            let service = prompt_service(file.clone());

            if check {
                service.check()?;
                println!("{} is normalized", file.display());
            } else if stdout {
                print!("{}", service.format()?.normalized);
            } else if service.format_in_place()?.changed() {
                println!("Formatted {}", file.display());
            } else {
                println!("{} already normalized", file.display());
            }
            Ok(())
        }
        Commands::Weight(args) => run_weight(&cwd, args),
        Commands::Bracket(args) => run_bracket(&cwd, args),
        Commands::Move { file, from, to } => {
            edit_prompt(&cwd, file, |editor| {
                editor.move_tag(from, to)?;
                println!("Moved tag {} to {}", from, to);
                Ok(())
            })
        }
        Commands::Edit { file, index, text } => edit_prompt(&cwd, file, |editor| {
            let count = editor.edit(index, &text)?;
            match count {
                0 => println!("Removed tag {}", index),
                1 => println!("Updated tag {}", index),
                n => println!("Replaced tag {} with {} tags", index, n),
            }
            Ok(())
        }),
        Commands::Delete { file, index } => edit_prompt(&cwd, file, |editor| {
            let removed = editor.delete(index)?;
            println!("Removed {}", removed.display());
            Ok(())
        }),
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Config::path_for(&cwd));

            if list {
                let config = service.list()?;
                println!("weight_step = {}", config.weight_step);
                println!("newline_glyph = {}", config.newline_glyph);
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: promptag config [--list | <key> [<value>]]");
                println!("Valid keys: weight_step, newline_glyph");
            }
            Ok(())
        }
    }
}

fn run_weight(cwd: &Path, args: WeightArgs) -> Result<()> {
    let operation = if args.up {
        TagOperation::IncreaseWeight
    } else if args.down {
        TagOperation::DecreaseWeight
    } else if let Some(value) = args.set {
        TagOperation::SetWeight(value)
    } else {
        TagOperation::RemoveWeight
    };

    if let Some(step) = args.step {
        validate_weight_step(step)?;
    }

    apply_operation(cwd, args.file, args.index, operation, args.step)
}

fn run_bracket(cwd: &Path, args: BracketArgs) -> Result<()> {
    let kind = if args.round {
        BracketKind::Round
    } else {
        BracketKind::Square
    };
    let operation = if args.add {
        TagOperation::AddBracket(kind)
    } else {
        TagOperation::RemoveBracket(kind)
    };

    apply_operation(cwd, args.file, args.index, operation, None)
}

fn apply_operation(
    cwd: &Path,
    file: PathBuf,
    index: usize,
    operation: TagOperation,
    step: Option<f64>,
) -> Result<()> {
    let config = Config::load(cwd)?;
    let service = prompt_service(file);
    let mut editor = TagEditor::new(service.load()?, step.unwrap_or(config.weight_step));

    match editor.apply(index, operation)? {
        Some(token) => println!("{}", token.raw()),
        None => println!("Removed empty tag {}", index),
    }

    service.save(editor.store())
}

/// Load the prompt, run `edit` against it, then save the result
fn edit_prompt<F>(cwd: &Path, file: PathBuf, edit: F) -> Result<()>
where
    F: FnOnce(&mut TagEditor) -> Result<()>,
{
    let config = Config::load(cwd)?;
    let service = prompt_service(file);
    let mut editor = TagEditor::new(service.load()?, config.weight_step);

    edit(&mut editor)?;

    service.save(editor.store())
}

fn prompt_service(file: PathBuf) -> PromptService<FileSystemPrompt> {
    PromptService::new(FileSystemPrompt::new(file))
}
