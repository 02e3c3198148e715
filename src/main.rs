use clap::Parser;
use std::path::Path;
use std::str::FromStr;
use tara::application::{
    init, AuthService, ConfigService, ExportService, Section, TrackerService, VaultService,
};
use tara::cli::{
    format_goal_list, format_memory_list, format_prompts, format_sleep_tips, format_summary, Cli,
    Commands, ExportCommand, GoalCommand, ResetCommand, VaultCommand,
};
use tara::domain::content::{prompt, random_affirmation};
use tara::domain::{DateRef, GoalType, Mood, Session};
use tara::error::{Result, TaraError};
use tara::infrastructure::config::DEFAULT_LOG_LEVEL;
use tara::infrastructure::logging::init_logging;
use tara::infrastructure::{FileSystemRepository, TaraRepository};

fn main() {
    let cli = Cli::parse();

    let default_level = FileSystemRepository::discover()
        .and_then(|repo| repo.load_config())
        .map(|config| config.log_level)
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    init_logging(&default_level);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            if e.is_internal() {
                tracing::error!(error = %e, "command failed");
            }
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Affirmation => {
            println!("{}", random_affirmation());
            Ok(())
        }
        Commands::Prompts => {
            print!("{}", format_prompts());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);
            run_config(&service, key, value, list)
        }
        command => {
            let repo = FileSystemRepository::discover()?;
            let mut session = repo.load_session()?;
            let before = session.clone();

            run_in_session(&repo, &mut session, command)?;

            // Only a successful command may change the session.
            if session != before {
                repo.save_session(&session)?;
            }
            Ok(())
        }
    }
}

fn run_config(
    service: &ConfigService,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<()> {
    if list {
        let config = service.list()?;
        println!("log_level = {}", config.log_level);
        println!("report_recent_entries = {}", config.report_recent_entries);
        println!("report_excerpt_chars = {}", config.report_excerpt_chars);
        println!("created = {}", config.created.to_rfc3339());
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
        } else {
            println!("{}", service.get(&k)?);
        }
    } else {
        println!("Usage: tara config [--list | <key> [<value>]]");
        println!("Valid keys: log_level, report_recent_entries, report_excerpt_chars, created");
    }
    Ok(())
}

fn run_in_session(
    repo: &FileSystemRepository,
    session: &mut Session,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Signup {
            username,
            password,
            email,
        } => {
            AuthService::new(repo).signup(&username, &password, email)?;
            println!("Account created successfully! Please log in.");
        }
        Commands::Login { username, password } => {
            let outcome = AuthService::new(repo).login(session, &username, &password)?;
            println!("Logged in successfully! Welcome, {}.", username);
            println!("Login streak: {} day(s)", outcome.streak);
        }
        Commands::Logout => {
            AuthService::new(repo).logout(session);
            println!("Logged out");
        }
        Commands::Whoami => match session.username.as_deref() {
            Some(name) => {
                let vault = if session.vault_unlocked { "unlocked" } else { "locked" };
                println!("{} (vault {})", name, vault);
            }
            None => println!("Not logged in"),
        },
        Commands::Reset(ResetCommand::Request { username }) => {
            let token = AuthService::new(repo).request_reset(&username)?;
            println!("Reset token for {}: {}", username, token);
        }
        Commands::Reset(ResetCommand::Apply { token, password }) => {
            let username = AuthService::new(repo).reset_password(&token, &password)?;
            println!("Password updated for {}", username);
        }
        Commands::Mood {
            mood,
            intensity,
            notes,
        } => {
            let mood = Mood::from_str(&mood).map_err(TaraError::InvalidEntry)?;
            TrackerService::new(repo).log_mood(session, mood, intensity, notes)?;
            println!("Mood saved successfully!");
        }
        Commands::Write { text, prompt: number } => {
            let text = match number {
                Some(n) => {
                    let chosen = prompt(n).ok_or_else(|| {
                        TaraError::InvalidEntry(format!("No prompt #{} (see 'tara prompts')", n))
                    })?;
                    format!("{}\n{}", chosen, text)
                }
                None => text,
            };
            let entry = TrackerService::new(repo).write_entry(session, text)?;
            println!("Journal entry saved successfully! ({} words)", entry.word_count);
        }
        Commands::Grateful { text } => {
            TrackerService::new(repo).log_gratitude(session, text)?;
            println!("Gratitude logged successfully!");
        }
        Commands::Sleep {
            hours,
            quality,
            date,
        } => {
            let date = DateRef::parse(&date)?.resolve(today())?;
            let entry = TrackerService::new(repo).log_sleep(session, date, hours, quality)?;
            println!("Sleep data saved successfully!");
            if entry.is_poor() {
                print!("{}", format_sleep_tips());
            }
        }
        Commands::Goal(goal) => run_goal(repo, session, goal)?,
        Commands::Vault(vault) => run_vault(repo, session, vault)?,
        Commands::Summary { json } => {
            let summary = ExportService::new(repo, &repo.load_config()?).summary(session)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", format_summary(&summary));
            }
        }
        Commands::Export { format, output } => {
            let service = ExportService::new(repo, &repo.load_config()?);
            let content = match format {
                ExportCommand::Report => service.report(session)?,
                ExportCommand::Json => service.json(session)?,
                ExportCommand::Csv { section } => {
                    let section = Section::from_str(&section).map_err(TaraError::InvalidEntry)?;
                    service.csv(session, section)?
                }
            };
            write_output(output.as_deref(), &content)?;
        }
        Commands::Init { .. }
        | Commands::Config { .. }
        | Commands::Affirmation
        | Commands::Prompts => {
            unreachable!("handled before a session is loaded")
        }
    }
    Ok(())
}

fn run_goal(repo: &FileSystemRepository, session: &Session, command: GoalCommand) -> Result<()> {
    let tracker = TrackerService::new(repo);
    match command {
        GoalCommand::Add {
            text,
            long_term,
            deadline,
        } => {
            let kind = if long_term {
                GoalType::LongTerm
            } else {
                GoalType::ShortTerm
            };
            let deadline = DateRef::parse(&deadline)?.resolve(today())?;
            let number = tracker.add_goal(session, text, kind, deadline)?;
            println!("Goal #{} saved successfully!", number);
        }
        GoalCommand::List => print!("{}", format_goal_list(&tracker.goals(session)?)),
        GoalCommand::Done { number } => {
            tracker.set_goal_completed(session, number, true)?;
            println!("Goal #{} completed", number);
        }
        GoalCommand::Undo { number } => {
            tracker.set_goal_completed(session, number, false)?;
            println!("Goal #{} marked in progress", number);
        }
    }
    Ok(())
}

fn run_vault(
    repo: &FileSystemRepository,
    session: &mut Session,
    command: VaultCommand,
) -> Result<()> {
    let vault = VaultService::new(repo);
    match command {
        VaultCommand::SetPin { pin } => {
            vault.set_pin(session, &pin)?;
            println!("Password set successfully!");
        }
        VaultCommand::Unlock { pin } => {
            vault.unlock(session, &pin)?;
            println!("Memory Vault Unlocked");
        }
        VaultCommand::Lock => {
            vault.lock(session);
            println!("Memory Vault locked");
        }
        VaultCommand::Add { title, text, image } => {
            vault.add_memory(session, title, text, image.as_deref())?;
            println!("Memory saved successfully!");
        }
        VaultCommand::List => print!("{}", format_memory_list(&vault.memories(session)?)),
        VaultCommand::Image { number, dest } => {
            vault.export_image(session, number, &dest)?;
            println!("Saved image to {}", dest.display());
        }
    }
    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)?;
            println!("Exported to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
