#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use permanence::{
    io,
    publish::{status_line, target_label, HostMirror, HostProperties, HostUpdate, TextSink},
    routing::{Command, RoutingError, RoutingMode, Session},
    HourSource, SelectionSink, SystemClock,
};
use std::path::Path;
use std::time::Duration;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de permanence : qui est la cible maintenant ?
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier TSV des contacts (contacts de démonstration s'il est absent)
    #[arg(long, global = true, default_value = "shifts.tsv")]
    contacts: String,

    /// Ignore le fichier et part des contacts de démonstration
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Évaluer une fois et afficher la liste
    Status {
        /// Heure de référence (horloge locale sinon)
        #[arg(long, value_parser = clap::value_parser!(i32).range(0..24))]
        hour: Option<i32>,
        /// auto | manual
        #[arg(long)]
        mode: Option<RoutingMode>,
        /// Épingler un contact (force le mode manuel)
        #[arg(long)]
        pick: Option<String>,
        #[arg(long)]
        json: bool,
    },

    /// Réévaluer à intervalle fixe et afficher les changements
    Watch {
        #[arg(long, value_parser = clap::value_parser!(i32).range(0..24))]
        hour: Option<i32>,
        #[arg(long)]
        mode: Option<RoutingMode>,
        #[arg(long)]
        pick: Option<String>,
        #[arg(long, default_value_t = 10)]
        ticks: u32,
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },

    /// Rejouer un script de commandes hôte
    Replay {
        #[arg(long)]
        script: String,
    },

    /// Exporter le texte TSV tel qu'appliqué
    Export {
        #[arg(long)]
        out: String,
        /// Réécrit la liste avec les valeurs par défaut appliquées
        #[arg(long)]
        normalize: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut session = load_session(&cli.contacts, cli.demo)?;

    let code = match cli.cmd {
        Commands::Status {
            hour,
            mode,
            pick,
            json,
        } => {
            if let Some(h) = hour {
                session.set_host_hour(h);
            }
            route(&mut session, mode, pick);
            let hour = session.reference_hour(&SystemClock);
            let result = session.evaluate(hour);
            let theme = session.active_theme(hour);

            if json {
                let contacts = session.statuses(hour);
                let doc = serde_json::json!({
                    "session": session.id().as_str(),
                    "hour": hour,
                    "mode": session.routing().mode,
                    "theme": theme,
                    "target": HostProperties::from_selection(&result),
                    "contacts": contacts,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!(
                    "{hour:02}h | mode {} | theme {}",
                    session.routing().mode,
                    theme
                );
                for status in session.statuses(hour) {
                    println!("{}", status_line(&status));
                }
                println!("target: {}", target_label(&result));
            }
            // Code 2 = WARNING/INCOMPLETE
            if result.active.is_some() {
                0
            } else {
                2
            }
        }
        Commands::Watch {
            hour,
            mode,
            pick,
            ticks,
            interval_ms,
        } => {
            if let Some(h) = hour {
                session.set_host_hour(h);
            }
            route(&mut session, mode, pick);
            let stdout = std::io::stdout();
            let mut sink = TextSink::new(stdout.lock(), true);
            for i in 0..ticks {
                let hour = session.reference_hour(&SystemClock);
                let result = session.evaluate(hour);
                sink.publish(hour, &result)?;
                if i + 1 < ticks {
                    std::thread::sleep(Duration::from_millis(interval_ms));
                }
            }
            0
        }
        Commands::Replay { script } => {
            let text = std::fs::read_to_string(&script)
                .with_context(|| format!("reading {script}"))?;
            let base = Path::new(&script).parent().unwrap_or_else(|| Path::new("."));
            let mut mirror = HostMirror::new();
            // sans `hour` dans le script, l'horloge locale fait foi
            let clock: &dyn HourSource = &SystemClock;
            for (lineno, line) in text.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let command = parse_script_line(line, base)
                    .with_context(|| format!("{script}:{}", lineno + 1))?;
                let result = session.apply(command, clock);
                println!("> {line}");
                for update in mirror.sync(&result) {
                    match update {
                        HostUpdate::Property { name, value } => println!("  {name} = {value:?}"),
                        HostUpdate::Event(event) => {
                            println!("  fire {}({})", event.name(), event.payload())
                        }
                    }
                }
            }
            0
        }
        Commands::Export { out, normalize } => {
            if normalize {
                let tsv = io::contacts_to_tsv(session.contacts())?;
                io::export_contacts_tsv(&out, &tsv)?;
            } else {
                io::export_contacts_tsv(&out, session.raw_text())?;
            }
            println!("{} contact(s) written to {out}", session.contacts().len());
            0
        }
    };

    std::process::exit(code);
}

fn load_session(path: &str, demo: bool) -> Result<Session> {
    if demo {
        return Ok(Session::with_demo_contacts()?);
    }
    match io::import_contacts_tsv(path) {
        Ok(raw) => {
            let mut s = Session::new();
            s.replace_contacts(&raw);
            Ok(s)
        }
        Err(_) => Ok(Session::with_demo_contacts()?),
    }
}

fn route(session: &mut Session, mode: Option<RoutingMode>, pick: Option<String>) {
    if let Some(email) = pick {
        session.pick_contact(email);
    }
    if let Some(mode) = mode {
        session.set_mode(mode);
    }
}

/// `load <chemin>` est résolu ici ; le reste passe par `Command::from_str`.
fn parse_script_line(line: &str, base: &Path) -> Result<Command> {
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };
    if verb == "load" {
        if arg.is_empty() {
            return Err(RoutingError::MissingArgument("load").into());
        }
        let raw = io::import_contacts_tsv(base.join(arg))?;
        return Ok(Command::ReplaceContacts(raw));
    }
    Ok(line.parse::<Command>()?)
}
