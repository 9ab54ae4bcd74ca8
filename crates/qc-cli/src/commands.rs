use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use qc_model::ModuleRegistry;
use qc_persistence::{
    FilePreferenceStore, PersistenceError, PreferenceStore, PreferencesController,
};
use qc_session::{SessionConfig, SessionController};
use tracing::{debug, info_span};

use qc_cli::export::TextCertificateExporter;
use qc_cli::journey::{JourneyOutcome, run_script};
use qc_cli::summary::{modules_table, preferences_table};

use crate::cli::{JourneyArgs, PrefsAction};

pub fn run_modules() -> Result<()> {
    let registry = ModuleRegistry::quebrada_conectada();
    println!("{}", modules_table(&registry));
    Ok(())
}

pub fn run_journey(args: &JourneyArgs) -> Result<(SessionController, JourneyOutcome)> {
    let script = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read script {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("read script from stdin")?,
    };

    let mut config = SessionConfig::default();
    if let Some(threshold) = args.lab_threshold {
        config = config.with_lab_unlock_threshold(threshold);
    }
    if let Some(capacity) = args.log_capacity {
        config = config.with_log_capacity(capacity);
    }
    let registry = Arc::new(ModuleRegistry::quebrada_conectada());
    let mut session = SessionController::with_config(registry, config);
    let mut exporter = TextCertificateExporter::new(&args.out_dir);

    let span = info_span!("journey", lines = script.lines().count());
    let _guard = span.enter();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = run_script(&mut session, &mut exporter, &script, &mut out)
        .context("write journey transcript")?;
    out.flush().context("flush journey transcript")?;
    Ok((session, outcome))
}

pub fn run_prefs(action: PrefsAction, path: Option<&Path>) -> Result<()> {
    let store = match path {
        Some(path) => FilePreferenceStore::new(path),
        None => FilePreferenceStore::at_default_location(),
    };
    debug!(path = %store.path().display(), "using preferences file");
    if let Err(error) = store.try_load() {
        eprintln!("warning: {}", error.user_message());
    }
    let mut prefs = PreferencesController::load(store);

    match action {
        PrefsAction::Show => {}
        PrefsAction::ToggleTheme => {
            prefs.toggle_theme().map_err(|e| persistence_error(&e))?;
        }
        PrefsAction::Font { size } => {
            prefs.set_font_size(size.into()).map_err(|e| persistence_error(&e))?;
        }
        PrefsAction::ToggleLibras => {
            prefs.toggle_libras().map_err(|e| persistence_error(&e))?;
        }
    }

    println!("{}", preferences_table(prefs.preferences()));
    println!("File: {}", prefs.store().path().display());
    Ok(())
}

fn persistence_error(error: &PersistenceError) -> anyhow::Error {
    match error.suggestion() {
        Some(hint) => anyhow!("{} ({hint})", error.user_message()),
        None => anyhow!("{}", error.user_message()),
    }
}
