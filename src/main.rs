// src/main.rs
//
// Calculatrice scientifique — point d'entrée console
// --------------------------------------------------
// Rôle :
// - options de lancement (clap) : mode d'angles initial, plafond
//   d'historique
// - initialisation du journal (tracing, filtre via RUST_LOG, WARN par
//   défaut)
// - lancement de la boucle console (le calcul vit dans noyau/)

mod console;
mod noyau;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use noyau::operations::HISTORIQUE_MAX_DEFAUT;
use noyau::{ModeAngle, Operations};

#[derive(Parser)]
#[command(
    name = "calculatrice_sci",
    version,
    about = "Calculatrice scientifique interactive"
)]
struct Options {
    /// Mode d'angles au démarrage
    #[arg(long, value_enum, default_value = "degres")]
    mode: ModeOption,

    /// Plafond d'historique (au-delà, les lignes les plus anciennes
    /// sont éliminées)
    #[arg(long, default_value_t = HISTORIQUE_MAX_DEFAUT)]
    historique_max: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeOption {
    Degres,
    Radians,
}

impl From<ModeOption> for ModeAngle {
    fn from(option: ModeOption) -> Self {
        match option {
            ModeOption::Degres => ModeAngle::Degres,
            ModeOption::Radians => ModeAngle::Radians,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let options = Options::parse();

    let mut operations = Operations::avec_limite_historique(options.historique_max);
    operations.definir_mode(options.mode.into());

    console::lancer(&mut operations)
}
