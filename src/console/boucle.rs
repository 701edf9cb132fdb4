//! src/console/boucle.rs
//!
//! Boucle interactive (rustyline).
//!
//! Contrats :
//! - Toute erreur du noyau est attrapée ici, affichée en une ligne,
//!   et la boucle continue : aucune erreur de calcul n'est fatale.
//! - Les réductions consignées avant une erreur restent dans
//!   l'historique (non-atomicité assumée, voir noyau/eval.rs).

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::noyau::{evaluer_expression, ErreurCalc, Operations};

use super::affichage;
use super::commandes::{interpreter, Commande};

/// Boucle principale : lit, dispatch, affiche, recommence.
pub fn lancer(operations: &mut Operations) -> Result<()> {
    let mut editeur = DefaultEditor::new()?;
    affichage::banniere(operations.mode());

    loop {
        match editeur.readline(">>> ") {
            Ok(ligne) => {
                let ligne = ligne.trim().to_string();
                if ligne.is_empty() {
                    continue;
                }
                let _ = editeur.add_history_entry(&ligne);
                debug!(%ligne, "entrée reçue");

                match executer(operations, &ligne) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => println!("Erreur : {e}"),
                }
            }
            // Ctrl-C / Ctrl-D : sortie propre
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Exécute une ligne ; Ok(false) pour quitter.
fn executer(operations: &mut Operations, ligne: &str) -> Result<bool, ErreurCalc> {
    match interpreter(ligne) {
        Commande::Quitter => return Ok(false),

        Commande::VoirMemoire => affichage::afficher_memoire(operations.memoire()),

        Commande::VoirHistorique => affichage::afficher_historique(&operations.historique()),

        Commande::NettoyerTout => {
            operations.effacer_tout();
            println!("Mémoire et historique effacés");
        }

        Commande::BasculerMode => {
            let mode = operations.basculer_mode();
            println!("Mode d'angles : {mode}");
        }

        Commande::Affectation(texte) => {
            let morceaux: Vec<&str> = texte.split('=').collect();
            if morceaux.len() != 2 {
                return Err(ErreurCalc::ExpressionMalformee(
                    "affectation invalide (attendu : nom = expression)".to_string(),
                ));
            }
            let valeur = evaluer_expression(operations, morceaux[1])?;
            operations.definir_memoire(valeur);
            println!("Mémoire définie : {valeur}");
        }

        Commande::MemoirePlus(texte) => {
            let valeur = valeur_ou_memoire(operations, &texte)?;
            operations.ajouter_memoire(valeur);
            println!("Mémoire + {valeur} = {}", operations.memoire());
        }

        Commande::MemoireMoins(texte) => {
            let valeur = valeur_ou_memoire(operations, &texte)?;
            operations.retirer_memoire(valeur);
            println!("Mémoire - {valeur} = {}", operations.memoire());
        }

        Commande::Evaluer(texte) => {
            let valeur = evaluer_expression(operations, &texte)?;
            affichage::afficher_resultat(valeur);
        }
    }

    Ok(true)
}

/// M+ / M- : expression évaluée, ou mémoire courante si vide.
fn valeur_ou_memoire(operations: &mut Operations, texte: &str) -> Result<f64, ErreurCalc> {
    if texte.is_empty() {
        Ok(operations.memoire())
    } else {
        evaluer_expression(operations, texte)
    }
}
