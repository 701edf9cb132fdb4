//! src/console/affichage.rs
//!
//! Affichage console : bannière, mémoire, historique, résultats.
//! Aucune logique de calcul ici.

use crate::noyau::ModeAngle;

pub fn banniere(mode: ModeAngle) {
    println!("Calculatrice scientifique");
    println!("Commandes spéciales :");
    println!("  'mem'      - afficher la mémoire");
    println!("  'hist'     - afficher l'historique");
    println!("  'clear'    - tout effacer (mémoire + historique)");
    println!("  'modo'     - basculer le mode d'angles");
    println!("  'exit'     - quitter");
    println!("  'x = expr' - affecter l'expression évaluée à la mémoire");
    println!("  'M+ expr'  - ajouter à la mémoire ('M-' pour retirer)");
    println!("Mode actuel : {mode}");
    println!();
}

pub fn afficher_memoire(valeur: f64) {
    println!("Mémoire : {valeur}");
}

pub fn afficher_historique(historique: &[String]) {
    if historique.is_empty() {
        println!("Historique vide");
        return;
    }
    println!("=== HISTORIQUE ===");
    for (i, operation) in historique.iter().enumerate() {
        println!("{}. {operation}", i + 1);
    }
}

pub fn afficher_resultat(valeur: f64) {
    println!("= {valeur}");
}
