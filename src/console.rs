// src/console.rs
//
// Calculatrice scientifique — module console (racine)
// ---------------------------------------------------
// Rôle:
// - Déclarer les sous-modules (commandes.rs + boucle.rs + affichage.rs)
// - Ré-exporter lancer() (pour main.rs: console::lancer(&mut ops))
//
// Couche mince : tout le calcul vit dans le noyau ; ici on lit des
// lignes, on dispatch, on affiche.

pub mod affichage;
pub mod boucle;
pub mod commandes;

pub use boucle::lancer;
