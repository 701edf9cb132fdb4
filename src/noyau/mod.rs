//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - erreurs.rs    : erreurs typées, toutes récupérables
//! - operations.rs : mémoire + historique + opérations (arith/sci)
//! - jetons.rs     : découpage + classification paresseuse
//! - eval.rs       : shunting-yard à réduction immédiate

pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod operations;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::evaluer_expression;
pub use operations::{ModeAngle, Operations};
