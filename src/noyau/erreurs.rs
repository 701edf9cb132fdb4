// src/noyau/erreurs.rs

use thiserror::Error;

/// Erreurs du noyau. Toutes récupérables : la console les affiche en
/// une ligne et la session continue.
///
/// Les réductions consignées avant une erreur restent dans
/// l'historique (non-atomicité assumée, voir eval.rs).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("hors domaine : {0}")]
    HorsDomaine(String),

    #[error("tangente indéfinie pour cet angle")]
    ValeurIndefinie,

    #[error("argument invalide : {0}")]
    ArgumentInvalide(String),

    #[error("dépassement : {0}")]
    Depassement(String),

    #[error("expression malformée : {0}")]
    ExpressionMalformee(String),
}
