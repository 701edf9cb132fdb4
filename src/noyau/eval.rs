//! Noyau — évaluation (shunting-yard à réduction immédiate)
//!
//! decouper -> classer (paresseux, jeton par jeton) -> deux piles
//! (opérandes f64 / opérateurs-chaînes) -> réductions déléguées au
//! jeu d'opérations -> valeur unique.
//!
//! Chaque réduction consigne une ligne d'historique, dans l'ordre des
//! réductions (qui n'est pas l'ordre textuel : la pile diffère les
//! opérateurs de précédence faible). En cas d'erreur, les réductions
//! déjà appliquées restent consignées ; les piles sont locales à
//! l'appel, rien à nettoyer.

use tracing::debug;

use super::erreurs::ErreurCalc;
use super::jetons::{classer, decouper, Jeton};
use super::operations::Operations;

/// Fonctions connues de l'évaluateur (opérateurs unaires différés,
/// précédence 4).
fn est_fonction(nom: &str) -> bool {
    matches!(
        nom,
        "sin"
            | "cos"
            | "tan"
            | "asin"
            | "acos"
            | "atan"
            | "sqrt"
            | "ln"
            | "log"
            | "exp"
            | "abs"
            | "fact"
    )
}

/// Table de précédence. Un jeton inconnu vaut 0 : il ne déclenche
/// jamais de réduction anticipée (et `(` passe par ce chemin).
fn precedence(jeton: &str) -> i32 {
    match jeton {
        "+" | "-" => 1,
        "*" | "/" => 2,
        "^" => 3,
        _ if est_fonction(jeton) => 4,
        _ => 0,
    }
}

fn malformee(raison: impl Into<String>) -> ErreurCalc {
    ErreurCalc::ExpressionMalformee(raison.into())
}

/// Dépile un opérande ; pile vide = expression malformée.
fn depiler(operandes: &mut Vec<f64>) -> Result<f64, ErreurCalc> {
    operandes.pop().ok_or_else(|| malformee("opérande manquant"))
}

/// Réduction : applique l'opérateur ou la fonction sur la pile
/// d'opérandes, via le jeu d'opérations (une ligne d'historique par
/// réduction). Binaire : dépile b puis a, applique `a OP b`.
fn reduire(
    ops: &mut Operations,
    operateur: &str,
    operandes: &mut Vec<f64>,
) -> Result<(), ErreurCalc> {
    let resultat = match operateur {
        "(" => return Err(malformee("parenthèse ouvrante non fermée")),

        "+" | "-" | "*" | "/" | "^" => {
            let b = depiler(operandes)?;
            let a = depiler(operandes)?;
            match operateur {
                "+" => ops.additionner(a, b),
                "-" => ops.soustraire(a, b),
                "*" => ops.multiplier(a, b),
                "/" => ops.diviser(a, b)?,
                "^" => ops.puissance(a, b),
                _ => unreachable!(),
            }
        }

        _ if est_fonction(operateur) => {
            let x = depiler(operandes)?;
            match operateur {
                "sin" => ops.sinus(x),
                "cos" => ops.cosinus(x),
                "tan" => ops.tangente(x)?,
                "asin" => ops.arc_sinus(x)?,
                "acos" => ops.arc_cosinus(x)?,
                "atan" => ops.arc_tangente(x),
                "sqrt" => ops.racine_carree(x)?,
                "ln" => ops.log_neperien(x)?,
                "log" => ops.log_decimal(x)?,
                "exp" => ops.exponentielle(x),
                "abs" => ops.valeur_absolue(x),
                "fact" => {
                    if x.fract() != 0.0 {
                        return Err(ErreurCalc::ArgumentInvalide(format!(
                            "factorielle d'un non-entier : {x}"
                        )));
                    }
                    ops.factorielle(x as i64)? as f64
                }
                _ => unreachable!(),
            }
        }

        // validation paresseuse : un identifiant inconnu n'échoue
        // qu'ici, à la réduction
        _ => return Err(malformee(format!("fonction inconnue : {operateur}"))),
    };

    operandes.push(resultat);
    Ok(())
}

/// API publique : évalue une expression infixe et retourne la valeur.
///
/// Chaque réduction passe par le jeu d'opérations : l'historique
/// s'allonge d'une ligne par réduction.
pub fn evaluer_expression(ops: &mut Operations, expression: &str) -> Result<f64, ErreurCalc> {
    let s = expression.trim();
    if s.is_empty() {
        return Err(malformee("entrée vide"));
    }

    let jetons = decouper(s);
    debug!(?jetons, "expression découpée");

    let mut operandes: Vec<f64> = Vec::new();
    let mut operateurs: Vec<String> = Vec::new();

    // Moins unaire : accepté en début d'expression ou juste après une
    // parenthèse ouvrante, où « -x » se réduit comme « 0 - x »
    // (injection d'un zéro). Ailleurs, `-` reste l'opérateur binaire
    // de référence.
    let mut debut_de_groupe = true;

    for jeton in &jetons {
        match classer(jeton) {
            Jeton::Nombre(valeur) => {
                operandes.push(valeur);
                debut_de_groupe = false;
            }

            Jeton::Operateur(op) => {
                if op == '-' && debut_de_groupe {
                    operandes.push(0.0);
                }
                // dépile tant que le sommet a une précédence >= à la
                // nôtre ; `(` (précédence 0) bloque naturellement
                while let Some(sommet) = operateurs.last() {
                    if precedence(sommet) < precedence(jeton) {
                        break;
                    }
                    let sommet = operateurs.pop().unwrap();
                    reduire(ops, &sommet, &mut operandes)?;
                }
                operateurs.push(jeton.clone());
                debut_de_groupe = false;
            }

            Jeton::ParOuvrante => {
                operateurs.push(jeton.clone());
                debut_de_groupe = true;
            }

            Jeton::ParFermante => {
                // dépile-réduit jusqu'à la parenthèse ouvrante, qui
                // est jetée (une fonction en dessous sera réduite par
                // précédence ou en fin de parcours)
                loop {
                    let Some(sommet) = operateurs.pop() else {
                        return Err(malformee("parenthèse fermante sans ouvrante"));
                    };
                    if sommet == "(" {
                        break;
                    }
                    reduire(ops, &sommet, &mut operandes)?;
                }
                debut_de_groupe = false;
            }

            Jeton::Identifiant(_) => {
                // fonction différée ; la validation n'a lieu qu'à la
                // réduction
                operateurs.push(jeton.clone());
                debut_de_groupe = false;
            }
        }
    }

    // vide la pile d'opérateurs
    while let Some(sommet) = operateurs.pop() {
        reduire(ops, &sommet, &mut operandes)?;
    }

    let resultat = depiler(&mut operandes)?;
    if !operandes.is_empty() {
        return Err(malformee("opérandes en trop"));
    }

    debug!(resultat, "expression évaluée");
    Ok(resultat)
}
