//! Tests scientifiques (campagne) : propriétés observables du noyau,
//! en passant par l'API publique (évaluateur + jeu d'opérations).
//!
//! - précédence, parenthèses, associativité de `^`
//! - trig en DEGRES/RADIANS, tolérance 1e-9
//! - aller-retour : bascule de mode, asin ∘ sin à mode constant
//! - historique : une ligne par opération, ordre d'appel
//! - remise à zéro totale

use super::{evaluer_expression, ErreurCalc, ModeAngle, Operations};

const TOLERANCE: f64 = 1e-9;

fn eval_ok(ops: &mut Operations, expr: &str) -> f64 {
    evaluer_expression(ops, expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(obtenu: f64, attendu: f64) {
    assert!(
        (obtenu - attendu).abs() < TOLERANCE,
        "obtenu={obtenu} attendu={attendu}"
    );
}

/* ------------------------ Précédence et parenthèses ------------------------ */

#[test]
fn sci_precedence_de_base() {
    let mut ops = Operations::new();
    assert_eq!(eval_ok(&mut ops, "2 + 3 * 4"), 14.0);
    assert_eq!(eval_ok(&mut ops, "(2 + 3) * 4"), 20.0);
    assert_eq!(eval_ok(&mut ops, "2 * 3 + 4 * 5"), 26.0);
    assert_eq!(eval_ok(&mut ops, "100 / 5 / 2"), 10.0);
}

#[test]
fn sci_puissance_et_precedence() {
    let mut ops = Operations::new();
    assert_eq!(eval_ok(&mut ops, "2 * 3 ^ 2"), 18.0);
    assert_eq!(eval_ok(&mut ops, "2 ^ 3 ^ 2"), 64.0); // associativité gauche
    assert_eq!(eval_ok(&mut ops, "(2 ^ 3) ^ 2"), 64.0);
    assert_eq!(eval_ok(&mut ops, "2 ^ (3 ^ 2)"), 512.0);
}

/* ------------------------ Trig et modes d'angles ------------------------ */

#[test]
fn sci_sin_90_en_degres() {
    let mut ops = Operations::new();
    assert_eq!(ops.mode(), ModeAngle::Degres);
    assert_proche(eval_ok(&mut ops, "sin(90)"), 1.0);
}

#[test]
fn sci_trig_en_radians() {
    let mut ops = Operations::new();
    ops.definir_mode(ModeAngle::Radians);
    assert_proche(eval_ok(&mut ops, "cos(0)"), 1.0);
    assert_proche(eval_ok(&mut ops, "sin(3.141592653589793)"), 0.0);
}

#[test]
fn sci_bascule_de_mode_aller_retour() {
    let mut ops = Operations::new();
    let initial = ops.mode();
    ops.basculer_mode();
    ops.basculer_mode();
    assert_eq!(ops.mode(), initial);
}

#[test]
fn sci_asin_sin_aller_retour() {
    // à mode constant, asin(sin(x)) revient sur x (x dans [-90, 90])
    let mut ops = Operations::new();
    for angle in [-90.0, -45.0, 0.0, 30.0, 60.0, 90.0] {
        let s = ops.sinus(angle);
        let retour = ops.arc_sinus(s).unwrap();
        assert_proche(retour, angle);
    }

    ops.definir_mode(ModeAngle::Radians);
    let s = ops.sinus(0.5);
    let retour = ops.arc_sinus(s).unwrap();
    assert_proche(retour, 0.5);
}

#[test]
fn sci_acos_atan_coherence() {
    let mut ops = Operations::new();
    let r = ops.arc_cosinus(0.5).unwrap();
    assert_proche(r, 60.0);
    let r = ops.arc_tangente(1.0);
    assert_proche(r, 45.0);
}

/* ------------------------ Domaines d'erreurs ------------------------ */

#[test]
fn sci_erreurs_typees() {
    let mut ops = Operations::new();
    assert_eq!(ops.diviser(10.0, 0.0), Err(ErreurCalc::DivisionParZero));
    assert!(matches!(
        ops.racine_carree(-1.0),
        Err(ErreurCalc::HorsDomaine(_))
    ));
    assert!(matches!(
        ops.factorielle(-1),
        Err(ErreurCalc::ArgumentInvalide(_))
    ));
    assert!(matches!(
        ops.factorielle(21),
        Err(ErreurCalc::Depassement(_))
    ));
    assert_eq!(ops.factorielle(20), Ok(2_432_902_008_176_640_000));
}

#[test]
fn sci_erreur_en_cours_d_expression() {
    // l'erreur remonte inchangée à travers l'évaluateur
    let mut ops = Operations::new();
    assert_eq!(
        evaluer_expression(&mut ops, "1 + 10 / (3 - 3)"),
        Err(ErreurCalc::DivisionParZero)
    );
    assert!(matches!(
        evaluer_expression(&mut ops, "2 * asin(2)"),
        Err(ErreurCalc::HorsDomaine(_))
    ));
}

/* ------------------------ Historique ------------------------ */

#[test]
fn sci_historique_compte_et_ordre() {
    let mut ops = Operations::new();

    ops.additionner(1.0, 2.0);
    assert_eq!(ops.historique().len(), 1);
    ops.sinus(90.0);
    assert_eq!(ops.historique().len(), 2);

    // expression composée : une ligne par réduction
    eval_ok(&mut ops, "(1 + 2) * 3");
    let historique = ops.historique();
    assert_eq!(historique.len(), 4);
    assert_eq!(historique[2], "1 + 2 = 3");
    assert_eq!(historique[3], "3 × 3 = 9");
}

#[test]
fn sci_historique_instantane_immuable() {
    let mut ops = Operations::new();
    ops.additionner(1.0, 1.0);
    let instantane = ops.historique();
    ops.additionner(2.0, 2.0);
    // l'instantané n'est pas le conteneur vivant
    assert_eq!(instantane.len(), 1);
    assert_eq!(ops.historique().len(), 2);
}

#[test]
fn sci_effacer_tout() {
    let mut ops = Operations::new();
    ops.definir_memoire(7.0);
    eval_ok(&mut ops, "2 + 2");
    ops.effacer_tout();
    assert_eq!(ops.memoire(), 0.0);
    assert!(ops.historique().is_empty());
}

/* ------------------------ Mémoire via expressions ------------------------ */

#[test]
fn sci_memoire_et_expressions() {
    let mut ops = Operations::new();
    let valeur = eval_ok(&mut ops, "6 * 7");
    ops.definir_memoire(valeur);
    assert_eq!(ops.memoire(), 42.0);
    let delta = eval_ok(&mut ops, "8 / 2");
    ops.ajouter_memoire(delta);
    assert_eq!(ops.memoire(), 46.0);
    ops.retirer_memoire(1.0);
    assert_eq!(ops.memoire(), 45.0);
}
