//! src/noyau/operations.rs
//!
//! Jeu d'opérations : mémoire + historique + opérations arithmétiques
//! et scientifiques.
//!
//! Contrats :
//! - Chaque opération réussie consigne exactement une ligne d'historique.
//! - L'historique est append-only, dans l'ordre des appels, sans dédup.
//! - L'accesseur d'historique renvoie une copie, jamais le conteneur vivant.
//! - Possession exclusive : API `&mut self`, aucun verrouillage.

use std::fmt;

use num_traits::{ToPrimitive, Zero};

use super::erreurs::ErreurCalc;

/// Plafond d'historique par défaut (garde-fou anti-croissance infinie
/// en session longue ; au-delà, la ligne la plus ancienne est éliminée).
pub const HISTORIQUE_MAX_DEFAUT: usize = 10_000;

/// Borne factorielle : 20! tient dans un i64, 21! non.
const FACTORIELLE_MAX: i64 = 20;

/// Mode d'interprétation des angles (trig et trig inverse seulement).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeAngle {
    Degres,
    Radians,
}

impl ModeAngle {
    /// Mode opposé (commande `modo`).
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    /// Suffixe d'unité pour les lignes d'historique.
    fn suffixe(self) -> &'static str {
        match self {
            ModeAngle::Degres => "°",
            ModeAngle::Radians => " rad",
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModeAngle::Degres => write!(f, "DEGRES"),
            ModeAngle::Radians => write!(f, "RADIANS"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Operations {
    memoire: f64,
    historique: Vec<String>,
    historique_max: usize,
    mode: ModeAngle,
}

impl Default for Operations {
    fn default() -> Self {
        Self::new()
    }
}

impl Operations {
    pub fn new() -> Self {
        Self::avec_limite_historique(HISTORIQUE_MAX_DEFAUT)
    }

    /// Plafond d'historique sur mesure (0 = aucune ligne conservée).
    pub fn avec_limite_historique(historique_max: usize) -> Self {
        Self {
            memoire: 0.0,
            historique: Vec::new(),
            historique_max,
            mode: ModeAngle::Degres,
        }
    }

    /* ------------------------ Mode d'angles ------------------------ */

    pub fn mode(&self) -> ModeAngle {
        self.mode
    }

    pub fn definir_mode(&mut self, mode: ModeAngle) {
        self.mode = mode;
    }

    /// Bascule DEGRES <-> RADIANS et retourne le nouveau mode.
    pub fn basculer_mode(&mut self) -> ModeAngle {
        self.mode = self.mode.bascule();
        self.mode
    }

    fn en_radians(&self, angle: f64) -> f64 {
        match self.mode {
            ModeAngle::Degres => angle * std::f64::consts::PI / 180.0,
            ModeAngle::Radians => angle,
        }
    }

    fn depuis_radians(&self, radians: f64) -> f64 {
        match self.mode {
            ModeAngle::Degres => radians * 180.0 / std::f64::consts::PI,
            ModeAngle::Radians => radians,
        }
    }

    /* ------------------------ Historique ------------------------ */

    fn consigner(&mut self, ligne: String) {
        if self.historique_max == 0 {
            return;
        }
        if self.historique.len() >= self.historique_max {
            self.historique.remove(0);
        }
        self.historique.push(ligne);
    }

    /// Copie de l'historique (jamais le conteneur vivant).
    pub fn historique(&self) -> Vec<String> {
        self.historique.clone()
    }

    pub fn effacer_historique(&mut self) {
        self.historique.clear();
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn definir_memoire(&mut self, valeur: f64) {
        self.memoire = valeur;
        self.consigner(format!("Mémoire définie : {valeur}"));
    }

    pub fn ajouter_memoire(&mut self, valeur: f64) {
        self.memoire += valeur;
        self.consigner(format!("Mémoire + {valeur} = {}", self.memoire));
    }

    pub fn retirer_memoire(&mut self, valeur: f64) {
        self.memoire -= valeur;
        self.consigner(format!("Mémoire - {valeur} = {}", self.memoire));
    }

    pub fn effacer_memoire(&mut self) {
        self.memoire = 0.0;
        self.consigner("Mémoire effacée".to_string());
    }

    /// Remise à zéro totale : mémoire à 0.0 + historique vidé.
    pub fn effacer_tout(&mut self) {
        self.memoire = 0.0;
        self.historique.clear();
    }

    /* ------------------------ Arithmétique ------------------------ */
    // Surcharges entier/flottant : mêmes sémantiques, seul le type du
    // résultat change. La division entière produit toujours un
    // quotient flottant.

    pub fn additionner(&mut self, a: f64, b: f64) -> f64 {
        let resultat = a + b;
        self.consigner(format!("{a} + {b} = {resultat}"));
        resultat
    }

    pub fn additionner_ent(&mut self, a: i64, b: i64) -> i64 {
        let resultat = a + b;
        self.consigner(format!("{a} + {b} = {resultat}"));
        resultat
    }

    pub fn soustraire(&mut self, a: f64, b: f64) -> f64 {
        let resultat = a - b;
        self.consigner(format!("{a} - {b} = {resultat}"));
        resultat
    }

    pub fn soustraire_ent(&mut self, a: i64, b: i64) -> i64 {
        let resultat = a - b;
        self.consigner(format!("{a} - {b} = {resultat}"));
        resultat
    }

    pub fn multiplier(&mut self, a: f64, b: f64) -> f64 {
        let resultat = a * b;
        self.consigner(format!("{a} × {b} = {resultat}"));
        resultat
    }

    pub fn multiplier_ent(&mut self, a: i64, b: i64) -> i64 {
        let resultat = a * b;
        self.consigner(format!("{a} × {b} = {resultat}"));
        resultat
    }

    /// Tronc commun des deux surcharges de division : test du zéro
    /// exact, quotient flottant, ligne d'historique.
    fn diviser_commun<T>(&mut self, a: T, b: T) -> Result<f64, ErreurCalc>
    where
        T: Copy + Zero + ToPrimitive + fmt::Display,
    {
        if b.is_zero() {
            return Err(ErreurCalc::DivisionParZero);
        }
        let resultat = a.to_f64().unwrap_or(f64::NAN) / b.to_f64().unwrap_or(f64::NAN);
        self.consigner(format!("{a} ÷ {b} = {resultat}"));
        Ok(resultat)
    }

    pub fn diviser(&mut self, a: f64, b: f64) -> Result<f64, ErreurCalc> {
        self.diviser_commun(a, b)
    }

    pub fn diviser_ent(&mut self, a: i64, b: i64) -> Result<f64, ErreurCalc> {
        self.diviser_commun(a, b)
    }

    /* ------------------------ Trigonométrie ------------------------ */

    pub fn sinus(&mut self, angle: f64) -> f64 {
        let radians = self.en_radians(angle);
        let resultat = radians.sin();
        self.consigner(format!("sin({angle}{}) = {resultat}", self.mode.suffixe()));
        resultat
    }

    pub fn cosinus(&mut self, angle: f64) -> f64 {
        let radians = self.en_radians(angle);
        let resultat = radians.cos();
        self.consigner(format!("cos({angle}{}) = {resultat}", self.mode.suffixe()));
        resultat
    }

    /// Indéfinie quand le cosinus de l'angle converti vaut exactement
    /// 0.0 (en pratique f64 ne produit jamais ce zéro pour π/2 : le
    /// contrôle reste, fidèle au contrat).
    pub fn tangente(&mut self, angle: f64) -> Result<f64, ErreurCalc> {
        let radians = self.en_radians(angle);
        if radians.cos() == 0.0 {
            return Err(ErreurCalc::ValeurIndefinie);
        }
        let resultat = radians.tan();
        self.consigner(format!("tan({angle}{}) = {resultat}", self.mode.suffixe()));
        Ok(resultat)
    }

    /* ------------------------ Trigonométrie inverse ------------------------ */

    pub fn arc_sinus(&mut self, valeur: f64) -> Result<f64, ErreurCalc> {
        if !(-1.0..=1.0).contains(&valeur) {
            return Err(ErreurCalc::HorsDomaine(format!(
                "asin attend une valeur dans [-1, 1], reçu {valeur}"
            )));
        }
        let resultat = self.depuis_radians(valeur.asin());
        self.consigner(format!("asin({valeur}) = {resultat}{}", self.mode.suffixe()));
        Ok(resultat)
    }

    pub fn arc_cosinus(&mut self, valeur: f64) -> Result<f64, ErreurCalc> {
        if !(-1.0..=1.0).contains(&valeur) {
            return Err(ErreurCalc::HorsDomaine(format!(
                "acos attend une valeur dans [-1, 1], reçu {valeur}"
            )));
        }
        let resultat = self.depuis_radians(valeur.acos());
        self.consigner(format!("acos({valeur}) = {resultat}{}", self.mode.suffixe()));
        Ok(resultat)
    }

    /// Pas de restriction de domaine pour l'arc tangente.
    pub fn arc_tangente(&mut self, valeur: f64) -> f64 {
        let resultat = self.depuis_radians(valeur.atan());
        self.consigner(format!("atan({valeur}) = {resultat}{}", self.mode.suffixe()));
        resultat
    }

    /* ------------------------ Puissances et racines ------------------------ */

    /// Exponentiation réelle ; les combinaisons invalides produisent
    /// NaN, non traité spécialement.
    pub fn puissance(&mut self, base: f64, exposant: f64) -> f64 {
        let resultat = base.powf(exposant);
        self.consigner(format!("{base} ^ {exposant} = {resultat}"));
        resultat
    }

    pub fn racine_carree(&mut self, valeur: f64) -> Result<f64, ErreurCalc> {
        if valeur < 0.0 {
            return Err(ErreurCalc::HorsDomaine(
                "racine carrée d'un nombre négatif".to_string(),
            ));
        }
        let resultat = valeur.sqrt();
        self.consigner(format!("√{valeur} = {resultat}"));
        Ok(resultat)
    }

    /// radicande^(1/indice) ; refusée pour un radicande négatif sous
    /// indice pair entier.
    pub fn racine_nieme(&mut self, indice: f64, radicande: f64) -> Result<f64, ErreurCalc> {
        if radicande < 0.0 && indice % 2.0 == 0.0 {
            return Err(ErreurCalc::HorsDomaine(
                "racine paire d'un nombre négatif".to_string(),
            ));
        }
        let resultat = radicande.powf(1.0 / indice);
        self.consigner(format!("{indice}√{radicande} = {resultat}"));
        Ok(resultat)
    }

    /* ------------------------ Logarithmes ------------------------ */

    pub fn log_neperien(&mut self, valeur: f64) -> Result<f64, ErreurCalc> {
        if valeur <= 0.0 {
            return Err(ErreurCalc::HorsDomaine(
                "logarithme népérien défini pour x > 0".to_string(),
            ));
        }
        let resultat = valeur.ln();
        self.consigner(format!("ln({valeur}) = {resultat}"));
        Ok(resultat)
    }

    pub fn log_decimal(&mut self, valeur: f64) -> Result<f64, ErreurCalc> {
        if valeur <= 0.0 {
            return Err(ErreurCalc::HorsDomaine(
                "logarithme décimal défini pour x > 0".to_string(),
            ));
        }
        let resultat = valeur.log10();
        self.consigner(format!("log10({valeur}) = {resultat}"));
        Ok(resultat)
    }

    /// ln(x)/ln(base) ; base et valeur strictement positives, base ≠ 1.
    pub fn log_base(&mut self, base: f64, valeur: f64) -> Result<f64, ErreurCalc> {
        if valeur <= 0.0 || base <= 0.0 || base == 1.0 {
            return Err(ErreurCalc::HorsDomaine(
                "log_base exige base > 0, base ≠ 1 et x > 0".to_string(),
            ));
        }
        let resultat = valeur.ln() / base.ln();
        self.consigner(format!("log{base}({valeur}) = {resultat}"));
        Ok(resultat)
    }

    pub fn exponentielle(&mut self, valeur: f64) -> f64 {
        let resultat = valeur.exp();
        self.consigner(format!("e^{valeur} = {resultat}"));
        resultat
    }

    /* ------------------------ Factorielle ------------------------ */

    /// Produit itératif 1×2×...×n ; n borné à 20 (capacité i64).
    pub fn factorielle(&mut self, n: i64) -> Result<i64, ErreurCalc> {
        if n < 0 {
            return Err(ErreurCalc::ArgumentInvalide(format!(
                "factorielle définie pour n ≥ 0, reçu {n}"
            )));
        }
        if n > FACTORIELLE_MAX {
            return Err(ErreurCalc::Depassement(format!(
                "{n}! dépasse la capacité d'un entier 64 bits"
            )));
        }
        let mut resultat: i64 = 1;
        for i in 2..=n {
            resultat *= i;
        }
        self.consigner(format!("{n}! = {resultat}"));
        Ok(resultat)
    }

    /* ------------------------ Divers ------------------------ */

    pub fn valeur_absolue(&mut self, valeur: f64) -> f64 {
        let resultat = valeur.abs();
        self.consigner(format!("|{valeur}| = {resultat}"));
        resultat
    }

    /// Arrondi demi-supérieur (floor(y + 0.5)) à `decimales` décimales.
    pub fn arrondir(&mut self, valeur: f64, decimales: i32) -> f64 {
        let facteur = 10f64.powi(decimales);
        let resultat = (valeur * facteur + 0.5).floor() / facteur;
        self.consigner(format!("round({valeur}, {decimales}) = {resultat}"));
        resultat
    }
}
