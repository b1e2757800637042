// src/noyau/moteur.rs
//
// Adaptateur vers l’évaluateur externe (evalexpr)
// -----------------------------------------------
// evalexpr est traité en boîte noire : on lui passe une expression infixe
// (+ - * / % ^, parenthèses, comparaisons, && || !, true/false) et on récupère
// un nombre ou un booléen.
//
// Deux ajustements seulement :
// - les entiers isolés deviennent des flottants ("7" -> "7.0") pour que "/"
//   soit une vraie division (7/2 = 3.5) et non une division entière ;
// - le flottant obtenu passe en Decimal (virgule fixe), arrondi à 15 chiffres
//   significatifs : 0.1+0.2 s’affiche 0.3, pas 0.30000000000000004.

use std::str::FromStr;

use evalexpr::Value;
use rust_decimal::Decimal;

use super::erreur::ErreurCalcul;

/// Chiffres significatifs gardés d’un f64 (au-delà : bruit binaire).
const CHIFFRES_SIGNIFICATIFS: u32 = 15;

/// Résultat d’une évaluation réussie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Valeur {
    Nombre(Decimal),
    Booleen(bool),
}

/// Évalue une expression déjà normalisée (littéraux en décimal, x -> *).
pub fn evaluer(expr: &str) -> Result<Valeur, ErreurCalcul> {
    let prepare = promouvoir_entiers(expr);
    let v = evalexpr::eval(&prepare).map_err(|e| ErreurCalcul::Evaluation(e.to_string()))?;
    vers_valeur(v)
}

fn vers_valeur(v: Value) -> Result<Valeur, ErreurCalcul> {
    match v {
        Value::Boolean(b) => Ok(Valeur::Booleen(b)),
        Value::Int(n) => Ok(Valeur::Nombre(Decimal::from(n))),
        Value::Float(f) => flottant_vers_decimal(f).map(Valeur::Nombre),
        autre => Err(ErreurCalcul::Evaluation(format!(
            "résultat non numérique: {autre}"
        ))),
    }
}

fn flottant_vers_decimal(f: f64) -> Result<Decimal, ErreurCalcul> {
    if !f.is_finite() {
        return Err(ErreurCalcul::Evaluation(format!("résultat non fini: {f}")));
    }

    let hors_plage = || ErreurCalcul::Evaluation(format!("hors plage décimale: {f}"));

    // from_f64_retain garde la valeur binaire exacte (jusqu’à 28 décimales) ;
    // l’écriture courte ne sert qu’en repli.
    let d = Decimal::from_f64_retain(f)
        .or_else(|| Decimal::from_str(&f.to_string()).ok())
        .ok_or_else(hors_plage)?;

    // normalize : forme canonique (pas de zéros de queue, pas de "-0")
    let d = d.round_sf(CHIFFRES_SIGNIFICATIFS).unwrap_or(d);
    Ok(d.normalize())
}

/// Fait partie d’un mot/nombre : un chiffre collé à l’un de ces caractères
/// n’est pas un entier isolé.
fn est_colle(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// "7/2" -> "7.0/2.0" ; laisse "1.5", "1e3", "x1" intacts.
fn promouvoir_entiers(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut out = String::with_capacity(expr.len() + 8);
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];
        let colle_avant = i > 0 && est_colle(chars[i - 1]);

        if c.is_ascii_digit() && !colle_avant {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            out.extend(&chars[debut..i]);

            let colle_apres = chars.get(i).is_some_and(|&s| est_colle(s));
            if !colle_apres {
                out.push_str(".0");
            }
            continue;
        }

        out.push(c);
        i += 1;
    }

    out
}
