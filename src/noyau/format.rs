// src/noyau/format.rs
//
// Affichage du résultat selon la base choisie.
//
// - Booléen : "True"/"False", quelle que soit la base.
// - DEC : écriture canonique du Decimal.
// - HEX : troncature vers zéro, repli sur i32 (complément à deux), "0x" + majuscules.
// - BIN : même règle sur i16, "0b" + chiffres binaires.
// En HEX/BIN, la partie fractionnaire perdue est signalée (precision_perdue).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::base::Base;
use super::moteur::Valeur;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub texte: String,
    pub precision_perdue: bool,
}

pub fn formater(valeur: &Valeur, base: Base) -> Affichage {
    match valeur {
        Valeur::Booleen(b) => Affichage {
            texte: format_booleen(*b).to_string(),
            precision_perdue: false,
        },
        Valeur::Nombre(d) => formater_nombre(d, base),
    }
}

fn format_booleen(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

fn formater_nombre(d: &Decimal, base: Base) -> Affichage {
    let decimal = d.to_string();
    let precision_perdue = decimal.contains('.');

    // `as` sur les entiers = repli modulo 2^n (complément à deux)
    let texte = match base {
        Base::Decimal => {
            return Affichage {
                texte: decimal,
                precision_perdue: false,
            }
        }
        Base::Hexadecimal => format!("0x{:X}", tronquer(d) as i32),
        Base::Binaire => format!("0b{:b}", tronquer(d) as i16),
    };

    Affichage {
        texte,
        precision_perdue,
    }
}

/// Partie entière (vers zéro). La plage d’un Decimal (< 2^96) tient dans un i128.
fn tronquer(d: &Decimal) -> i128 {
    d.trunc().to_i128().unwrap_or_default()
}
