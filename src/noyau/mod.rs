//! Noyau AutoCalc (sans UI)
//!
//! Organisation interne :
//! - base.rs       : base d’affichage DEC / HEX / BIN
//! - litteraux.rs  : littéraux marqués (…H hex, …Z binaire) -> décimal
//! - raccourci.rs  : x / X -> *
//! - moteur.rs     : adaptateur evalexpr -> Valeur (Decimal | bool)
//! - format.rs     : affichage selon la base + perte de précision
//! - erreur.rs     : ErreurCalcul
//! - eval.rs       : pipeline complet

pub mod base;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod litteraux;
pub mod moteur;
pub mod raccourci;

#[cfg(test)]
mod tests_robustesse;

// API publique minimale
pub use base::Base;
pub use eval::{evaluer_saisie, Sortie};
