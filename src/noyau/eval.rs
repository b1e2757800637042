//! Noyau — évaluation (pipeline réel)
//!
//! saisie -> littéraux hex (H) -> littéraux binaires (Z) -> x/X => *
//!        -> évaluateur externe -> affichage selon la base
//!
//! Contrat : `evaluer_saisie` ne panique pas et ne renvoie jamais d’erreur.
//! Toute faute (littéral ou évaluateur) devient `Sortie::Erreur` ("Error"),
//! sans résultat partiel ni notice.

use tracing::debug;

use super::base::Base;
use super::erreur::ErreurCalcul;
use super::format::{formater, Affichage};
use super::litteraux::normaliser_bases;
use super::moteur::evaluer;
use super::raccourci::substituer_multiplication;

/// Texte affiché quand la saisie n’est pas évaluable.
pub const TEXTE_ERREUR: &str = "Error";

/// Notice quand HEX/BIN a tronqué des décimales.
pub const NOTICE_ARRONDI: &str = "Decimals have been rounded off.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sortie {
    /// Saisie vide ou blanche : rien à afficher, pas d’erreur.
    Vide,
    Resultat {
        texte: String,
        notice: Option<&'static str>,
    },
    Erreur,
}

impl Sortie {
    pub fn texte(&self) -> &str {
        match self {
            Sortie::Vide => "",
            Sortie::Resultat { texte, .. } => texte,
            Sortie::Erreur => TEXTE_ERREUR,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Sortie::Resultat { notice, .. } => *notice,
            Sortie::Vide | Sortie::Erreur => None,
        }
    }

    pub fn est_erreur(&self) -> bool {
        matches!(self, Sortie::Erreur)
    }
}

/// API publique : évalue la saisie telle que tapée, dans la base demandée.
pub fn evaluer_saisie(entree: &str, base: Base) -> Sortie {
    if entree.trim().is_empty() {
        return Sortie::Vide;
    }

    match pipeline(entree, base) {
        Ok(Affichage {
            texte,
            precision_perdue,
        }) => Sortie::Resultat {
            texte,
            notice: precision_perdue.then_some(NOTICE_ARRONDI),
        },
        Err(e) => {
            // fréquent : chaque frappe passe par ici, expressions incomplètes comprises
            debug!(entree, erreur = %e, "saisie non évaluable");
            Sortie::Erreur
        }
    }
}

fn pipeline(entree: &str, base: Base) -> Result<Affichage, ErreurCalcul> {
    // 1) Littéraux marqués (hex puis binaire)
    let normalisee = normaliser_bases(entree)?;

    // 2) Raccourci multiplication (strictement après 1)
    let expr = substituer_multiplication(&normalisee);

    // 3) Évaluateur externe
    let valeur = evaluer(&expr)?;

    // 4) Affichage
    Ok(formater(&valeur, base))
}
