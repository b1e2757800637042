//! Erreurs du noyau.
//!
//! Deux causes seulement : un littéral marqué illisible dans sa base,
//! ou un refus de l’évaluateur. Le pipeline (eval.rs) les fusionne en un
//! seul état "Error" : l’appelant ne voit jamais la différence.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Littéral `…H` / `…Z` dont le morceau de chiffres n’est pas valide en base `base`.
    #[error("littéral invalide en base {base}: {litteral:?}")]
    LitteralInvalide { litteral: String, base: u32 },

    /// Expression refusée (ou résultat inexploitable) par l’évaluateur.
    #[error("évaluation impossible: {0}")]
    Evaluation(String),
}
