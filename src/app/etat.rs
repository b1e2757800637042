//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la fenêtre (saisie, sortie du pipeline, base
//! d’affichage, notice temporaire) et offrir les actions (copier, reset,
//! changer de base) sans logique d’affichage.
//!
//! Contrats :
//! - Le calcul vit dans le noyau (`evaluer_saisie`) ; ici on ne fait que
//!   l’appeler et ranger le résultat.
//! - Le temps est injecté (`maintenant`, en secondes) : pas d’horloge cachée,
//!   donc actions testables.

use tracing::debug;

use crate::config::Config;
use crate::noyau::{evaluer_saisie, Base, Sortie};

/// Notice après copie du résultat.
pub const NOTICE_COPIE: &str = "Result copied to clipboard.";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub sortie: Sortie,
    pub notice: String,
    notice_expire: Option<f64>, // instant (s) où la notice disparaît

    // --- paramètres ---
    pub base: Base, // remise à DEC à chaque création de fenêtre
    delai_notice: f64,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppCalc {
    pub fn new(config: &Config) -> Self {
        Self {
            entree: String::new(),
            sortie: Sortie::Vide,
            notice: String::new(),
            notice_expire: None,
            base: Base::Decimal,
            delai_notice: config.delai_notice_s as f64,
            focus_entree: true,
        }
    }

    /* ------------------------ Pipeline ------------------------ */

    /// Réévalue la saisie courante. À appeler après chaque modification.
    pub fn rafraichir(&mut self, maintenant: f64) {
        self.sortie = evaluer_saisie(&self.entree, self.base);
        if let Some(n) = self.sortie.notice() {
            self.afficher_notice(n, maintenant);
        }
    }

    /* ------------------------ Actions ------------------------ */

    /// DEC -> HEX -> BIN -> DEC, puis réévaluation.
    pub fn basculer_base(&mut self, maintenant: f64) {
        self.base = self.base.suivante();
        debug!(base = self.base.libelle(), "changement de base");
        self.rafraichir(maintenant);
        self.focus_entree = true;
    }

    /// Texte à envoyer au presse-papiers (tel qu’affiché), + notice.
    pub fn copier_resultat(&mut self, maintenant: f64) -> String {
        let texte = self.sortie.texte().to_string();
        self.afficher_notice(NOTICE_COPIE, maintenant);
        self.focus_entree = true;
        texte
    }

    /// Échap : saisie vidée, sortie recalculée, notice effacée tout de suite.
    pub fn reset(&mut self, maintenant: f64) {
        self.entree.clear();
        self.rafraichir(maintenant);
        self.effacer_notice();
        self.focus_entree = true;
    }

    /* ------------------------ Notice temporaire ------------------------ */

    /// Efface la notice si son délai est écoulé.
    pub fn tick(&mut self, maintenant: f64) {
        if let Some(t) = self.notice_expire {
            if maintenant >= t {
                self.effacer_notice();
            }
        }
    }

    /// Temps restant avant effacement (pour programmer un repaint).
    pub fn notice_restante(&self, maintenant: f64) -> Option<f64> {
        self.notice_expire.map(|t| (t - maintenant).max(0.0))
    }

    fn afficher_notice(&mut self, texte: &str, maintenant: f64) {
        self.notice = texte.to_string();
        self.notice_expire = Some(maintenant + self.delai_notice);
    }

    fn effacer_notice(&mut self) {
        self.notice.clear();
        self.notice_expire = None;
    }
}
