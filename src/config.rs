//! Configuration de l’application.
//!
//! Fichier géré par confy (natif seulement). En wasm : valeurs par défaut.
//! Aucune donnée de calcul ici (ni saisie, ni base) : seulement des préférences.

use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
const CONFIG_NAME: &str = "autocalc";

/// Version du format de fichier comprise par ce binaire.
const CONFIG_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    /// Durée d’affichage des notices ("Result copied…", "Decimals…").
    pub delai_notice_s: u64,
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            delai_notice_s: 5,
            largeur: 420.0,
            hauteur: 160.0,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn charger_config() -> Config {
    match confy::load(CONFIG_NAME, None) {
        Ok(cfg) => valider(cfg),
        Err(e) => {
            tracing::warn!(erreur = %e, "configuration illisible, valeurs par défaut");
            Config::default()
        }
    }
}

/// Un fichier d’une autre version n’est pas interprété : valeurs par défaut.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn valider(cfg: Config) -> Config {
    if cfg.version != CONFIG_VERSION {
        tracing::warn!(
            version = cfg.version,
            attendue = CONFIG_VERSION,
            "version de configuration inconnue, valeurs par défaut"
        );
        return Config::default();
    }
    cfg
}

#[cfg(target_arch = "wasm32")]
pub fn charger_config() -> Config {
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::{valider, Config, CONFIG_VERSION};

    #[test]
    fn defauts() {
        let c = Config::default();
        assert_eq!(c.version, 1);
        assert_eq!(c.delai_notice_s, 5);
        assert!(c.largeur > 0.0 && c.hauteur > 0.0);
    }

    #[test]
    fn version_courante_conservee() {
        let cfg = Config {
            delai_notice_s: 9,
            ..Config::default()
        };
        assert_eq!(valider(cfg.clone()), cfg);
    }

    #[test]
    fn version_inconnue_remplacee() {
        let cfg = Config {
            version: CONFIG_VERSION + 1,
            delai_notice_s: 9,
            ..Config::default()
        };
        assert_eq!(valider(cfg), Config::default());
    }
}
