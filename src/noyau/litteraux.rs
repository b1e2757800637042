// src/noyau/litteraux.rs
//
// Littéraux marqués -> décimal
// ----------------------------
// Un littéral en base 16 ou 2 est signalé par une lettre-marqueur :
//   3H, ffh, H3      -> hexadécimal (marqueur H)
//   1010Z, Z11       -> binaire     (marqueur Z)
//
// Règles:
// - Le marqueur se reconnaît sans tenir compte de la casse ; le reste du texte
//   est recopié tel quel (casse comprise).
// - On découpe en jetons sur les séparateurs (espaces, opérateurs, parenthèses,
//   et x/X qui sert de raccourci multiplication).
// - Jeton terminé par le marqueur (suffixe) : prioritaire. Sinon, jeton qui
//   commence par le marqueur (littéral en tête, "H3").
// - Un marqueur sans chiffres ("H" seul) ou des chiffres hors base => erreur.
//
// NOTE: doit tourner AVANT la substitution x -> * (raccourci.rs), sinon un x
// collé à un littéral ("2Hx3") ne sépare plus rien.

use num_bigint::BigUint;
use num_traits::Num;

use super::erreur::ErreurCalcul;

pub const MARQUEUR_HEX: char = 'H';
pub const MARQUEUR_BIN: char = 'Z';

/// Séparateurs de jetons. Recopiés tels quels dans la sortie.
fn est_separateur(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '+' | '-'
                | '*'
                | '/'
                | '('
                | ')'
                | 'x'
                | 'X'
                | '%'
                | '^'
                | '<'
                | '>'
                | '='
                | '!'
                | '&'
                | '|'
                | ','
        )
}

/// Réécrit chaque littéral marqué par `marqueur` (base `base`) en décimal.
///
/// Exemple:
///   normaliser("3H+2", 'H', 16)     -> "3+2"
///   normaliser("1010Z*2", 'Z', 2)   -> "10*2"
pub fn normaliser(entree: &str, marqueur: char, base: u32) -> Result<String, ErreurCalcul> {
    let m = marqueur.to_ascii_uppercase();

    // chemin rapide : aucun marqueur => identité
    if !entree.chars().any(|c| c.to_ascii_uppercase() == m) {
        return Ok(entree.to_string());
    }

    let chars: Vec<char> = entree.chars().collect();
    let mut out = String::with_capacity(entree.len());
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if est_separateur(c) {
            out.push(c);
            i += 1;
            continue;
        }

        let debut = i;
        while i < chars.len() && !est_separateur(chars[i]) {
            i += 1;
        }
        let jeton: String = chars[debut..i].iter().collect();
        out.push_str(&convertir_jeton(&jeton, m, base)?);
    }

    Ok(out)
}

/// Passe hex puis passe binaire, chacune sur la sortie de la précédente.
pub fn normaliser_bases(entree: &str) -> Result<String, ErreurCalcul> {
    let hex = normaliser(entree, MARQUEUR_HEX, 16)?;
    normaliser(&hex, MARQUEUR_BIN, 2)
}

fn convertir_jeton(jeton: &str, m: char, base: u32) -> Result<String, ErreurCalcul> {
    // fonctions de l’évaluateur (math::sinh, math::tanh…) : jamais un littéral
    if jeton.contains("::") {
        return Ok(jeton.to_string());
    }

    let est_marqueur = |c: char| c.to_ascii_uppercase() == m;

    let chiffres = match jeton
        .strip_suffix(est_marqueur)
        .or_else(|| jeton.strip_prefix(est_marqueur))
    {
        Some(ch) => ch,
        None => return Ok(jeton.to_string()),
    };

    let invalide = || ErreurCalcul::LitteralInvalide {
        litteral: jeton.to_string(),
        base,
    };

    // from_str_radix tolère '_' et un signe : on veut des chiffres purs.
    if chiffres.is_empty() || !chiffres.chars().all(|c| c.is_digit(base)) {
        return Err(invalide());
    }

    let n = BigUint::from_str_radix(chiffres, base).map_err(|_| invalide())?;
    Ok(n.to_string())
}
