// src/noyau/raccourci.rs
//
// Raccourci multiplication : x / X -> *
//
// Remplacement caractère par caractère, sans contexte. Ne distingue pas un x
// "multiplication" d’un x qui ferait partie d’un identifiant : c’est pourquoi
// la normalisation des littéraux (litteraux.rs) passe obligatoirement avant.

/// Remplace chaque `x` / `X` par `*`.
pub fn substituer_multiplication(entree: &str) -> String {
    entree
        .chars()
        .map(|c| if matches!(c, 'x' | 'X') { '*' } else { c })
        .collect()
}
