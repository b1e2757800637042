//! Tests robustesse : le pipeline est martelé à chaque frappe, y compris sur
//! des saisies incomplètes. On vérifie qu’il tient sans paniquer.
//!
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariants : Erreur => pas de notice ; DEC => jamais de notice ;
//!   même saisie + même base => même sortie ; texte vide <=> Vide

use std::time::{Duration, Instant};

use super::base::Base;
use super::eval::{evaluer_saisie, Sortie, TEXTE_ERREUR};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de saisies ------------------------ */

/// Alphabet "frappe clavier" : chiffres, lettres hex, marqueurs, x, opérateurs.
const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '7', '9', 'A', 'f', 'G', 'H', 'h', 'Z', 'z', 'x', 'X', '+', '-', '*', '/',
    '(', ')', ' ', '.', '<', '=', '!', '&', '|',
];

fn gen_bruit(rng: &mut Rng, max_len: u32) -> String {
    let n = rng.pick(max_len + 1);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/// Saisie "plausible" : littéraux marqués reliés par des opérateurs.
fn gen_plausible(rng: &mut Rng) -> String {
    let termes = 1 + rng.pick(4);
    let mut s = String::new();
    for k in 0..termes {
        if k > 0 {
            s.push_str(["+", " - ", "x", "*", "/"][rng.pick(5) as usize]);
        }
        match rng.pick(3) {
            0 => s.push_str(&rng.pick(1000).to_string()),
            1 => s.push_str(&format!("{:X}H", rng.pick(4096))),
            _ => s.push_str(&format!("{:b}Z", 1 + rng.pick(255))),
        }
    }
    s
}

fn check_invariants(entree: &str, base: Base, sortie: &Sortie) {
    match sortie {
        Sortie::Vide => assert!(entree.trim().is_empty(), "Vide pour {entree:?}"),
        Sortie::Erreur => {
            assert_eq!(sortie.texte(), TEXTE_ERREUR);
            assert!(sortie.notice().is_none());
        }
        Sortie::Resultat { texte, notice } => {
            assert!(!texte.is_empty(), "texte vide pour {entree:?}");
            if base == Base::Decimal {
                assert!(notice.is_none(), "notice en DEC pour {entree:?}");
            }
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn bruit_clavier_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xA17C_A1C0);

    for _ in 0..3000 {
        budget(start, max);
        let entree = gen_bruit(&mut rng, 24);
        for base in [Base::Decimal, Base::Hexadecimal, Base::Binaire] {
            let s1 = evaluer_saisie(&entree, base);
            check_invariants(&entree, base, &s1);

            let s2 = evaluer_saisie(&entree, base);
            assert_eq!(s1, s2, "non déterministe pour {entree:?}");
        }
    }
}

#[test]
fn saisies_plausibles_evaluables() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..1000 {
        budget(start, max);
        let entree = gen_plausible(&mut rng);
        let sortie = evaluer_saisie(&entree, Base::Decimal);
        check_invariants(&entree, Base::Decimal, &sortie);

        // tous les littéraux sont bien formés : seule une division par zéro
        // (terme nul) peut produire une erreur
        if sortie.est_erreur() {
            assert!(entree.contains('/'), "erreur inattendue pour {entree:?}");
        }
    }
}

#[test]
fn frappe_progressive() {
    // chaque préfixe d’une saisie réelle, comme le verrait la fenêtre
    let complete = "(FFH - 1010Z) x 2 / 3";
    let mut vus = 0;
    for (i, _) in complete.char_indices() {
        let prefixe = &complete[..i];
        for base in [Base::Decimal, Base::Hexadecimal, Base::Binaire] {
            check_invariants(prefixe, base, &evaluer_saisie(prefixe, base));
        }
        vus += 1;
    }
    assert!(vus > 0);
    assert_eq!(evaluer_saisie(complete, Base::Decimal).texte(), "163.333333333333");
}
