//! Base d’affichage du résultat (DEC / HEX / BIN).

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Base {
    #[default]
    Decimal,
    Hexadecimal,
    Binaire,
}

impl Base {
    /// Cycle du bouton de base : DEC -> HEX -> BIN -> DEC.
    pub fn suivante(self) -> Self {
        match self {
            Base::Decimal => Base::Hexadecimal,
            Base::Hexadecimal => Base::Binaire,
            Base::Binaire => Base::Decimal,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Base::Decimal => "DEC",
            Base::Hexadecimal => "HEX",
            Base::Binaire => "BIN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Base;

    #[test]
    fn cycle_complet() {
        let b = Base::default();
        assert_eq!(b, Base::Decimal);
        assert_eq!(b.suivante(), Base::Hexadecimal);
        assert_eq!(b.suivante().suivante(), Base::Binaire);
        assert_eq!(b.suivante().suivante().suivante(), Base::Decimal);
    }
}
