use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr, IntoEnumIterator};

/// The eight columns of a results feed, in display order.
///
/// The string form is the normalized header key produced by
/// [`crate::normalize::header_key`], so `"Temps puce"` resolves to
/// [`Field::TempsPuce`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Place,
    Dossard,
    Nom,
    Categorie,
    Temps,
    TempsPuce,
    PlaceParCategorie,
    EcartParCategorie,
}

/// How values of a column compare when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Time,
    Text,
}

impl Field {
    pub fn all() -> impl Iterator<Item = Field> {
        Field::iter()
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn from_key(key: &str) -> Option<Field> {
        key.parse().ok()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Field::Place => "Place",
            Field::Dossard => "Dossard",
            Field::Nom => "Nom",
            Field::Categorie => "Catégorie",
            Field::Temps => "Temps",
            Field::TempsPuce => "Temps puce",
            Field::PlaceParCategorie => "Place par catégorie",
            Field::EcartParCategorie => "Ecart par catégorie",
        }
    }

    pub const fn kind(self) -> ColumnKind {
        match self {
            Field::Place | Field::Dossard | Field::PlaceParCategorie => ColumnKind::Numeric,
            Field::Temps | Field::TempsPuce | Field::EcartParCategorie => ColumnKind::Time,
            Field::Nom | Field::Categorie => ColumnKind::Text,
        }
    }
}
