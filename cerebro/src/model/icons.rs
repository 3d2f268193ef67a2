#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionIcon {
    Food,
    Home,
    Transport,
    Party,
    Streaming,
    Health,
    Pets,
    Clothing,
    Debt,
    Education,
    Travel,
    Groceries,
    Insurance,
    Generic,
}

// Checked in order, first hit wins. The lone "U" is deliberately broad.
const RULES: [(SectionIcon, &[&str]); 13] = [
    (SectionIcon::Food, &["COMIDA", "FOOD", "ALMUERZO"]),
    (SectionIcon::Home, &["CASA", "HOME", "ARRIENDO"]),
    (
        SectionIcon::Transport,
        &["TRANSPORTE", "UBER", "AUTO", "BENCINA"],
    ),
    (SectionIcon::Party, &["VICIO", "ALCOHOL", "FIESTA"]),
    (SectionIcon::Streaming, &["STREAM", "NETFLIX", "SPOTIFY"]),
    (SectionIcon::Health, &["SALUD", "FARMACIA", "DOCTOR"]),
    (SectionIcon::Pets, &["MASCOTA", "PERRO", "GATO", "VET"]),
    (SectionIcon::Clothing, &["ROP", "ZAPAT", "VESTIMENTA"]),
    (SectionIcon::Debt, &["DEUDA", "CREDITO", "PRESTAMO"]),
    (SectionIcon::Education, &["EDUCACION", "CURSO", "U"]),
    (SectionIcon::Travel, &["VIAJE", "VACACION"]),
    (SectionIcon::Groceries, &["SUPER", "MERCADO"]),
    (SectionIcon::Insurance, &["SEGUR", "SEGURO"]),
];

impl SectionIcon {
    /// Classify a section by case-insensitive keyword match on its name.
    pub fn classify(section_name: &str) -> Self {
        let name = section_name.to_uppercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
            .map(|(icon, _)| *icon)
            .unwrap_or(SectionIcon::Generic)
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            SectionIcon::Food => "🍕",
            SectionIcon::Home => "🏠",
            SectionIcon::Transport => "🚗",
            SectionIcon::Party => "🎉",
            SectionIcon::Streaming => "📺",
            SectionIcon::Health => "💊",
            SectionIcon::Pets => "🐶",
            SectionIcon::Clothing => "👕",
            SectionIcon::Debt => "💸",
            SectionIcon::Education => "🎓",
            SectionIcon::Travel => "✈️",
            SectionIcon::Groceries => "🛒",
            SectionIcon::Insurance => "🛡️",
            SectionIcon::Generic => "📦",
        }
    }
}

/// Icon for a row in the recent expenses list. Exact section match only.
pub fn recent_expense_icon(section: Option<&str>) -> &'static str {
    match section.unwrap_or("OTROS") {
        "COMIDAS" => "🍕",
        "TRANSPORTE" => "🚗",
        "VICIOS" => "🎉",
        "OTROS" => "📦",
        _ => "💰",
    }
}
