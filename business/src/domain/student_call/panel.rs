/// Display panel a call is published to. Each panel reads its own collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Infantil,
    Fundamental,
    General,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::General, Panel::Infantil, Panel::Fundamental];

    /// Routes a class description (e.g. `EI-2B`, `INT-AI 3A`) to its panel.
    pub fn for_class(class_name: &str) -> Self {
        let class_name = class_name.trim().to_uppercase();
        if class_name.starts_with("EI") {
            Panel::Infantil
        } else if class_name.contains("AI") || class_name.contains("AF") {
            Panel::Fundamental
        } else {
            Panel::General
        }
    }

    pub fn collection(&self) -> &'static str {
        match self {
            Panel::Infantil => "chamados_ei",
            Panel::Fundamental => "chamados_fund",
            Panel::General => "chamados",
        }
    }
}
