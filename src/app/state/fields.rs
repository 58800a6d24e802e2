//! Werte der Dimensions-Eingabefelder.
//!
//! `None` bedeutet: Feld ist leer, der Zeiger bestimmt den Wert. Die Felder
//! halten ausschließlich vom Operator eingetippte Werte (plus die Vorbelegung
//! beim Betreten des Wand-Bearbeitungsmodus).

/// Kennung eines Eingabefelds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    /// Dimensionseingabe U (Footprint: Länge; Wand: Lauflänge)
    EntryU,
    /// Dimensionseingabe V (Footprint: Höhe; Wand: Höhe)
    EntryV,
    /// Dimensionseingabe W (Footprint: Breite; Wand: Dicke)
    EntryW,
    /// Dimensionseingabe Basis-Höhe
    EntryBase,
    /// Seitenpanel: Länge
    PanelLength,
    /// Seitenpanel: Breite
    PanelWidth,
    /// Seitenpanel: Höhe
    PanelHeight,
    /// Seitenpanel: Basis-Höhe
    PanelBase,
    /// Expliziter Winkel-Override des Wand-Builders (Grad)
    CustomAngle,
}

/// Aktuelle Feldwerte.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimensionFields {
    pub entry_u: Option<f32>,
    pub entry_v: Option<f32>,
    pub entry_w: Option<f32>,
    pub entry_base: Option<f32>,
    pub panel_length: Option<f32>,
    pub panel_width: Option<f32>,
    pub panel_height: Option<f32>,
    pub panel_base: Option<f32>,
    pub custom_angle_deg: Option<f32>,
}

impl DimensionFields {
    /// Setzt ein Feld (`None` = Feld geleert).
    pub fn set(&mut self, field: FieldId, value: Option<f32>) {
        match field {
            FieldId::EntryU => self.entry_u = value,
            FieldId::EntryV => self.entry_v = value,
            FieldId::EntryW => self.entry_w = value,
            FieldId::EntryBase => self.entry_base = value,
            FieldId::PanelLength => self.panel_length = value,
            FieldId::PanelWidth => self.panel_width = value,
            FieldId::PanelHeight => self.panel_height = value,
            FieldId::PanelBase => self.panel_base = value,
            FieldId::CustomAngle => self.custom_angle_deg = value,
        }
    }

    /// Betrag eines Dimensionsfelds (Dimensionseingaben sind vorzeichenlos;
    /// das Vorzeichen kommt immer vom Zeiger-Delta).
    pub fn abs_value(value: Option<f32>) -> Option<f32> {
        value.map(f32::abs)
    }

    /// Leert die Dimensionseingaben (nach Commit/Abbruch einer Session).
    pub fn clear_entries(&mut self) {
        self.entry_u = None;
        self.entry_v = None;
        self.entry_w = None;
        self.entry_base = None;
    }
}
