use logis_core::Document;
use serde_json::Value;

use crate::types::{OccupancyCounts, RoomRecord};

pub const OCCUPIED_STATE: &str = "Occupée";
pub const AVAILABLE_STATE: &str = "Disponible";
/// Rendered for any room field the API leaves out.
pub const MISSING_FIELD: &str = "N/A";
/// Occupant metadata of every room that is not occupied.
pub const NO_OCCUPANT: &str = "none";
pub const STATISTICS_DOCUMENT_ID: &str = "statistiques";

const STATISTICS_SOURCE: &str = "api_statistiques";
const ROOMS_SOURCE: &str = "api_chambres";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OccupancyStatistics {
    pub occupied: u64,
    pub available: u64,
}

impl OccupancyStatistics {
    pub fn new(occupied: u64, available: u64) -> Self {
        Self {
            occupied,
            available,
        }
    }

    /// Missing or non-numeric counts are treated as zero.
    pub fn from_counts(counts: &OccupancyCounts) -> Self {
        Self {
            occupied: count(counts.get(OCCUPIED_STATE)),
            available: count(counts.get(AVAILABLE_STATE)),
        }
    }

    pub fn total(&self) -> u64 {
        self.occupied.saturating_add(self.available)
    }

    /// Percentage of occupied rooms rounded to one decimal, 0 for an empty
    /// residence. Rounding is half-to-even on the exact binary value of the
    /// percentage, so 1 of 400 rooms gives 0.2 and 3 of 2000 gives 0.1.
    pub fn occupancy_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let percent = self.occupied as f64 / total as f64 * 100.0;
        format!("{percent:.1}").parse().unwrap_or(percent)
    }

    fn formatted_rate(&self) -> String {
        if self.total() == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.occupancy_rate())
        }
    }
}

fn count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(number)) => number.as_u64().unwrap_or(0),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

pub fn statistics_document(stats: &OccupancyStatistics) -> Document {
    let content = format!(
        "Statistiques globales des logements:\n\
         - Nombre total des chambres occupées: {}\n\
         - Nombre total des chambres disponibles: {}\n\
         - Nombre total de chambres: {}\n\
         - Taux d'occupation: {}%",
        stats.occupied,
        stats.available,
        stats.total(),
        stats.formatted_rate()
    );

    Document::new(STATISTICS_DOCUMENT_ID, content)
        .with_metadata("source", STATISTICS_SOURCE)
        .with_metadata("type", "statistiques_globales")
        .with_metadata("occupees", stats.occupied)
        .with_metadata("disponibles", stats.available)
        .with_metadata("total", stats.total())
        .with_metadata("taux_occupation", stats.occupancy_rate())
}

/// Builds the document for the room at `position` in the API listing.
pub fn room_document(position: usize, room: &RoomRecord) -> Document {
    let numero = display(room.numero_chambre.as_ref());
    let etat = display(room.etat.as_ref());
    let surface = display(room.surface.as_ref());
    let type_chambre = display(room.type_chambre.as_ref());
    let etage = display(room.etage.as_ref());
    let batiment = display(room.batiment.as_ref());

    let occupied = etat == OCCUPIED_STATE;
    let occupant = if occupied {
        display(room.etudiant_nom.as_ref())
    } else {
        NO_OCCUPANT.to_string()
    };
    let occupant_line = if occupied {
        occupant.clone()
    } else {
        "Aucun (chambre disponible)".to_string()
    };

    let content = format!(
        "Chambre numéro {numero}:\n\
         - État: {etat}\n\
         - Surface: {surface} m²\n\
         - Type de chambre: {type_chambre}\n\
         - Étage: {etage}\n\
         - Bâtiment: {batiment}\n\
         - Occupant: {occupant_line}"
    );

    Document::new(format!("chambre-{numero}-{position}"), content)
        .with_metadata("source", ROOMS_SOURCE)
        .with_metadata("numero_chambre", numero)
        .with_metadata("etat", etat)
        .with_metadata("type_chambre", type_chambre)
        .with_metadata("batiment", batiment)
        .with_metadata("etage", coerce_integer(room.etage.as_ref()))
        .with_metadata("surface", coerce_integer(room.surface.as_ref()))
        .with_metadata("occupant", occupant)
}

fn display(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_FIELD.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Numbers become integers (fractions truncated), digit-only strings are
/// parsed, anything else keeps its rendered form.
fn coerce_integer(value: Option<&Value>) -> Value {
    match value {
        Some(Value::Number(number)) => match number.as_i64() {
            Some(int) => Value::from(int),
            None => number
                .as_f64()
                .map(|float| Value::from(float.trunc() as i64))
                .unwrap_or_else(|| Value::from(number.to_string())),
        },
        Some(Value::String(text))
            if !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit()) =>
        {
            text.parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::from(text.clone()))
        }
        other => Value::from(display(other)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn coerce_integer_handles_numbers_digits_and_text() {
        assert_eq!(coerce_integer(Some(&json!(3))), json!(3));
        assert_eq!(coerce_integer(Some(&json!(18.7))), json!(18));
        assert_eq!(coerce_integer(Some(&json!("12"))), json!(12));
        assert_eq!(coerce_integer(Some(&json!("RDC"))), json!("RDC"));
        assert_eq!(coerce_integer(Some(&json!("-1"))), json!("-1"));
        assert_eq!(coerce_integer(None), json!(MISSING_FIELD));
    }

    #[test]
    fn count_accepts_integers_and_digit_strings() {
        assert_eq!(count(Some(&json!(7))), 7);
        assert_eq!(count(Some(&json!(" 8 "))), 8);
        assert_eq!(count(Some(&json!("beaucoup"))), 0);
        assert_eq!(count(Some(&json!(-2))), 0);
        assert_eq!(count(None), 0);
    }

    #[test]
    fn display_renders_missing_and_numeric_values() {
        assert_eq!(display(None), MISSING_FIELD);
        assert_eq!(display(Some(&Value::Null)), MISSING_FIELD);
        assert_eq!(display(Some(&json!(102))), "102");
        assert_eq!(display(Some(&json!("B"))), "B");
    }
}
