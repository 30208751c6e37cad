use std::collections::BTreeMap;

use crate::domain::{
    classification::entities::{Classification, MetadataVerdict},
    product::entities::{DietSignals, ScalarFlag},
};

/// One encoding of the database's diet facts, in the order they are trusted.
#[derive(Debug, Clone, Copy)]
enum MetadataSignal<'a> {
    Tags(&'a [String]),
    Scalars {
        vegan: Option<bool>,
        vegetarian: Option<bool>,
    },
    StatusMap(&'a BTreeMap<String, Vec<String>>),
}

/// Diet facts asserted by a signal, independent of its encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DietFacts {
    vegan: bool,
    vegetarian: bool,
    non_vegan: bool,
    non_vegetarian: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Decision {
    Conclusive(Classification),
    /// Only "not vegan" is known; vegetarian status is left open on purpose.
    RefusedToGuess,
    Inconclusive,
}

impl MetadataSignal<'_> {
    fn label(&self) -> &'static str {
        match self {
            MetadataSignal::Tags(_) => "las etiquetas de análisis",
            MetadataSignal::Scalars { .. } => "los campos vegano/vegetariano",
            MetadataSignal::StatusMap(_) => "el análisis de ingredientes",
        }
    }

    /// Tag lists and the status map are complete statements: when present but
    /// inconclusive, the metadata stage stops with Unknown. Scalar fields give
    /// way to the next shape instead.
    fn ends_search_when_inconclusive(&self) -> bool {
        !matches!(self, MetadataSignal::Scalars { .. })
    }

    fn facts(&self) -> DietFacts {
        match self {
            MetadataSignal::Tags(tags) => {
                let has = |name: &str| tags.iter().any(|tag| tag_name(tag) == name);
                DietFacts {
                    vegan: has("vegan"),
                    vegetarian: has("vegetarian"),
                    non_vegan: has("non-vegan"),
                    non_vegetarian: has("non-vegetarian"),
                }
            }
            MetadataSignal::Scalars { vegan, vegetarian } => DietFacts {
                vegan: *vegan == Some(true),
                vegetarian: *vegetarian == Some(true),
                non_vegan: *vegan == Some(false),
                // An explicit vegan flag outranks a contradicting vegetarian=false.
                non_vegetarian: *vegetarian == Some(false) && *vegan != Some(true),
            },
            MetadataSignal::StatusMap(map) => {
                let says = |key: &str, value: &str| {
                    map.iter().any(|(k, values)| {
                        tag_name(k) == key && values.iter().any(|v| v.trim().eq_ignore_ascii_case(value))
                    })
                };
                DietFacts {
                    vegan: says("vegan", "yes") || says("non-vegan", "no"),
                    vegetarian: says("vegetarian", "yes") || says("non-vegetarian", "no"),
                    non_vegan: says("non-vegan", "yes") || says("vegan", "no"),
                    non_vegetarian: says("non-vegetarian", "yes") || says("vegetarian", "no"),
                }
            }
        }
    }
}

impl DietFacts {
    /// The single priority list shared by every encoding.
    fn decide(&self) -> Decision {
        if self.non_vegetarian {
            Decision::Conclusive(Classification::Omnivore)
        } else if self.vegan {
            Decision::Conclusive(Classification::Vegan)
        } else if self.vegetarian {
            // Covers both "vegetarian and non-vegan" and "vegetarian" alone.
            Decision::Conclusive(Classification::Vegetarian)
        } else if self.non_vegan {
            Decision::RefusedToGuess
        } else {
            Decision::Inconclusive
        }
    }
}

/// Strips the language namespace: `en:non-vegan` → `non-vegan`.
fn tag_name(tag: &str) -> String {
    let tag = tag.trim();
    let name = tag.rsplit_once(':').map(|(_, name)| name).unwrap_or(tag);
    name.to_lowercase()
}

fn signals_in_priority_order(signals: &DietSignals) -> Vec<MetadataSignal<'_>> {
    let mut ordered = Vec::with_capacity(3);

    if let Some(tags) = signals.tags.as_deref().filter(|tags| !tags.is_empty()) {
        ordered.push(MetadataSignal::Tags(tags));
    }

    let vegan = signals.vegan.as_ref().and_then(ScalarFlag::as_bool);
    let vegetarian = signals.vegetarian.as_ref().and_then(ScalarFlag::as_bool);
    if vegan.is_some() || vegetarian.is_some() {
        ordered.push(MetadataSignal::Scalars { vegan, vegetarian });
    }

    if let Some(map) = signals.status_map.as_ref().filter(|map| !map.is_empty()) {
        ordered.push(MetadataSignal::StatusMap(map));
    }

    ordered
}

/// Conservative decision over the database's own diet metadata. Only a
/// conclusive answer carries a source; anything ambiguous is left to the
/// ingredient-based stages.
pub fn classify_from_metadata(signals: &DietSignals) -> MetadataVerdict {
    for signal in signals_in_priority_order(signals) {
        match signal.facts().decide() {
            Decision::Conclusive(classification) => {
                tracing::debug!(
                    signal = signal.label(),
                    classification = %classification,
                    "structured metadata is conclusive"
                );
                return MetadataVerdict::conclusive(
                    classification,
                    format!(
                        "Según {} de la base de datos de productos, el producto es {}",
                        signal.label(),
                        classification.display_name()
                    ),
                );
            }
            Decision::RefusedToGuess if signal.ends_search_when_inconclusive() => {
                return MetadataVerdict::inconclusive(format!(
                    "Según {} de la base de datos de productos, el producto no es vegano, pero no indican si es vegetariano",
                    signal.label()
                ));
            }
            Decision::Inconclusive if signal.ends_search_when_inconclusive() => {
                return MetadataVerdict::inconclusive(format!(
                    "Los datos de {} de la base de datos de productos no son concluyentes",
                    signal.label()
                ));
            }
            Decision::RefusedToGuess | Decision::Inconclusive => {
                tracing::debug!(signal = signal.label(), "metadata signal inconclusive, trying next");
            }
        }
    }

    MetadataVerdict::inconclusive(
        "La base de datos de productos no tiene información vegana ni vegetariana",
    )
}
