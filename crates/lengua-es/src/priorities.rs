// Spanish rule priorities

use lengua_core::priority::{BasePriorities, Priority, PriorityTable};

/// Priorities of Spanish rules that deviate from the default of 0.
///
/// Higher values win when matches overlap. Relative order matters more than
/// the absolute numbers.
pub const SPANISH_PRIORITIES: &[(&str, Priority)] = &[
    ("CONFUSIONS2", 50), // above CONFUSIONS
    ("TE_TILDE", 50),
    ("PLURAL_SEPARADO", 50),
    ("INCORRECT_EXPRESSIONS", 40),
    ("MISSPELLING", 40),
    ("CONFUSIONS", 40),
    ("NO_SEPARADO", 40),
    ("DIACRITICS", 30),
    ("POR_CIERTO", 30),
    ("LO_LOS", 30),
    ("SE_CREO", 25), // below DIACRITICS_VERB_N_ADJ
    ("PRONOMBRE_SIN_VERBO", 25),
    ("AGREEMENT_DET_ABREV", 25), // above AGREEMENT_DET_NOUN
    ("MUCHO_NF", 25),            // above AGREEMENT_DET_NOUN
    ("AGREEMENT_DET_NOUN", 20),
    ("AGREEMENT_DET_ADJ", 10),
    ("TYPOGRAPHY", 10),
    ("HALLA_HAYA", 10),
    ("VALLA_VAYA", 10),
    ("ES_SIMPLE_REPLACE", 10),
    ("SEPARADO", 1),
    ("E_EL", -10),
    ("EL_TILDE", -10),
    ("TOO_LONG_PARAGRAPH", -15),
    ("PREP_VERB", -20),
    ("SUBJUNTIVO_FUTURO", -30),
    ("SUBJUNTIVO_PASADO", -30),
    ("SUBJUNTIVO_PASADO2", -30),
    ("AGREEMENT_ADJ_NOUN", -30),
    ("AGREEMENT_PARTICIPLE_NOUN", -30),
    ("AGREEMENT_POSTPONED_ADJ", -30),
    ("VOSEO", -40),
    ("MORFOLOGIK_RULE_ES", -100),
    ("UPPERCASE_SENTENCE_START", -200),
];

/// Category priorities every language inherits.
pub const BASE_CATEGORY_PRIORITIES: &[(&str, Priority)] = &[("STYLE", -50)];

pub fn spanish_table() -> PriorityTable {
    PriorityTable::new(SPANISH_PRIORITIES)
}

pub fn base_priorities() -> BasePriorities {
    BasePriorities::from_entries(BASE_CATEGORY_PRIORITIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn no_duplicate_ids() {
        let mut seen = HashSet::new();
        for (id, _) in SPANISH_PRIORITIES {
            assert!(seen.insert(*id), "duplicate id {id}");
        }
        assert_eq!(spanish_table().len(), SPANISH_PRIORITIES.len());
    }

    #[test]
    fn table_returns_declared_values() {
        let table = spanish_table();
        for &(id, priority) in SPANISH_PRIORITIES {
            assert_eq!(table.get(id), Some(priority), "{id}");
        }
    }

    #[test]
    fn sentence_start_is_lowest() {
        let min = SPANISH_PRIORITIES.iter().map(|&(_, p)| p).min().unwrap();
        assert_eq!(min, -200);
        let lowest: Vec<_> = SPANISH_PRIORITIES
            .iter()
            .filter(|&&(_, p)| p == min)
            .map(|&(id, _)| id)
            .collect();
        assert_eq!(lowest, ["UPPERCASE_SENTENCE_START"]);
    }
}
