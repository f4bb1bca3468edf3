use serde::{Deserialize, Serialize};

/// Legal person kind, driving which tax-id mask applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    #[default]
    Individual,
    Organization,
}

impl PersonKind {
    pub fn label(self) -> &'static str {
        match self {
            PersonKind::Individual => "Individual",
            PersonKind::Organization => "Organization",
        }
    }

    /// Display pattern of the matching tax-id mask.
    pub fn tax_id_placeholder(self) -> &'static str {
        match self {
            PersonKind::Individual => "000.000.000-00",
            PersonKind::Organization => "00.000.000/0000-00",
        }
    }

    pub fn wire_value(self) -> &'static str {
        match self {
            PersonKind::Individual => "individual",
            PersonKind::Organization => "organization",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_lowercase_wire_values() {
        assert_eq!(
            serde_json::to_string(&PersonKind::Organization).unwrap(),
            "\"organization\""
        );
        let kind: PersonKind = serde_json::from_str("\"individual\"").unwrap();
        assert_eq!(kind, PersonKind::Individual);
    }
}
