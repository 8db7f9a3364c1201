use crate::shared::bounding_box::BoundingBox;

/// A face the recognition service matched to a public figure.
#[derive(Clone, Debug, PartialEq)]
pub struct Celebrity {
    pub bounding_box: BoundingBox,
    pub name: String,
    pub match_confidence: f64,
}

impl Celebrity {
    /// Builds a record from wire fields that may be absent.
    ///
    /// A missing name becomes the empty string and a missing confidence
    /// becomes 0.0, so an unnamed face never qualifies by accident.
    pub fn from_wire(
        bounding_box: BoundingBox,
        name: Option<String>,
        match_confidence: Option<f64>,
    ) -> Self {
        Self {
            bounding_box,
            name: name.unwrap_or_default(),
            match_confidence: match_confidence.unwrap_or(0.0),
        }
    }

    /// Strictly above the threshold: a face at exactly the threshold
    /// is not annotated.
    pub fn qualifies(&self, threshold: f64) -> bool {
        self.match_confidence > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn any_box() -> BoundingBox {
        BoundingBox {
            left: 0.1,
            top: 0.1,
            width: 0.2,
            height: 0.2,
        }
    }

    #[test]
    fn test_from_wire_with_all_fields() {
        let c = Celebrity::from_wire(any_box(), Some("Grace Hopper".into()), Some(99.2));
        assert_eq!(c.name, "Grace Hopper");
        assert_relative_eq!(c.match_confidence, 99.2);
    }

    #[test]
    fn test_missing_name_defaults_to_empty() {
        let c = Celebrity::from_wire(any_box(), None, Some(95.0));
        assert_eq!(c.name, "");
    }

    #[test]
    fn test_missing_confidence_defaults_to_zero() {
        let c = Celebrity::from_wire(any_box(), Some("Grace Hopper".into()), None);
        assert_relative_eq!(c.match_confidence, 0.0);
        assert!(!c.qualifies(90.0));
    }

    #[rstest]
    #[case::at_threshold(90.0, false)]
    #[case::just_above(90.0001, true)]
    #[case::well_below(0.0, false)]
    #[case::well_above(100.0, true)]
    fn test_qualifies_is_strictly_greater(#[case] confidence: f64, #[case] expected: bool) {
        let c = Celebrity::from_wire(any_box(), Some("x".into()), Some(confidence));
        assert_eq!(c.qualifies(90.0), expected);
    }
}
