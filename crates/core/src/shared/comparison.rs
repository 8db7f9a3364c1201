use std::fmt;

use serde::Deserialize;

use crate::shared::bounding_box::BoundingBox;

/// A face found by the comparison service in either image.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ComparedFace {
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub confidence: f64,
}

/// A target-image face paired with the source face.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaceMatch {
    pub similarity: f64,
    pub face: ComparedFace,
}

/// The comparison service's response, carried through unmodified.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ComparisonResult {
    #[serde(default)]
    pub source_face: Option<ComparedFace>,
    #[serde(default)]
    pub face_matches: Vec<FaceMatch>,
    #[serde(default)]
    pub unmatched_faces: Vec<ComparedFace>,
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} matched face(s), {} unmatched",
            self.face_matches.len(),
            self.unmatched_faces.len()
        )?;
        for m in &self.face_matches {
            write!(f, "; similarity {:.2}%", m.similarity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deserializes_full_response() {
        let result: ComparisonResult = serde_json::from_str(
            r#"{
                "source_face": {
                    "bounding_box": {"left": 0.1, "top": 0.1, "width": 0.2, "height": 0.2},
                    "confidence": 99.9
                },
                "face_matches": [{
                    "similarity": 97.5,
                    "face": {
                        "bounding_box": {"left": 0.5, "top": 0.5, "width": 0.1, "height": 0.1},
                        "confidence": 99.1
                    }
                }],
                "unmatched_faces": []
            }"#,
        )
        .unwrap();

        assert!(result.source_face.is_some());
        assert_eq!(result.face_matches.len(), 1);
        assert_relative_eq!(result.face_matches[0].similarity, 97.5);
        assert!(result.unmatched_faces.is_empty());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let result: ComparisonResult = serde_json::from_str("{}").unwrap();
        assert!(result.source_face.is_none());
        assert!(result.face_matches.is_empty());
        assert!(result.unmatched_faces.is_empty());
    }

    #[test]
    fn test_display_reports_similarity() {
        let result: ComparisonResult = serde_json::from_str(
            r#"{
                "face_matches": [{
                    "similarity": 97.5,
                    "face": {
                        "bounding_box": {"left": 0.5, "top": 0.5, "width": 0.1, "height": 0.1}
                    }
                }],
                "unmatched_faces": [{
                    "bounding_box": {"left": 0.0, "top": 0.0, "width": 0.1, "height": 0.1}
                }]
            }"#,
        )
        .unwrap();

        let text = result.to_string();
        assert_eq!(text, "1 matched face(s), 1 unmatched; similarity 97.50%");
    }
}
