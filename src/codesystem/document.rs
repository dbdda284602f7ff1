//! FHIR R4 `CodeSystem` document model for the band hierarchy.

use serde::{Deserialize, Serialize};

use crate::core::node::{HierarchyNode, NodeId};
use crate::hierarchy::builder::BandHierarchy;
use crate::hierarchy::tree::BandTree;

pub const PROPERTY_KIND: &str = "kind";
pub const PROPERTY_PREVIOUS: &str = "previous";
pub const PROPERTY_NEXT: &str = "next";

/// Descriptive fields of the published document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSystemMetadata {
    /// Canonical URL; also the `system` of every previous/next Coding
    pub url: String,
    pub version: String,
    pub name: String,
    pub title: String,
    pub publisher: Option<String>,
    pub description: Option<String>,
    pub experimental: Option<bool>,
    /// Publication date (YYYY-MM-DD)
    pub date: Option<String>,
}

impl Default for CodeSystemMetadata {
    fn default() -> Self {
        Self {
            url: "http://example.org/fhir/CodeSystem/human-cytoband-agnostic".to_string(),
            version: "1.2.0".to_string(),
            name: "HumanCytogeneticBandsAssemblyAgnostic".to_string(),
            title: "Human Cytogenetic Bands (Assembly-agnostic with prev/next)".to_string(),
            publisher: None,
            description: None,
            experimental: None,
            date: Some(chrono::Utc::now().format("%Y-%m-%d").to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystem {
    pub resource_type: String,
    pub url: String,
    pub version: String,
    pub name: String,
    pub title: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
    pub case_sensitive: bool,
    pub hierarchy_meaning: String,
    /// Total number of concepts at all levels
    pub count: usize,
    pub property: Vec<PropertyDefinition>,
    #[serde(default)]
    pub concept: Vec<Concept>,
}

/// Declaration of a concept property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "code")]
    Code,
    #[serde(rename = "Coding")]
    Coding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub code: String,
    pub display: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property: Vec<ConceptProperty>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concept: Vec<Concept>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptProperty {
    pub code: String,
    #[serde(flatten)]
    pub value: PropertyValue,
}

/// Property value, serialized as `valueCode` or `valueCoding`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyValue {
    ValueCode(String),
    ValueCoding(Coding),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coding {
    pub system: String,
    pub code: String,
    pub display: String,
}

impl Concept {
    /// Property value by code, if present
    #[must_use]
    pub fn property(&self, code: &str) -> Option<&PropertyValue> {
        self.property.iter().find(|p| p.code == code).map(|p| &p.value)
    }

    /// Code of the Coding held by a previous/next property
    #[must_use]
    pub fn linked_code(&self, property: &str) -> Option<&str> {
        match self.property(property)? {
            PropertyValue::ValueCoding(coding) => Some(&coding.code),
            PropertyValue::ValueCode(_) => None,
        }
    }

    /// Number of concepts in this subtree, including this one
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.concept.iter().map(Concept::subtree_len).sum::<usize>()
    }
}

fn property_definitions() -> Vec<PropertyDefinition> {
    vec![
        PropertyDefinition {
            code: PROPERTY_KIND.to_string(),
            description: Some("Structural level: chromosome, arm, region, band, or subband".to_string()),
            property_type: PropertyType::Code,
        },
        PropertyDefinition {
            code: PROPERTY_PREVIOUS.to_string(),
            description: Some("Preceding sibling in genomic order".to_string()),
            property_type: PropertyType::Coding,
        },
        PropertyDefinition {
            code: PROPERTY_NEXT.to_string(),
            description: Some("Following sibling in genomic order".to_string()),
            property_type: PropertyType::Coding,
        },
    ]
}

/// Coding pointing at another concept, displayed with that concept's label
fn coding_for(tree: &BandTree, system: &str, code: &str) -> Coding {
    let display = tree
        .get(code)
        .map_or_else(|| code.to_string(), |node| node.display.clone());
    Coding {
        system: system.to_string(),
        code: code.to_string(),
        display,
    }
}

fn concept_for(tree: &BandTree, id: NodeId, system: &str) -> Concept {
    let node: &HierarchyNode = tree.node(id);

    let mut property = vec![ConceptProperty {
        code: PROPERTY_KIND.to_string(),
        value: PropertyValue::ValueCode(node.kind().as_code().to_string()),
    }];
    if let Some(previous) = node.previous() {
        property.push(ConceptProperty {
            code: PROPERTY_PREVIOUS.to_string(),
            value: PropertyValue::ValueCoding(coding_for(tree, system, previous)),
        });
    }
    if let Some(next) = node.next() {
        property.push(ConceptProperty {
            code: PROPERTY_NEXT.to_string(),
            value: PropertyValue::ValueCoding(coding_for(tree, system, next)),
        });
    }

    Concept {
        code: node.code.clone(),
        display: node.display.clone(),
        property,
        concept: tree
            .children(id)
            .iter()
            .map(|&child| concept_for(tree, child, system))
            .collect(),
    }
}

impl CodeSystem {
    /// Render a built hierarchy as a `CodeSystem`, chromosomes in karyotype order
    #[must_use]
    pub fn from_hierarchy(hierarchy: &BandHierarchy, metadata: &CodeSystemMetadata) -> Self {
        let tree = hierarchy.tree();
        let concept: Vec<Concept> = tree
            .roots()
            .iter()
            .map(|&id| concept_for(tree, id, &metadata.url))
            .collect();
        let count = concept.iter().map(Concept::subtree_len).sum();

        Self {
            resource_type: "CodeSystem".to_string(),
            url: metadata.url.clone(),
            version: metadata.version.clone(),
            name: metadata.name.clone(),
            title: metadata.title.clone(),
            status: "active".to_string(),
            experimental: metadata.experimental,
            date: metadata.date.clone(),
            publisher: metadata.publisher.clone(),
            description: metadata.description.clone(),
            content: "complete".to_string(),
            case_sensitive: true,
            hierarchy_meaning: "part-of".to_string(),
            count,
            property: property_definitions(),
            concept,
        }
    }

    /// Find a concept anywhere in the tree by code
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Concept> {
        fn walk<'a>(concepts: &'a [Concept], code: &str) -> Option<&'a Concept> {
            for concept in concepts {
                if concept.code == code {
                    return Some(concept);
                }
                if let Some(found) = walk(&concept.concept, code) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.concept, code)
    }
}
