//! Ambiance Model

use serde::{Deserialize, Serialize};

/// Restaurant ambiance photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbianceImage {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URL
    pub image: String,
    /// Type label (e.g. "entrance", "dining")
    #[serde(rename = "type")]
    pub kind: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Images sharing one type label (derived, never stored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbianceType {
    #[serde(rename = "type")]
    pub kind: String,
    pub images: Vec<AmbianceImage>,
}

/// Resolved ambiance content: flat image list plus its grouping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmbianceData {
    pub images: Vec<AmbianceImage>,
    pub groups: Vec<AmbianceType>,
}

impl AmbianceData {
    pub fn new(images: Vec<AmbianceImage>) -> Self {
        let groups = group_by_type(&images);
        Self { images, groups }
    }

    /// Images flattened in group order
    pub fn grouped_images(&self) -> impl Iterator<Item = &AmbianceImage> {
        self.groups.iter().flat_map(|group| group.images.iter())
    }

    pub fn of_type(&self, kind: &str) -> Option<&AmbianceType> {
        self.groups.iter().find(|group| group.kind == kind)
    }
}

/// Group images by type label
///
/// Groups appear in order of first occurrence; images inside a group are
/// ordered by `display_order`, ties keeping input order.
pub fn group_by_type(images: &[AmbianceImage]) -> Vec<AmbianceType> {
    let mut groups: Vec<AmbianceType> = Vec::new();
    for image in images {
        match groups.iter_mut().find(|group| group.kind == image.kind) {
            Some(group) => group.images.push(image.clone()),
            None => groups.push(AmbianceType {
                kind: image.kind.clone(),
                images: vec![image.clone()],
            }),
        }
    }
    for group in &mut groups {
        group.images.sort_by_key(|image| image.display_order);
    }
    groups
}
