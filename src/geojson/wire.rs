use serde::{Deserialize, Serialize};

use crate::domain::{FeatureCollection, MockFeature};

/// GeoJSON FeatureCollection as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeatureCollection {
    #[serde(rename = "type")]
    pub type_: String,
    pub features: Vec<GeoJsonFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(rename = "type")]
    pub type_: String,
    pub geometry: GeoJsonPolygon,
    pub properties: FeatureProperties,
}

/// Polygon geometry; coordinates are rings of [lon, lat]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonPolygon {
    #[serde(rename = "type")]
    pub type_: String,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub id: usize,
    pub shape: String,
}

impl From<&MockFeature> for GeoJsonFeature {
    fn from(feature: &MockFeature) -> Self {
        let ring = feature.ring.iter().map(|&(lon, lat)| [lon, lat]).collect();
        Self {
            type_: "Feature".to_string(),
            geometry: GeoJsonPolygon {
                type_: "Polygon".to_string(),
                coordinates: vec![ring],
            },
            properties: FeatureProperties {
                id: feature.id,
                shape: feature.shape.descriptor(),
            },
        }
    }
}

impl From<&FeatureCollection> for GeoJsonFeatureCollection {
    fn from(collection: &FeatureCollection) -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: collection.iter().map(GeoJsonFeature::from).collect(),
        }
    }
}

impl FeatureCollection {
    pub fn to_geojson(&self) -> GeoJsonFeatureCollection {
        GeoJsonFeatureCollection::from(self)
    }
}
