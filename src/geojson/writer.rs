use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::GeoJsonFeatureCollection;
use crate::domain::FeatureCollection;
use crate::error::Result;

/// Serialize a collection to a GeoJSON string
///
/// `pretty` indents with two spaces; otherwise output is compact.
pub fn to_geojson_string(collection: &FeatureCollection, pretty: bool) -> Result<String> {
    let geojson = collection.to_geojson();
    let text = if pretty {
        serde_json::to_string_pretty(&geojson)?
    } else {
        serde_json::to_string(&geojson)?
    };
    Ok(text)
}

/// Write a collection to a GeoJSON file
///
/// # Returns
/// * Number of bytes written
pub fn write_geojson(path: &Path, collection: &FeatureCollection, pretty: bool) -> Result<u64> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let geojson = collection.to_geojson();
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &geojson)?;
    } else {
        serde_json::to_writer(&mut writer, &geojson)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(std::fs::metadata(path)?.len())
}

/// Read a GeoJSON file previously written by [`write_geojson`]
pub fn read_geojson(path: &Path) -> Result<GeoJsonFeatureCollection> {
    let file = File::open(path)?;
    let parsed = serde_json::from_reader(BufReader::new(file))?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockFeature, ShapeChoice};
    use tempfile::tempdir;

    fn sample_collection() -> FeatureCollection {
        let ring = vec![(10.0, 10.0), (11.0, 10.0), (11.0, 11.0), (10.0, 10.0)];
        FeatureCollection::new(vec![
            MockFeature::new(1, ring.clone(), ShapeChoice::NGon(3)),
            MockFeature::new(2, ring, ShapeChoice::Circle),
        ])
    }

    #[test]
    fn test_write_and_read_geojson() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mock.geojson");

        let collection = sample_collection();
        let bytes = write_geojson(&path, &collection, true).unwrap();
        assert!(bytes > 0);

        let parsed = read_geojson(&path).unwrap();
        assert_eq!(parsed, collection.to_geojson());
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let text = to_geojson_string(&sample_collection(), true).unwrap();
        assert!(text.starts_with("{\n  \"type\": \"FeatureCollection\""));

        let compact = to_geojson_string(&sample_collection(), false).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.len() < text.len());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("mock.geojson");
        assert!(write_geojson(&path, &sample_collection(), false).is_err());
    }
}
