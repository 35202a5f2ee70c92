// src/models/bundle.rs
// the JSON-based mesh bundle

use nannou::geom::Tri;
use nannou::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct MeshData {
    pub name: String,
    pub vertices: Vec<[f32; 3]>,
    pub triangles: Vec<[u32; 3]>,
}

impl MeshData {
    /// Triangles as renderable geometry, vertices scaled by `scale`.
    pub fn tris(&self, scale: f32) -> Vec<Tri<Point3>> {
        self.triangles
            .iter()
            .map(|idx| {
                Tri([
                    self.vertex(idx[0], scale),
                    self.vertex(idx[1], scale),
                    self.vertex(idx[2], scale),
                ])
            })
            .collect()
    }

    fn vertex(&self, index: u32, scale: f32) -> Point3 {
        let v = self.vertices[index as usize];
        pt3(v[0] * scale, v[1] * scale, v[2] * scale)
    }
}

/// Named meshes loaded from a bundle file. Meshes are shared read-only;
/// instances clone the Arc.
#[derive(Debug, Default)]
pub struct ModelBundle {
    meshes: Vec<Arc<MeshData>>,
}

impl ModelBundle {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, Box<dyn Error>> {
        #[derive(Deserialize)]
        struct BundleFile {
            meshes: Vec<MeshData>,
        }

        let file: BundleFile = serde_json::from_str(content)?;
        let mut meshes = Vec::with_capacity(file.meshes.len());
        for mut mesh in file.meshes {
            let vertex_count = mesh.vertices.len() as u32;
            let before = mesh.triangles.len();
            mesh.triangles
                .retain(|t| t.iter().all(|&i| i < vertex_count));
            if mesh.triangles.len() < before {
                log::warn!(
                    "mesh '{}': dropped {} triangle(s) with out-of-range indices",
                    mesh.name,
                    before - mesh.triangles.len()
                );
            }
            meshes.push(Arc::new(mesh));
        }
        Ok(Self { meshes })
    }

    pub fn mesh(&self, name: &str) -> Option<Arc<MeshData>> {
        self.meshes
            .iter()
            .find(|m| m.name == name)
            .map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLE: &str = r#"{
        "meshes": [
            {
                "name": "potato1",
                "vertices": [[0.0, 0.05, 0.0], [0.04, 0.0, 0.0], [-0.04, 0.0, 0.01], [0.0, -0.05, -0.01]],
                "triangles": [[0, 1, 2], [1, 3, 2]]
            },
            {
                "name": "potato2",
                "vertices": [[0.0, 0.05, 0.0], [0.04, 0.0, 0.0], [-0.04, 0.0, 0.0]],
                "triangles": [[0, 1, 2], [0, 1, 9]]
            }
        ]
    }"#;

    #[test]
    fn test_lookup_by_name() {
        let bundle = ModelBundle::from_json(BUNDLE).unwrap();
        assert_eq!(bundle.len(), 2);
        assert!(bundle.mesh("potato1").is_some());
        assert!(bundle.mesh("potato7").is_none());
    }

    #[test]
    fn test_out_of_range_triangles_are_dropped() {
        let bundle = ModelBundle::from_json(BUNDLE).unwrap();
        let mesh = bundle.mesh("potato2").unwrap();
        assert_eq!(mesh.triangles.len(), 1);
    }

    #[test]
    fn test_tris_apply_scale() {
        let bundle = ModelBundle::from_json(BUNDLE).unwrap();
        let mesh = bundle.mesh("potato1").unwrap();
        let tris = mesh.tris(1000.0);
        assert_eq!(tris.len(), 2);
        let Tri([a, _, _]) = tris[0];
        assert!((a.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ModelBundle::from_json("{\"meshes\": 12}").is_err());
    }
}
